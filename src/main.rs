// External crates
use anyhow::{anyhow, Context, Result};
use log::LevelFilter;

// STD library
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

mod config;

use crate::config::{Config, Input, USAGE};
use trirast::parse::{parse_triangle, parse_triangles};
use trirast::{build_pool, rasterize_all, Canvas, Point2D};

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let config =
        Config::from_args(std::env::args().skip(1)).map_err(|e| anyhow!("{e}\n\n{USAGE}"))?;
    init_logging(config.verbose);

    let start = Instant::now();
    let points: Vec<Point2D> = match &config.input {
        Input::Vertices(tokens) => {
            let tri = parse_triangle(tokens.as_slice()).map_err(|e| anyhow!("{e}\n\n{USAGE}"))?;
            tri.rasterize()
        }
        Input::File(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let triangles = parse_triangles(BufReader::new(file))
                .with_context(|| format!("reading {}", path.display()))?;
            log::info!("{} triangles", triangles.len());
            let pool = build_pool(config.threads)?;
            pool.install(|| rasterize_all(&triangles)).into_iter().flatten().collect()
        }
    };
    log::info!("rasterized {} points in {:.2?}", points.len(), start.elapsed());
    println!("{}", points.len());

    if points.is_empty() {
        return Ok(());
    }
    let canvas = Canvas::fit(&points)?;
    if config.ascii {
        print!("{}", canvas.to_ascii());
    }
    if let Some(path) = &config.png {
        canvas.save_png(path).with_context(|| format!("writing {}", path.display()))?;
        println!("Saved {}", path.display());
    }
    Ok(())
}
