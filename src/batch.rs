use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::point2d::Point2D;
use crate::triangle::Triangle;

/// Rasterizes every triangle independently; results keep input order.
pub fn rasterize_all(triangles: &[Triangle]) -> Vec<Vec<Point2D>> {
    triangles
        .par_iter() // parallel iterator instead of .iter()
        .map(|tri| tri.rasterize())
        .collect()
}

/// Thread pool for `rasterize_all`; `threads == 0` uses every logical core.
pub fn build_pool(threads: usize) -> Result<ThreadPool, rayon::ThreadPoolBuildError> {
    let threads = if threads == 0 { num_cpus::get() } else { threads };
    log::debug!("building pool with {threads} threads");
    ThreadPoolBuilder::new().num_threads(threads).build()
}
