use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

pub const USAGE: &str = "\
usage: trirast [--verbose] [--ascii] [--png PATH] [--threads N] (x,y x,y x,y | --file PATH)

try something like this:
\ttrirast 0,0 8,2 3,6
where the coordinates are whole numbers.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Vertices(Vec<String>),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub verbose: bool,
    pub ascii: bool,
    pub png: Option<PathBuf>,
    /// 0 means one thread per logical core
    pub threads: usize,
}

impl Config {
    /// Parses everything after the program name.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config> {
        let mut vertices = Vec::new();
        let mut file = None;
        let mut verbose = false;
        let mut ascii = false;
        let mut png = None;
        let mut threads = 0;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                "--ascii" => ascii = true,
                "--png" => png = Some(PathBuf::from(value(&mut args, "--png")?)),
                "--file" => file = Some(PathBuf::from(value(&mut args, "--file")?)),
                "--threads" => {
                    let n = value(&mut args, "--threads")?;
                    threads = n
                        .parse()
                        .map_err(|_| anyhow!("--threads expects a count, got `{n}`"))?;
                }
                flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
                _ => vertices.push(arg),
            }
        }

        let input = match (file, vertices.is_empty()) {
            (Some(_), false) => bail!("give either three vertices or --file, not both"),
            (Some(path), true) => Input::File(path),
            (None, true) => bail!("no vertices given"),
            (None, false) => Input::Vertices(vertices),
        };

        Ok(Config {
            input,
            verbose,
            // without an image sink, draw to the terminal
            ascii: ascii || png.is_none(),
            png,
            threads,
        })
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("{flag} expects a value"))
}
