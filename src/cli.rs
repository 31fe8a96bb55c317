// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the movie list (`TITLE (YEAR)/Last, First/...` per line)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Actor whose movies are counted and listed, as `"Last, First"`
    #[arg(short, long, default_value = "Eastwood, Clint")]
    pub actor: String,

    /// How the records are fed to the accumulators
    #[arg(long, value_enum, default_value_t = Mode::Sequential)]
    pub mode: Mode,

    /// Lines per chunk in parallel mode
    #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub chunk_size: u64,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One record at a time, in file order
    Sequential,
    /// Independent chunks on all cores, merged afterwards
    Parallel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_run() {
        let args = Args::try_parse_from(["reel-stats", "--input", "movies.txt"]).expect("valid args");
        assert_eq!(args.actor, "Eastwood, Clint");
        assert_eq!(args.mode, Mode::Sequential);
        assert_eq!(args.chunk_size, 10_000);
        assert!(!args.verbose);
    }

    #[test]
    fn zero_chunk_size_is_refused() {
        let result = Args::try_parse_from(["reel-stats", "-i", "m.txt", "--mode", "parallel", "--chunk-size", "0"]);
        assert!(result.is_err());
    }
}
