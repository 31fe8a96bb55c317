// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use reel_stats::cli::{Args, Mode};
use reel_stats::fanout::Fanout;
use reel_stats::pipeline;
use std::io::IsTerminal;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let start_time = Instant::now();

    let lines = pipeline::read_lines(&args.input)
        .with_context(|| format!("cannot load movie list {}", args.input.display()))?;
    let show_progress = std::io::stderr().is_terminal();

    let statistics = match args.mode {
        Mode::Sequential => {
            let mut fanout = Fanout::standard(&args.actor);
            pipeline::run_sequential(&lines, &mut fanout, show_progress);
            fanout
        }
        Mode::Parallel => {
            let prototype = Fanout::standard(&args.actor);
            let chunk_size = usize::try_from(args.chunk_size).context("chunk size does not fit in memory")?;
            pipeline::run_parallel(&lines, &prototype, chunk_size, show_progress)?
        }
    };
    tracing::info!(elapsed = ?start_time.elapsed(), records = lines.len(), "aggregation finished");

    for report in statistics.finalize_all() {
        println!("{report}");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "reel_stats=debug" } else { "reel_stats=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
