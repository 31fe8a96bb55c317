// src/pipeline.rs

use crate::accumulators::{Accumulator, Merge};
use crate::error::{Result, StatsError};
use crate::parser;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Reads the dataset as lines. Bytes that are not valid UTF-8 are replaced
/// rather than rejected, since some title lists carry Latin-1 accents.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| StatsError::Io { source, path: path.to_path_buf() })?;
    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    tracing::info!(path = %path.display(), lines = lines.len(), "read movie list");
    Ok(lines)
}

fn progress_bar(len: u64, visible: bool, message: &'static str) -> ProgressBar {
    let bar = if visible { ProgressBar::new(len) } else { ProgressBar::hidden() };
    bar.set_message(message);
    bar
}

/// Parses and consumes every line in order. Returns the number of records.
pub fn run_sequential<A, S>(lines: &[S], sink: &mut A, show_progress: bool) -> usize
where
    A: Accumulator,
    S: AsRef<str>,
{
    let bar = progress_bar(lines.len() as u64, show_progress, "Parsing movies");
    for line in lines {
        sink.consume(&parser::parse(line.as_ref()));
        bar.inc(1);
    }
    bar.finish_with_message("Parsing complete");
    tracing::debug!(records = lines.len(), "sequential pass finished");
    lines.len()
}

/// Splits `lines` into chunks, runs a fork of `prototype` over each chunk on the
/// rayon pool, and merges the partial results in input order.
pub fn run_parallel<A, S>(lines: &[S], prototype: &A, chunk_size: usize, show_progress: bool) -> Result<A>
where
    A: Accumulator + Merge + Send + Sync,
    S: AsRef<str> + Sync,
{
    if chunk_size == 0 {
        return Err(StatsError::InvalidChunkSize);
    }

    let chunks = lines.len().div_ceil(chunk_size) as u64;
    let bar = progress_bar(chunks, show_progress, "Parsing movie chunks");

    let merged = lines
        .par_chunks(chunk_size)
        .progress_with(bar)
        .map(|chunk| {
            let mut partial = prototype.fork();
            for line in chunk {
                partial.consume(&parser::parse(line.as_ref()));
            }
            partial
        })
        .reduce(
            || prototype.fork(),
            |mut left, right| {
                left.merge(right);
                left
            },
        );

    tracing::debug!(records = lines.len(), chunks, chunk_size, "parallel pass finished");
    Ok(merged)
}
