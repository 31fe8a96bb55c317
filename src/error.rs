// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
}

pub type Result<T> = std::result::Result<T, StatsError>;
