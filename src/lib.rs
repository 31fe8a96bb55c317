// src/lib.rs

pub mod accumulators;
pub mod cli;
pub mod error;
pub mod extremal;
pub mod fanout;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod report;
