// src/accumulators/titles.rs

use super::{Accumulator, Merge};
use crate::model::Record;
use crate::report::Report;
use std::collections::HashSet;

/// Counts movies and distinct titles
#[derive(Debug, Clone, Default)]
pub struct TitleCounter {
    total: u64,
    titles: HashSet<String>,
}

impl TitleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.titles.len()
    }
}

impl Accumulator for TitleCounter {
    fn consume(&mut self, record: &Record) {
        self.total += 1;
        if !self.titles.contains(&record.title) {
            self.titles.insert(record.title.clone());
        }
    }

    fn finalize(&self) -> Report {
        Report::new("Titles").line(format!(
            "There are {} movies in the database, with {} unique titles",
            self.total,
            self.distinct()
        ))
    }
}

impl Merge for TitleCounter {
    fn fork(&self) -> Self {
        Self::new()
    }

    fn merge(&mut self, other: Self) {
        self.total += other.total;
        self.titles.extend(other.titles);
    }
}
