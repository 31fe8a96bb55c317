// src/accumulators/years.rs

use super::{Accumulator, Merge};
use crate::extremal::{self, Maxima};
use crate::model::{bump, Record, YearCounts};
use crate::report::{self, Report};

/// Movies per release year. Records without a known year are tallied apart
/// and never enter `counts`.
#[derive(Debug, Clone, Default)]
pub struct YearHistogram {
    counts: YearCounts,
    unknown: u64,
}

/// Statistics over the years that have a known value
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub first: i32,
    pub last: i32,
    pub most: u64,
    pub least: u64,
    pub average: f64,
    /// Earliest year holding the highest count
    pub best: (i32, u64),
    pub busiest: Maxima<i32>,
}

impl YearHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> &YearCounts {
        &self.counts
    }

    /// Records whose year could not be parsed
    pub fn unknown(&self) -> u64 {
        self.unknown
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum::<u64>() + self.unknown
    }

    /// Every year in `[first, last]` with no movie, ascending
    pub fn years_without_movies(&self) -> Vec<i32> {
        let (Some(&first), Some(&last)) = (self.counts.keys().next(), self.counts.keys().next_back()) else {
            return Vec::new();
        };
        (first..=last).filter(|year| !self.counts.contains_key(year)).collect()
    }

    pub fn summary(&self) -> Option<YearSummary> {
        let entries = || self.counts.iter().map(|(&year, &count)| (year, count));
        let best = extremal::argmax(entries())?;
        let busiest = extremal::all_maxima(entries())?;

        let first = *self.counts.keys().next()?;
        let last = *self.counts.keys().next_back()?;
        let least = self.counts.values().copied().min()?;
        let sum: u64 = self.counts.values().sum();

        Some(YearSummary {
            first,
            last,
            most: busiest.count,
            least,
            average: sum as f64 / self.counts.len() as f64,
            best,
            busiest,
        })
    }
}

impl Accumulator for YearHistogram {
    fn consume(&mut self, record: &Record) {
        if record.has_known_year() {
            bump(&mut self.counts, record.release_year, 1);
        } else {
            self.unknown += 1;
        }
    }

    fn finalize(&self) -> Report {
        let mut report = Report::new("Release years")
            .line(format!("Movies without a year: {}", self.unknown))
            .line(format!("Distinct years: {}", self.counts.len()));

        let Some(summary) = self.summary() else {
            report.push("No movies with a known release year");
            return report;
        };

        report.push(format!("First year in movie database: {}", summary.first));
        report.push(format!("Last year in movie database: {}", summary.last));
        report.push(format!("Years without movies: {}", report::join_numbers(&self.years_without_movies())));
        report.push(format!("Most movies in a year: {}", summary.most));
        report.push(format!("Least movies in a year: {}", summary.least));
        report.push(format!("Average movies in a year: {}", report::average(summary.average)));
        report.push(format!("Best year was {} with {} movies", summary.best.0, summary.best.1));
        report.push(format!(
            "Busiest movie year(s): {} with {} releases",
            report::join_numbers(&summary.busiest.keys),
            summary.busiest.count
        ));
        report
    }
}

impl Merge for YearHistogram {
    fn fork(&self) -> Self {
        Self::new()
    }

    fn merge(&mut self, other: Self) {
        for (year, count) in other.counts {
            bump(&mut self.counts, year, count);
        }
        self.unknown += other.unknown;
    }
}
