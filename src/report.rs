// src/report.rs

use std::fmt;

/// Finished text summary of one accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Report {
    pub fn new(heading: impl Into<String>) -> Self {
        Report { heading: heading.into(), lines: Vec::new() }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.heading)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Two digits after the decimal point
pub fn average(value: f64) -> String {
    format!("{value:.2}")
}

/// `1951, 1952, 1953`
pub fn join_numbers<T: fmt::Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// `"A", "B"`
pub fn quoted(titles: &[String]) -> String {
    titles.iter().map(|t| format!("\"{t}\"")).collect::<Vec<_>>().join(", ")
}
