// src/parser.rs

use crate::model::{Record, UNKNOWN_YEAR};
use std::fmt;

/// Why a line ended up with [`UNKNOWN_YEAR`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearProblem {
    /// No `(` ... `)` pair in the title segment
    NoParentheses,
    /// Fewer than four characters inside the parentheses
    TooShort,
    /// The leading four characters are not a number
    NotNumeric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearDiagnostic {
    pub problem: YearProblem,
    /// The title segment (everything before the first `/`)
    pub segment: String,
}

impl fmt::Display for YearDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.problem {
            YearProblem::NoParentheses => "no parenthesised year",
            YearProblem::TooShort => "year shorter than four characters",
            YearProblem::NotNumeric => "year is not numeric",
        };
        write!(f, "{reason} in {:?}", self.segment)
    }
}

/// Parses a line, logging a warning when the year cannot be determined.
pub fn parse(line: &str) -> Record {
    let (record, diagnostic) = parse_with_diagnostic(line);
    if let Some(diagnostic) = diagnostic {
        tracing::warn!(%diagnostic, "release year could not be determined");
    }
    record
}

/// Parses `TITLE (YEAR...)/Last, First/Last, First/...`. Never fails: a bad year
/// becomes [`UNKNOWN_YEAR`] and is reported through the returned diagnostic.
pub fn parse_with_diagnostic(line: &str) -> (Record, Option<YearDiagnostic>) {
    let line = line.trim_end();
    let (segment, actor_list) = match line.split_once('/') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (line, None),
    };

    let actors = actor_list
        .map(|rest| {
            rest.split('/')
                .filter(|token| !token.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    // Byte offsets of the last '(' and the first ')' after it
    let parens = segment.rfind('(').and_then(|open| {
        segment[open + 1..].find(')').map(|close| (open, open + 1 + close))
    });

    let Some((open, close)) = parens else {
        let diagnostic = YearDiagnostic { problem: YearProblem::NoParentheses, segment: segment.to_string() };
        let record = Record { title: segment.to_string(), release_year: UNKNOWN_YEAR, actors };
        return (record, Some(diagnostic));
    };

    let title = segment[..open].trim().to_string();
    let (release_year, problem) = match parse_year(&segment[open + 1..close]) {
        Ok(year) => (year, None),
        Err(problem) => (UNKNOWN_YEAR, Some(problem)),
    };
    let diagnostic = problem.map(|problem| YearDiagnostic { problem, segment: segment.to_string() });

    (Record { title, release_year, actors }, diagnostic)
}

fn parse_year(inner: &str) -> Result<i32, YearProblem> {
    let inner = inner.trim();
    let digits: String = inner.chars().take(4).collect();
    if digits.chars().count() < 4 {
        return Err(YearProblem::TooShort);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(YearProblem::NotNumeric);
    }
    digits.parse::<i32>().map_err(|_| YearProblem::NotNumeric)
}
