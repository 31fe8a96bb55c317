// src/model.rs

use std::collections::{BTreeMap, HashMap};

/// Release year recorded when the title carries no usable year
pub const UNKNOWN_YEAR: i32 = -1;

/// One parsed movie line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub release_year: i32,
    /// Raw `"Last, First"` tokens in source order, duplicates kept
    pub actors: Vec<String>,
}

impl Record {
    pub fn has_known_year(&self) -> bool {
        self.release_year != UNKNOWN_YEAR
    }
}

/// Year -> number of movies, iterated in ascending year order
pub type YearCounts = BTreeMap<i32, u64>;

/// Actor -> (year -> number of movies).
/// Every actor present has at least one year with a non-zero count.
pub type ActorYearCounts = HashMap<String, YearCounts>;

/// Display view of an actor token. Identity stays the raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorName<'a> {
    pub last: &'a str,
    pub first: &'a str,
}

impl<'a> ActorName<'a> {
    pub fn parse(token: &'a str) -> Self {
        match token.split_once(',') {
            Some((last, first)) => ActorName { last: last.trim(), first: first.trim() },
            None => ActorName { last: "", first: token },
        }
    }

    /// `"First Last"`, or the bare token when there is no last name
    pub fn display_name(&self) -> String {
        match (self.first.is_empty(), self.last.is_empty()) {
            (_, true) => self.first.to_string(),
            (true, false) => self.last.to_string(),
            (false, false) => format!("{} {}", self.first, self.last),
        }
    }
}

/// Adds `by` to `key`'s count
pub(crate) fn bump<K: Ord>(counts: &mut BTreeMap<K, u64>, key: K, by: u64) {
    *counts.entry(key).or_insert(0) += by;
}
