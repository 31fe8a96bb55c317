// src/accumulators/actors.rs

use super::{Accumulator, Merge};
use crate::extremal;
use crate::model::{bump, ActorName, ActorYearCounts, Record, YearCounts, UNKNOWN_YEAR};
use crate::report::{self, Report};
use std::collections::HashMap;

/// Per-actor titles and per-year movie counts, shared by the actor accumulators.
#[derive(Debug, Clone, Default)]
pub struct Credits {
    titles: HashMap<String, Vec<String>>,
    per_year: ActorYearCounts,
}

impl Credits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits every actor on the record, once per occurrence.
    pub fn add(&mut self, record: &Record) {
        for actor in &record.actors {
            self.titles.entry(actor.clone()).or_default().push(record.title.clone());
            bump(self.per_year.entry(actor.clone()).or_default(), record.release_year, 1);
        }
    }

    /// Titles credited to `actor` in input order; empty when unknown
    pub fn movies_for(&self, actor: &str) -> &[String] {
        self.titles.get(actor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn years_for(&self, actor: &str) -> Option<&YearCounts> {
        self.per_year.get(actor)
    }

    pub fn actor_count(&self) -> usize {
        self.titles.len()
    }

    pub fn per_year(&self) -> &ActorYearCounts {
        &self.per_year
    }

    /// `(actor, number of credited movies)`, sorted by actor so that ties
    /// resolve the same way on every run
    pub fn movie_counts(&self) -> Vec<(&str, u64)> {
        let mut counts: Vec<_> = self.titles.iter().map(|(actor, titles)| (actor.as_str(), titles.len() as u64)).collect();
        counts.sort_unstable();
        counts
    }

    /// `((actor, year), count)` over known years only, sorted by actor then year
    pub fn dated_counts(&self) -> Vec<((&str, i32), u64)> {
        let mut counts: Vec<_> = extremal::flatten(&self.per_year).filter(|((_, year), _)| *year != UNKNOWN_YEAR).collect();
        counts.sort_unstable();
        counts
    }

    /// Appends `other`'s credits after this one's.
    pub fn merge(&mut self, other: Credits) {
        for (actor, titles) in other.titles {
            self.titles.entry(actor).or_default().extend(titles);
        }
        for (actor, years) in other.per_year {
            let mine = self.per_year.entry(actor).or_default();
            for (year, count) in years {
                bump(mine, year, count);
            }
        }
    }
}

/// Distinct actors and the most prolific ones, overall and within one year.
/// Among tied actors the alphabetically first one is named the winner.
#[derive(Debug, Clone, Default)]
pub struct ActorHistogram {
    credits: Credits,
}

impl ActorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credits(&self) -> &Credits {
        &self.credits
    }
}

impl Accumulator for ActorHistogram {
    fn consume(&mut self, record: &Record) {
        self.credits.add(record);
    }

    fn finalize(&self) -> Report {
        let mut report = Report::new("Actors")
            .line(format!("There are {} unique actors in the database.", self.credits.actor_count()));

        let movie_counts = self.credits.movie_counts();
        let Some((actor, movies)) = extremal::argmax(movie_counts.iter().copied()) else {
            report.push("No actor appears in any movie.");
            return report;
        };
        report.push(format!("The actor with most movies is {actor} with {movies} movies."));

        if let Some(prolific) = extremal::all_maxima(movie_counts) {
            report.push(format!("Most prolific actor(s): {} with {} movies.", prolific.keys.join("; "), prolific.count));
        }

        let dated_counts = self.credits.dated_counts();
        if let Some(((actor, year), movies)) = extremal::argmax(dated_counts.iter().copied()) {
            report.push(format!("The most active actor in a year was {actor} with {movies} movies in {year}"));
        }

        if let Some(busiest) = extremal::all_maxima(dated_counts) {
            let pairs: Vec<String> = busiest.keys.iter().map(|(actor, year)| format!("{actor} in {year}")).collect();
            report.push(format!(
                "Most prolific actor(s) in one year: {} with {} movies.",
                pairs.join("; "),
                busiest.count
            ));
        }
        report
    }
}

impl Merge for ActorHistogram {
    fn fork(&self) -> Self {
        Self::new()
    }

    fn merge(&mut self, other: Self) {
        self.credits.merge(other.credits);
    }
}

/// The actor x year composite, reported for one actor of interest
#[derive(Debug, Clone)]
pub struct ActorYearHistogram {
    actor: String,
    credits: Credits,
}

impl ActorYearHistogram {
    pub fn new(actor: impl Into<String>) -> Self {
        ActorYearHistogram { actor: actor.into(), credits: Credits::new() }
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn composite(&self) -> &ActorYearCounts {
        self.credits.per_year()
    }

    pub fn movies_for(&self, actor: &str) -> &[String] {
        self.credits.movies_for(actor)
    }

    pub fn years_for(&self, actor: &str) -> Option<&YearCounts> {
        self.credits.years_for(actor)
    }
}

impl Accumulator for ActorYearHistogram {
    fn consume(&mut self, record: &Record) {
        self.credits.add(record);
    }

    fn finalize(&self) -> Report {
        let movies = self.movies_for(&self.actor);
        let mut report = Report::new(format!("Filmography of {}", self.actor))
            .line(format!("There are {} movies featuring {}", movies.len(), self.actor))
            .line(format!("Movies featuring {}: {}", self.actor, report::quoted(movies)));

        if let Some(years) = self.years_for(&self.actor) {
            let per_year: Vec<String> = years.iter().map(|(year, count)| format!("{year}: {count}")).collect();
            report.push(format!("{} per year: {}", self.actor, per_year.join(", ")));
        }
        report
    }
}

impl Merge for ActorYearHistogram {
    fn fork(&self) -> Self {
        Self::new(self.actor.clone())
    }

    fn merge(&mut self, other: Self) {
        self.credits.merge(other.credits);
    }
}

/// Counts records that credit one particular actor
#[derive(Debug, Clone)]
pub struct NamedActorCounter {
    actor: String,
    movies: u64,
}

impl NamedActorCounter {
    pub fn new(actor: impl Into<String>) -> Self {
        NamedActorCounter { actor: actor.into(), movies: 0 }
    }

    pub fn movies(&self) -> u64 {
        self.movies
    }
}

impl Accumulator for NamedActorCounter {
    fn consume(&mut self, record: &Record) {
        if record.actors.iter().any(|actor| *actor == self.actor) {
            self.movies += 1;
        }
    }

    fn finalize(&self) -> Report {
        let name = ActorName::parse(&self.actor).display_name();
        Report::new(format!("Movies with {name}")).line(format!("{name} acted in {} movies.", self.movies))
    }
}

impl Merge for NamedActorCounter {
    fn fork(&self) -> Self {
        Self::new(self.actor.clone())
    }

    fn merge(&mut self, other: Self) {
        self.movies += other.movies;
    }
}
