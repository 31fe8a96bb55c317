// src/accumulators/mod.rs

//! Stateful consumers of parsed records.
//!
//! Each accumulator sees every record once through [`Accumulator::consume`] and
//! summarises what it saw in [`Accumulator::finalize`]. Accumulators that also
//! implement [`Merge`] can be run over disjoint chunks of the input and combined
//! afterwards; see [`crate::pipeline::run_parallel`].

mod actors;
mod titles;
mod years;

pub use actors::{ActorHistogram, ActorYearHistogram, Credits, NamedActorCounter};
pub use titles::TitleCounter;
pub use years::{YearHistogram, YearSummary};

use crate::model::Record;
use crate::report::Report;

pub trait Accumulator {
    fn consume(&mut self, record: &Record);

    /// Summary of everything consumed so far. Calling this before the input is
    /// exhausted is allowed and reports the partial state.
    fn finalize(&self) -> Report;
}

/// Combining partial results built from disjoint slices of the input.
///
/// `merge` must be associative, and `a.merge(b)` must equal the state obtained by
/// consuming `a`'s records followed by `b`'s.
pub trait Merge: Sized {
    /// An empty accumulator with the same configuration
    fn fork(&self) -> Self;

    fn merge(&mut self, other: Self);
}

impl<A: Accumulator + ?Sized> Accumulator for Box<A> {
    fn consume(&mut self, record: &Record) {
        (**self).consume(record)
    }

    fn finalize(&self) -> Report {
        (**self).finalize()
    }
}

/// Closed set of every accumulator variant, so a heterogeneous
/// [`Fanout`](crate::fanout::Fanout) can still be forked and merged.
#[derive(Debug, Clone)]
pub enum Tally {
    Titles(TitleCounter),
    Years(YearHistogram),
    Actors(ActorHistogram),
    ActorYears(ActorYearHistogram),
    NamedActor(NamedActorCounter),
}

impl Tally {
    pub fn kind(&self) -> &'static str {
        match self {
            Tally::Titles(_) => "titles",
            Tally::Years(_) => "years",
            Tally::Actors(_) => "actors",
            Tally::ActorYears(_) => "actor-years",
            Tally::NamedActor(_) => "named-actor",
        }
    }
}

impl Accumulator for Tally {
    fn consume(&mut self, record: &Record) {
        match self {
            Tally::Titles(a) => a.consume(record),
            Tally::Years(a) => a.consume(record),
            Tally::Actors(a) => a.consume(record),
            Tally::ActorYears(a) => a.consume(record),
            Tally::NamedActor(a) => a.consume(record),
        }
    }

    fn finalize(&self) -> Report {
        match self {
            Tally::Titles(a) => a.finalize(),
            Tally::Years(a) => a.finalize(),
            Tally::Actors(a) => a.finalize(),
            Tally::ActorYears(a) => a.finalize(),
            Tally::NamedActor(a) => a.finalize(),
        }
    }
}

impl Merge for Tally {
    fn fork(&self) -> Self {
        match self {
            Tally::Titles(a) => Tally::Titles(a.fork()),
            Tally::Years(a) => Tally::Years(a.fork()),
            Tally::Actors(a) => Tally::Actors(a.fork()),
            Tally::ActorYears(a) => Tally::ActorYears(a.fork()),
            Tally::NamedActor(a) => Tally::NamedActor(a.fork()),
        }
    }

    fn merge(&mut self, other: Self) {
        match (self, other) {
            (Tally::Titles(a), Tally::Titles(b)) => a.merge(b),
            (Tally::Years(a), Tally::Years(b)) => a.merge(b),
            (Tally::Actors(a), Tally::Actors(b)) => a.merge(b),
            (Tally::ActorYears(a), Tally::ActorYears(b)) => a.merge(b),
            (Tally::NamedActor(a), Tally::NamedActor(b)) => a.merge(b),
            (a, b) => {
                tracing::warn!(left = a.kind(), right = b.kind(), "refusing to merge different accumulators");
            }
        }
    }
}

impl From<TitleCounter> for Tally {
    fn from(a: TitleCounter) -> Self {
        Tally::Titles(a)
    }
}

impl From<YearHistogram> for Tally {
    fn from(a: YearHistogram) -> Self {
        Tally::Years(a)
    }
}

impl From<ActorHistogram> for Tally {
    fn from(a: ActorHistogram) -> Self {
        Tally::Actors(a)
    }
}

impl From<ActorYearHistogram> for Tally {
    fn from(a: ActorYearHistogram) -> Self {
        Tally::ActorYears(a)
    }
}

impl From<NamedActorCounter> for Tally {
    fn from(a: NamedActorCounter) -> Self {
        Tally::NamedActor(a)
    }
}
