// src/fanout.rs

use crate::accumulators::{
    Accumulator, ActorHistogram, ActorYearHistogram, Merge, NamedActorCounter, Tally, TitleCounter, YearHistogram,
};
use crate::model::Record;
use crate::report::Report;

/// Broadcasts every record to its members in registration order.
/// Holds no statistics of its own.
#[derive(Debug, Clone)]
pub struct Fanout<A> {
    members: Vec<A>,
}

impl<A> Default for Fanout<A> {
    fn default() -> Self {
        Fanout { members: Vec::new() }
    }
}

impl<A: Accumulator> Fanout<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, accumulator: impl Into<A>) -> &mut Self {
        self.members.push(accumulator.into());
        self
    }

    pub fn members(&self) -> &[A] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// One report per member, in registration order
    pub fn finalize_all(&self) -> Vec<Report> {
        self.members.iter().map(Accumulator::finalize).collect()
    }
}

impl Fanout<Tally> {
    /// Every statistic, with `actor` as the actor of interest
    pub fn standard(actor: &str) -> Self {
        let mut fanout = Fanout::new();
        fanout
            .register(TitleCounter::new())
            .register(NamedActorCounter::new(actor))
            .register(YearHistogram::new())
            .register(ActorHistogram::new())
            .register(ActorYearHistogram::new(actor));
        fanout
    }
}

impl<A: Accumulator> Accumulator for Fanout<A> {
    fn consume(&mut self, record: &Record) {
        for member in &mut self.members {
            member.consume(record);
        }
    }

    fn finalize(&self) -> Report {
        let mut combined = Report::new("All statistics");
        for report in self.finalize_all() {
            combined.lines.extend(report.lines);
        }
        combined
    }
}

impl<A: Merge> Merge for Fanout<A> {
    fn fork(&self) -> Self {
        Fanout { members: self.members.iter().map(Merge::fork).collect() }
    }

    /// Member-wise by position; both sides must come from the same prototype.
    fn merge(&mut self, other: Self) {
        if self.members.len() != other.members.len() {
            tracing::warn!(
                left = self.members.len(),
                right = other.members.len(),
                "merging fanouts of different shapes, extra members are dropped"
            );
        }
        for (mine, theirs) in self.members.iter_mut().zip(other.members) {
            mine.merge(theirs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records the order in which members observe records
    struct Probe {
        id: usize,
        log: Rc<RefCell<Vec<(usize, String)>>>,
    }

    impl Accumulator for Probe {
        fn consume(&mut self, record: &Record) {
            self.log.borrow_mut().push((self.id, record.title.clone()));
        }

        fn finalize(&self) -> Report {
            Report::new(format!("probe {}", self.id))
        }
    }

    #[test]
    fn broadcasts_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut fanout: Fanout<Box<dyn Accumulator>> = Fanout::new();
        fanout.register(Box::new(Probe { id: 0, log: Rc::clone(&log) }) as Box<dyn Accumulator>);
        fanout.register(Box::new(Probe { id: 1, log: Rc::clone(&log) }) as Box<dyn Accumulator>);

        fanout.consume(&parse("A (1990)/x"));
        fanout.consume(&parse("B (1991)/x"));

        let seen = log.borrow().clone();
        assert_eq!(seen, vec![(0, "A".to_string()), (1, "A".to_string()), (0, "B".to_string()), (1, "B".to_string())]);

        let headings: Vec<String> = fanout.finalize_all().into_iter().map(|r| r.heading).collect();
        assert_eq!(headings, vec!["probe 0", "probe 1"]);
    }

    #[test]
    fn empty_fanout_finalizes_to_nothing() {
        let fanout: Fanout<Tally> = Fanout::new();
        assert!(fanout.is_empty());
        assert!(fanout.finalize_all().is_empty());
        assert!(fanout.finalize().lines.is_empty());
    }

    #[test]
    fn combined_report_concatenates_member_lines() {
        let mut fanout: Fanout<Tally> = Fanout::new();
        fanout.register(TitleCounter::new()).register(NamedActorCounter::new("Eastwood, Clint"));
        fanout.consume(&parse("Unforgiven (1992)/Eastwood, Clint"));

        let combined = fanout.finalize();
        assert_eq!(
            combined.lines,
            vec!["There are 1 movies in the database, with 1 unique titles", "Clint Eastwood acted in 1 movies."]
        );
    }

    #[test]
    fn forked_fanouts_merge_member_by_member() {
        let mut left: Fanout<Tally> = Fanout::new();
        left.register(TitleCounter::new()).register(YearHistogram::new());
        let mut right = left.fork();
        assert_eq!(right.len(), 2);

        left.consume(&parse("A (1990)/x"));
        right.consume(&parse("B (1992)/x"));
        left.merge(right);

        let reports = left.finalize_all();
        assert!(reports[0].contains("There are 2 movies in the database, with 2 unique titles"));
        assert!(reports[1].contains("Years without movies: 1991"));
    }

    #[test]
    fn standard_fanout_registers_every_statistic() {
        let fanout = Fanout::standard("Eastwood, Clint");
        let kinds: Vec<&str> = fanout.members().iter().map(Tally::kind).collect();
        assert_eq!(kinds, vec!["titles", "named-actor", "years", "actors", "actor-years"]);
    }
}
