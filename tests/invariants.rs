// tests/invariants.rs
//! Property tests over generated movie lists.

use proptest::prelude::*;
use reel_stats::accumulators::{Accumulator, ActorHistogram, Merge, TitleCounter, YearHistogram};
use reel_stats::extremal;
use reel_stats::parser::parse;
use reel_stats::pipeline;

const ACTORS: [&str; 5] = ["Eastwood, Clint", "Freeman, Morgan", "Doe, Jane", "Cher", "Hawn, Phil"];

fn movie_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["Heat", "Ronin", "Alien", "Ran", "Up"]),
        prop_oneof![4 => (1900i32..1920).prop_map(|y| format!(" ({y})")), 1 => Just(String::new())],
        prop::collection::vec(prop::sample::select(ACTORS.to_vec()), 0..4),
    )
        .prop_map(|(title, year, actors)| {
            let mut line = format!("{title}{year}");
            for actor in actors {
                line.push('/');
                line.push_str(actor);
            }
            line
        })
}

fn movie_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(movie_line(), 0..40)
}

fn consume_all<A: Accumulator>(lines: &[String], mut acc: A) -> A {
    pipeline::run_sequential(lines, &mut acc, false);
    acc
}

proptest! {
    #[test]
    fn year_counts_plus_unknown_equal_records(lines in movie_list()) {
        let years = consume_all(&lines, YearHistogram::new());
        let known: u64 = years.counts().values().sum();
        prop_assert_eq!(known + years.unknown(), lines.len() as u64);
    }

    #[test]
    fn distinct_titles_never_exceed_total(lines in movie_list()) {
        let titles = consume_all(&lines, TitleCounter::new());
        prop_assert!(titles.distinct() as u64 <= titles.total());
        prop_assert_eq!(titles.total(), lines.len() as u64);
    }

    #[test]
    fn years_without_movies_are_the_gaps(lines in movie_list()) {
        let years = consume_all(&lines, YearHistogram::new());
        let gaps = years.years_without_movies();
        prop_assert!(gaps.windows(2).all(|w| w[0] < w[1]));
        if let (Some(&first), Some(&last)) = (years.counts().keys().next(), years.counts().keys().next_back()) {
            let expected: Vec<i32> = (first..=last).filter(|y| !years.counts().contains_key(y)).collect();
            prop_assert_eq!(gaps, expected);
        } else {
            prop_assert!(gaps.is_empty());
        }
    }

    #[test]
    fn every_appearance_is_one_credit(lines in movie_list()) {
        let actors = consume_all(&lines, ActorHistogram::new());
        for actor in ACTORS {
            let appearances = lines.iter().map(|l| parse(l).actors.iter().filter(|a| *a == actor).count()).sum::<usize>();
            prop_assert_eq!(actors.credits().movies_for(actor).len(), appearances);
        }
    }

    #[test]
    fn chunked_merge_equals_sequential(lines in movie_list(), chunk_size in 1usize..8) {
        let sequential_years = consume_all(&lines, YearHistogram::new());
        let parallel_years = pipeline::run_parallel(&lines, &YearHistogram::new(), chunk_size, false).unwrap();
        prop_assert_eq!(parallel_years.counts(), sequential_years.counts());
        prop_assert_eq!(parallel_years.unknown(), sequential_years.unknown());

        let sequential_actors = consume_all(&lines, ActorHistogram::new());
        let parallel_actors = pipeline::run_parallel(&lines, &ActorHistogram::new(), chunk_size, false).unwrap();
        prop_assert_eq!(parallel_actors.credits().per_year(), sequential_actors.credits().per_year());
        for actor in ACTORS {
            prop_assert_eq!(parallel_actors.credits().movies_for(actor), sequential_actors.credits().movies_for(actor));
        }
    }

    #[test]
    fn merge_is_associative_for_year_counts(a in movie_list(), b in movie_list(), c in movie_list()) {
        let part = |lines: &[String]| consume_all(lines, YearHistogram::new());

        let mut left = part(&a);
        left.merge(part(&b));
        left.merge(part(&c));

        let mut tail = part(&b);
        tail.merge(part(&c));
        let mut right = part(&a);
        right.merge(tail);

        prop_assert_eq!(left.counts(), right.counts());
        prop_assert_eq!(left.unknown(), right.unknown());
    }

    #[test]
    fn all_maxima_contains_the_argmax(lines in movie_list()) {
        let years = consume_all(&lines, YearHistogram::new());
        let entries = || years.counts().iter().map(|(&y, &c)| (y, c));
        match (extremal::argmax(entries()), extremal::all_maxima(entries())) {
            (Some((year, count)), Some(maxima)) => {
                prop_assert_eq!(count, maxima.count);
                prop_assert!(maxima.keys.contains(&year));
                prop_assert!(years.counts().values().all(|&c| c <= count));
            }
            (None, None) => prop_assert!(years.counts().is_empty()),
            _ => prop_assert!(false, "argmax and all_maxima disagree on emptiness"),
        }
    }
}
