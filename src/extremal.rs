// src/extremal.rs

//! Maximum search over finished histograms.
//!
//! Ties are resolved by iteration order: [`argmax`] keeps the first key that
//! reaches the maximum. For `BTreeMap` histograms that is the smallest key; for
//! `HashMap` histograms it is unspecified. Callers that need every tied key use
//! [`all_maxima`].

use crate::model::ActorYearCounts;

/// Every key tied at the highest count, in iteration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maxima<K> {
    pub keys: Vec<K>,
    pub count: u64,
}

/// One key with the highest count, or `None` for an empty histogram.
pub fn argmax<K, I>(entries: I) -> Option<(K, u64)>
where
    I: IntoIterator<Item = (K, u64)>,
{
    entries.into_iter().fold(None, |best, (key, count)| match best {
        Some((best_key, best_count)) if count <= best_count => Some((best_key, best_count)),
        _ => Some((key, count)),
    })
}

/// All keys attaining the highest count, or `None` for an empty histogram.
pub fn all_maxima<K, I>(entries: I) -> Option<Maxima<K>>
where
    I: IntoIterator<Item = (K, u64)>,
{
    let mut maxima: Option<Maxima<K>> = None;
    for (key, count) in entries {
        match maxima.as_mut() {
            Some(current) if count < current.count => {}
            Some(current) if count == current.count => current.keys.push(key),
            _ => maxima = Some(Maxima { keys: vec![key], count }),
        }
    }
    maxima
}

/// Flattens a composite histogram to `((actor, year), count)` triples.
pub fn flatten(composite: &ActorYearCounts) -> impl Iterator<Item = ((&str, i32), u64)> + '_ {
    composite.iter().flat_map(|(actor, years)| {
        years.iter().map(move |(&year, &count)| ((actor.as_str(), year), count))
    })
}
