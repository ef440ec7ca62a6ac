//! Grouping and frequency helpers shared by every result type.

use std::collections::BTreeMap;

use mushaf_corpus::RevelationPeriod;

/// Groups items by key, preserving item order within each group.
pub fn group_by<'a, T, K: Ord>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
) -> BTreeMap<K, Vec<&'a T>>
where
    T: 'a,
{
    let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// Counts occurrences of each key, in order of first appearance.
pub fn frequencies<K: Ord + Clone>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    let mut first_seen: Vec<K> = Vec::new();
    for key in keys {
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(key);
        }
        *count += 1;
    }
    first_seen
        .into_iter()
        .map(|key| {
            let count = counts.get(&key).copied().unwrap_or(0);
            (key, count)
        })
        .collect()
}

/// Returns the most frequent key and its count.
///
/// Ties go to the key that appeared first.
pub fn most_frequent<K: Ord + Clone>(keys: impl IntoIterator<Item = K>) -> Option<(K, usize)> {
    frequencies(keys)
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
}

/// Returns `part` as a percentage of `whole`, or 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

/// How a collection splits across the two revelation periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodBreakdown {
    /// Count per period. Both periods are always present.
    counts: BTreeMap<RevelationPeriod, usize>,
}

impl PeriodBreakdown {
    /// Tallies the periods of a collection.
    pub fn tally(periods: impl IntoIterator<Item = RevelationPeriod>) -> Self {
        let mut counts: BTreeMap<RevelationPeriod, usize> =
            RevelationPeriod::ALL.iter().map(|p| (*p, 0)).collect();
        for period in periods {
            *counts.entry(period).or_default() += 1;
        }
        Self { counts }
    }

    /// Returns the count for one period.
    pub fn count(&self, period: RevelationPeriod) -> usize {
        self.counts.get(&period).copied().unwrap_or(0)
    }

    /// Returns the total across both periods.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns one period's share of the total, as a percentage.
    pub fn percentage(&self, period: RevelationPeriod) -> f64 {
        percentage(self.count(period), self.total())
    }
}
