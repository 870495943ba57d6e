//! Acquisition clustering.
//!
//! Counts how often ownership passed from one core to another between
//! consecutive acquisitions. Mass on `(x, x)` means the lock tends to stay
//! with whoever just released it.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::acqlog::CoreId;

/// Ordered (previous owner, next owner) transition counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterTable {
    counts: BTreeMap<(CoreId, CoreId), usize>,
    transitions: usize, // len - 1
}

impl ClusterTable {
    /// Builds the table from a completed log. Logs with fewer than two
    /// entries have no transitions.
    pub fn analyze(log: &[CoreId]) -> Self {
        let mut counts = BTreeMap::new();
        for pair in log.windows(2) {
            *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
        }
        ClusterTable {
            counts,
            transitions: log.len().saturating_sub(1),
        }
    }

    pub fn count(&self, prev: CoreId, next: CoreId) -> usize {
        self.counts.get(&(prev, next)).copied().unwrap_or(0)
    }

    /// Number of adjacent transitions, the percentage denominator.
    pub fn total(&self) -> usize {
        self.transitions
    }

    pub fn distinct_pairs(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Share of `count` in hundredths of a percent, rounded half up.
    pub fn percent_hundredths(&self, count: usize) -> u64 {
        if self.transitions == 0 {
            return 0;
        }
        (10_000.0 * count as f64 / self.transitions as f64 + 0.5) as u64
    }

    /// Fraction of transitions where the releasing core reacquired the lock.
    pub fn self_handoff_ratio(&self) -> f64 {
        if self.transitions == 0 {
            return 0.0;
        }
        let same: usize = self
            .counts
            .iter()
            .filter(|((a, b), _)| a == b)
            .map(|(_, c)| c)
            .sum();
        same as f64 / self.transitions as f64
    }

    /// Pairs in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, (CoreId, CoreId), usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = ((CoreId, CoreId), usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&pair, &count)| (pair, count))
    }
}

impl<'a> IntoIterator for &'a ClusterTable {
    type Item = ((CoreId, CoreId), usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
