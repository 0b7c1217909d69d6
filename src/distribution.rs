//! Page-keyed probability distributions.
//!
//! One type serves both the one-step transition distribution and the final
//! rank distribution: an ordered `page -> probability` map with one entry per
//! page of the graph it came from.

use crate::topk::top_k;
use std::borrow::Borrow;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Decimal places a distribution's sum must agree with 1.0 on.
pub const SUM_DECIMALS: i32 = 5;

/// Whether `sum` equals 1.0 once rounded to [`SUM_DECIMALS`] places.
pub fn rounds_to_one(sum: f64) -> bool {
    let scale = 10f64.powi(SUM_DECIMALS);
    (sum * scale).round() / scale == 1.0
}

/// Self-check on a freshly computed distribution.
///
/// Drift is reported, never fatal in release builds: the caller still gets
/// its result. Debug builds treat drift as a bug.
pub(crate) fn verify_sum(kind: &'static str, sum: f64) -> bool {
    let ok = rounds_to_one(sum);
    if !ok {
        tracing::warn!(kind, sum, "probabilities do not add up to 1");
    }
    debug_assert!(ok, "{kind} distribution sums to {sum}");
    ok
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Distribution<P: Ord> {
    entries: BTreeMap<P, f64>,
}

impl<P: Ord + Clone> Distribution<P> {
    /// Pair `pages[i]` with `scores[i]`.
    pub(crate) fn from_scores(pages: &[P], scores: &[f64]) -> Self {
        debug_assert_eq!(pages.len(), scores.len());
        Self { entries: pages.iter().cloned().zip(scores.iter().copied()).collect() }
    }
}

impl<P: Ord> Distribution<P> {
    pub fn get<Q>(&self, page: &Q) -> Option<f64>
    where
        P: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in page order.
    pub fn iter(&self) -> btree_map::Iter<'_, P, f64> {
        self.entries.iter()
    }

    pub fn pages(&self) -> impl Iterator<Item = &P> {
        self.entries.keys()
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    /// The `k` most probable pages, best first; zero-probability pages are left out.
    pub fn top_k(&self, k: usize) -> Vec<(&P, f64)> {
        let keys: Vec<&P> = self.entries.keys().collect();
        let scores: Vec<f64> = self.entries.values().copied().collect();
        top_k(&scores, k).into_iter().map(|(i, s)| (keys[i], s)).collect()
    }

    pub fn into_inner(self) -> BTreeMap<P, f64> {
        self.entries
    }
}

impl<P: Ord> FromIterator<(P, f64)> for Distribution<P> {
    fn from_iter<I: IntoIterator<Item = (P, f64)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<P: Ord> IntoIterator for Distribution<P> {
    type Item = (P, f64);
    type IntoIter = btree_map::IntoIter<P, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, P: Ord> IntoIterator for &'a Distribution<P> {
    type Item = (&'a P, &'a f64);
    type IntoIter = btree_map::Iter<'a, P, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
