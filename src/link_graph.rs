//! Keyed hyperlink graph.

use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::pagerank::{iterate_pagerank, PageRankConfig, PageRankResult};
use crate::random_walk::{sample_pagerank_with_rng, SamplingConfig};
use crate::transition::transition_model;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// An immutable page graph restricted to its own corpus.
///
/// Invariants, established by [`LinkGraph::from_links`]:
/// - every link target is itself a page of the graph
/// - no page links to itself
///
/// Pages are stored sorted, so page `i` in [`Graph`] terms is `pages()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph<P> {
    pages: Vec<P>,
    links: Vec<Vec<usize>>,
}

/// Iterative ranks keyed by page, plus how the iteration ended.
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeRanks<P: Ord> {
    pub ranks: Distribution<P>,
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
}

impl<P: Ord + Clone + Debug> LinkGraph<P> {
    /// Build from `(page, outgoing links)` pairs.
    ///
    /// Repeated pages merge their links. Self links and links to pages outside
    /// the corpus are dropped; a page left with no links is dangling.
    pub fn from_links<I, L>(corpus: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = P>,
    {
        let mut raw: BTreeMap<P, BTreeSet<P>> = BTreeMap::new();
        for (page, links) in corpus {
            raw.entry(page).or_default().extend(links);
        }

        let pages: Vec<P> = raw.keys().cloned().collect();
        let mut dropped = 0usize;
        let links: Vec<Vec<usize>> = raw
            .iter()
            .map(|(page, targets)| {
                let mut out = Vec::with_capacity(targets.len());
                for target in targets {
                    match pages.binary_search(target) {
                        Ok(j) if target != page => out.push(j),
                        _ => dropped += 1,
                    }
                }
                out
            })
            .collect();

        let graph = Self { pages, links };
        tracing::debug!(
            pages = graph.len(),
            links = graph.link_count(),
            dropped,
            dangling = graph.dangling_count(),
            "built link graph"
        );
        graph
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages, sorted.
    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn contains(&self, page: &P) -> bool {
        self.index_of(page).is_some()
    }

    pub fn index_of(&self, page: &P) -> Option<usize> {
        self.pages.binary_search(page).ok()
    }

    pub fn page(&self, index: usize) -> Option<&P> {
        self.pages.get(index)
    }

    /// Outgoing links of `page`, or `None` if it is not in the graph.
    pub fn links(&self, page: &P) -> Option<impl Iterator<Item = &P> + '_> {
        let i = self.index_of(page)?;
        Some(self.links[i].iter().map(|&j| &self.pages[j]))
    }

    /// Pages linking to `page`.
    pub fn inbound(&self, page: &P) -> Option<Vec<&P>> {
        let target = self.index_of(page)?;
        Some(
            self.links
                .iter()
                .enumerate()
                .filter(|(_, out)| out.binary_search(&target).is_ok())
                .map(|(q, _)| &self.pages[q])
                .collect(),
        )
    }

    pub fn link_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }

    /// Pages without usable outgoing links.
    pub fn dangling_count(&self) -> usize {
        self.links.iter().filter(|out| out.is_empty()).count()
    }

    /// One-step random-surfer distribution from `page`.
    pub fn transition_model(&self, page: &P, damping: f64) -> Result<Distribution<P>> {
        let current = self.index_of(page).ok_or_else(|| Error::UnknownPage(format!("{page:?}")))?;
        let probs = transition_model(self, current, damping)?;
        Ok(Distribution::from_scores(&self.pages, &probs))
    }

    /// Sampled PageRank using a `ChaCha8Rng` seeded from `config.seed`.
    pub fn sample_pagerank(&self, config: SamplingConfig) -> Result<Distribution<P>> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        self.sample_pagerank_with_rng(config.damping, config.samples, &mut rng)
    }

    /// Sampled PageRank drawing from the caller's random source.
    pub fn sample_pagerank_with_rng<R: Rng>(
        &self,
        damping: f64,
        samples: usize,
        rng: &mut R,
    ) -> Result<Distribution<P>> {
        let ranks = sample_pagerank_with_rng(self, damping, samples, rng)?;
        Ok(Distribution::from_scores(&self.pages, &ranks))
    }

    /// Iterative PageRank keyed by page.
    pub fn iterate_pagerank(&self, config: PageRankConfig) -> Result<IterativeRanks<P>> {
        let PageRankResult { scores, iterations, delta, converged } = iterate_pagerank(self, config)?;
        Ok(IterativeRanks {
            ranks: Distribution::from_scores(&self.pages, &scores),
            iterations,
            delta,
            converged,
        })
    }
}

impl<P> Graph for LinkGraph<P> {
    fn node_count(&self) -> usize {
        self.pages.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.links.get(node).cloned().unwrap_or_default()
    }
    fn out_degree(&self, node: usize) -> usize {
        self.links.get(node).map_or(0, Vec::len)
    }
}
