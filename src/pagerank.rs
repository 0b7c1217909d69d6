//! PageRank by fixed-point iteration.
//!
//! Repeats the synchronous update
//!
//! \[
//!   r'(p) = \frac{1 - d}{N} + d \sum_{q \to p} \frac{r(q)}{L(q)}
//! \]
//!
//! from the uniform start until no page moves by `tolerance` or more, then
//! rescales the ranks to sum to 1. Dangling pages pass nothing along; the
//! final rescale absorbs the mass they drop.

use crate::distribution::verify_sum;
use crate::error::{check_damping, check_non_empty, check_tolerance, Result};
use crate::graph::{adjacency, Graph};
use crate::topk::normalize;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    /// Stop once the largest per-page change in a pass is below this.
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { damping: 0.85, max_iterations: 10_000, tolerance: 1e-3 }
    }
}

/// Result of an iterative PageRank run.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Normalized ranks, indexed by node.
    pub scores: Vec<f64>,
    /// Passes performed.
    pub iterations: usize,
    /// Largest per-page change in the last pass.
    pub delta: f64,
    /// Whether `delta` dropped below the tolerance before the iteration cap.
    pub converged: bool,
}

impl PageRankResult {
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}

pub fn iterate_pagerank<G: Graph + ?Sized>(graph: &G, config: PageRankConfig) -> Result<PageRankResult> {
    let n = graph.node_count();
    check_non_empty(n)?;
    check_damping(config.damping)?;
    check_tolerance(config.tolerance)?;

    let adj = adjacency(graph);
    let n_f64 = n as f64;
    let teleport = (1.0 - config.damping) / n_f64;
    let mut scores = vec![1.0 / n_f64; n];
    let mut new_scores = vec![0.0; n];
    let mut iterations = 0;
    let mut delta = f64::INFINITY;

    while delta >= config.tolerance && iterations < config.max_iterations {
        iterations += 1;
        new_scores.fill(teleport);
        for (u, out) in adj.iter().enumerate() {
            if out.is_empty() { continue; }
            let share = config.damping * scores[u] / out.len() as f64;
            for &v in out {
                new_scores[v] += share;
            }
        }

        delta = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        std::mem::swap(&mut scores, &mut new_scores);
    }

    let converged = delta < config.tolerance;
    if !converged {
        tracing::warn!(iterations, delta, tolerance = config.tolerance, "pagerank did not converge");
    }

    let raw_sum = normalize(&mut scores);
    verify_sum("iterated rank", scores.iter().sum());
    tracing::debug!(pages = n, iterations, delta, raw_sum, "iterated pagerank");
    Ok(PageRankResult { scores, iterations, delta, converged })
}
