//! PageRank by random-surfer sampling.
//!
//! A single walk of `samples` steps: the first page is drawn uniformly, every
//! later page is drawn from the [transition model](crate::transition) of the
//! page before it. A page's rank is the fraction of steps spent on it.

use crate::distribution::verify_sum;
use crate::error::{check_damping, check_non_empty, Error, Result};
use crate::graph::{adjacency, Graph};
use crate::transition::fill_transition;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    pub damping: f64,
    pub samples: usize,
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { damping: 0.85, samples: 10_000, seed: 42 }
    }
}

/// Sampled PageRank with a `ChaCha8Rng` seeded from `config.seed`.
pub fn sample_pagerank<G: Graph + ?Sized>(graph: &G, config: SamplingConfig) -> Result<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    sample_pagerank_with_rng(graph, config.damping, config.samples, &mut rng)
}

/// Sampled PageRank drawing every step from `rng`.
///
/// Memory use is independent of `samples`: one adjacency snapshot, one visit
/// counter per page and one transition buffer reused across steps.
pub fn sample_pagerank_with_rng<G: Graph + ?Sized, R: Rng>(
    graph: &G,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let n = graph.node_count();
    check_non_empty(n)?;
    if samples == 0 {
        return Err(Error::ZeroSamples);
    }
    check_damping(damping)?;

    let adj = adjacency(graph);
    let mut visits = vec![0usize; n];
    let mut probs = vec![0.0; n];

    let mut curr = rng.random_range(0..n);
    visits[curr] += 1;
    for _ in 1..samples {
        fill_transition(&adj[curr], damping, &mut probs);
        verify_sum("transition", probs.iter().sum());
        curr = sample_cdf(rng, &probs);
        visits[curr] += 1;
    }

    let total = samples as f64;
    let ranks: Vec<f64> = visits.iter().map(|&c| c as f64 / total).collect();
    verify_sum("sampled rank", ranks.iter().sum());
    tracing::debug!(pages = n, samples, "sampled pagerank");
    Ok(ranks)
}

/// Draw an index with probability proportional to `weights`.
fn sample_cdf<R: Rng>(rng: &mut R, weights: &[f64]) -> usize {
    if weights.len() == 1 {
        return 0;
    }
    let sum: f64 = weights.iter().sum();
    let mut r = rng.random::<f64>() * sum;
    for (i, &w) in weights.iter().enumerate() {
        if r < w {
            return i;
        }
        r -= w;
    }
    // Rounding can leave `r` a hair above the last weight.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(weights.len() - 1)
}
