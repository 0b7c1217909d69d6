//! Random-surfer transition model.
//!
//! From page `u` with `L > 0` usable out-links, the surfer follows one of them
//! with probability `d` and jumps anywhere with probability `1 - d`:
//!
//! \[
//!   T(u \to v) = \frac{1 - d}{N} + [v \in \mathrm{out}(u)] \frac{d}{L}
//! \]
//!
//! A dangling page (`L = 0`) jumps uniformly: `T(u -> v) = 1/N` for every `v`.

use crate::distribution::verify_sum;
use crate::error::{check_damping, check_non_empty, Error, Result};
use crate::graph::{out_links, Graph};

/// One-step transition distribution from `page`, indexed by node.
pub fn transition_model<G: Graph + ?Sized>(graph: &G, page: usize, damping: f64) -> Result<Vec<f64>> {
    let n = graph.node_count();
    check_non_empty(n)?;
    check_damping(damping)?;
    if page >= n {
        return Err(Error::PageOutOfRange { index: page, count: n });
    }
    let links = out_links(graph, page);
    let mut probs = vec![0.0; n];
    fill_transition(&links, damping, &mut probs);
    verify_sum("transition", probs.iter().sum());
    Ok(probs)
}

/// Write the transition distribution for a page with out-links `links` into `out`.
///
/// `out.len()` is the page count. `links` must be in range and free of
/// duplicates and of the page itself.
pub(crate) fn fill_transition(links: &[usize], damping: f64, out: &mut [f64]) {
    let n = out.len() as f64;
    if links.is_empty() {
        out.fill(1.0 / n);
        return;
    }
    out.fill((1.0 - damping) / n);
    let follow = damping / links.len() as f64;
    for &v in links {
        out[v] += follow;
    }
}
