//! Minimal graph adapter trait.
//!
//! The estimators work over dense `0..node_count()` indices. [`crate::LinkGraph`]
//! implements this trait for keyed page graphs; anything else that can list
//! out-neighbors by index (an adjacency list, a `petgraph::Graph`) can be ranked
//! directly.

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// Usable out-links of `node`: sorted, deduplicated, in range, no self loop.
pub(crate) fn out_links<G: Graph + ?Sized>(graph: &G, node: usize) -> Vec<usize> {
    let n = graph.node_count();
    let mut nbrs: Vec<usize> =
        graph.neighbors(node).into_iter().filter(|&v| v != node && v < n).collect();
    nbrs.sort_unstable();
    nbrs.dedup();
    nbrs
}

/// Snapshot every node's [`out_links`].
///
/// Both estimators take one snapshot up front so the hot loops never call back
/// into the adapter.
pub(crate) fn adjacency<G: Graph + ?Sized>(graph: &G) -> Vec<Vec<usize>> {
    (0..graph.node_count()).map(|u| out_links(graph, u)).collect()
}

impl Graph for Vec<Vec<usize>> {
    fn node_count(&self) -> usize {
        self.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.get(node).cloned().unwrap_or_default()
    }
    fn out_degree(&self, node: usize) -> usize {
        self.get(node).map_or(0, Vec::len)
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}
