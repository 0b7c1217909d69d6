//! # linkrank
//!
//! PageRank for small hyperlink graphs, estimated two ways:
//!
//! - [`sample_pagerank`]: a random surfer walks the graph; rank is visit frequency.
//! - [`iterate_pagerank`]: the PageRank recurrence is applied until it stops moving.
//!
//! Both build on the same [`transition_model`]: from a page with `L` links the
//! surfer follows each link with probability `d / L` and otherwise jumps to any
//! page uniformly; from a page with no links it always jumps uniformly.
//!
//! [`LinkGraph`] holds an already-parsed corpus keyed by page name and returns
//! page-keyed [`Distribution`]s. The index-level functions accept anything that
//! implements [`Graph`].
//!
//! ```
//! use linkrank::{LinkGraph, PageRankConfig, SamplingConfig};
//!
//! let graph = LinkGraph::from_links([
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html", "3.html"]),
//!     ("3.html", vec!["2.html", "4.html"]),
//!     ("4.html", vec![]),
//! ]);
//!
//! let sampled = graph.sample_pagerank(SamplingConfig::default()).unwrap();
//! let iterated = graph.iterate_pagerank(PageRankConfig::default()).unwrap();
//! assert_eq!(sampled.len(), 4);
//! assert!((iterated.ranks.total() - 1.0).abs() < 1e-9);
//! ```

pub mod distribution;
pub mod error;
pub mod graph;
pub mod link_graph;
pub mod pagerank;
pub mod random_walk;
pub mod topk;
pub mod transition;

pub use distribution::{rounds_to_one, Distribution, SUM_DECIMALS};
pub use error::{Error, Result};
pub use graph::Graph;
pub use link_graph::{IterativeRanks, LinkGraph};
pub use pagerank::{iterate_pagerank, PageRankConfig, PageRankResult};
pub use random_walk::{sample_pagerank, sample_pagerank_with_rng, SamplingConfig};
pub use topk::{normalize, top_k};
pub use transition::transition_model;
