//! Rank a small hand-written corpus with both estimators.
//!
//! Set `RUST_LOG=linkrank=debug` to see graph and iteration statistics.

use linkrank::{LinkGraph, PageRankConfig, SamplingConfig};

fn main() -> Result<(), linkrank::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Links as a crawler would report them; off-corpus and self links are dropped.
    let graph = LinkGraph::from_links([
        ("ai.html", vec!["algorithms.html", "inference.html"]),
        ("algorithms.html", vec!["programming.html", "recursion.html"]),
        ("c.html", vec!["programming.html"]),
        ("inference.html", vec!["ai.html", "https://example.org/"]),
        ("logic.html", vec!["inference.html"]),
        ("programming.html", vec!["c.html", "python.html"]),
        ("python.html", vec!["ai.html", "programming.html"]),
        ("recursion.html", vec!["recursion.html"]),
    ]);

    let sampling = SamplingConfig::default();
    let sampled = graph.sample_pagerank(sampling)?;
    println!("PageRank Results from Sampling (n = {})", sampling.samples);
    for (page, rank) in &sampled {
        println!("  {page}: {rank:.4}");
    }

    let iterated = graph.iterate_pagerank(PageRankConfig::default())?;
    println!("PageRank Results from Iteration ({} passes)", iterated.iterations);
    for (page, rank) in &iterated.ranks {
        println!("  {page}: {rank:.4}");
    }

    if let Some((page, rank)) = iterated.ranks.top_k(1).first() {
        println!("Top page: {page} ({rank:.4})");
    }
    Ok(())
}
