use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use linkrank::{
    iterate_pagerank, sample_pagerank, sample_pagerank_with_rng, transition_model, Error, Graph,
    LinkGraph, PageRankConfig, SamplingConfig,
};

#[derive(Debug, Clone)]
struct AdjListGraph {
    adj: Vec<Vec<usize>>,
}

impl AdjListGraph {
    fn new(mut adj: Vec<Vec<usize>>) -> Self {
        let n = adj.len();
        for (u, nbrs) in adj.iter_mut().enumerate() {
            nbrs.retain(|&v| v != u && v < n);
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }
}

impl Graph for AdjListGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj.get(node).cloned().unwrap_or_default()
    }
}

/// The small four-page corpus used throughout: no dangling pages.
fn corpus() -> LinkGraph<String> {
    let page = |s: &str| s.to_string();
    LinkGraph::from_links([
        (page("1.html"), vec![page("2.html")]),
        (page("2.html"), vec![page("1.html"), page("3.html")]),
        (page("3.html"), vec![page("2.html"), page("4.html")]),
        (page("4.html"), vec![page("2.html")]),
    ])
}

fn assert_is_distribution(ranks: &[f64], n: usize, tol: f64) {
    assert_eq!(ranks.len(), n);
    assert!(ranks.iter().all(|&r| r >= 0.0 && r <= 1.0), "out of range: {ranks:?}");
    let s: f64 = ranks.iter().sum();
    assert!((s - 1.0).abs() < tol, "sum={s}");
}

/// Arbitrary graphs, dangling pages and self links included.
fn arb_graph(max_n: usize) -> impl Strategy<Value = AdjListGraph> {
    (1..=max_n)
        .prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0..n, 0..=n), n))
        .prop_map(AdjListGraph::new)
}

/// Graphs where every page keeps at least one out-link.
fn arb_linked_graph(max_n: usize) -> impl Strategy<Value = AdjListGraph> {
    (2..=max_n)
        .prop_flat_map(|n| prop::collection::vec(prop::collection::vec(1..n, 1..n), n))
        .prop_map(|offsets| {
            let n = offsets.len();
            let adj = offsets
                .into_iter()
                .enumerate()
                .map(|(u, offs)| offs.into_iter().map(|o| (u + o) % n).collect())
                .collect();
            AdjListGraph::new(adj)
        })
}

proptest! {
    #[test]
    fn transition_sums_to_one(g in arb_graph(8), damping in 0.05f64..0.95) {
        for page in 0..g.node_count() {
            let t = transition_model(&g, page, damping).unwrap();
            let s: f64 = t.iter().sum();
            prop_assert!((s - 1.0).abs() < 1e-5, "page {} sums to {}", page, s);
        }
    }

    #[test]
    fn transition_matches_closed_form(g in arb_graph(8), damping in 0.05f64..0.95) {
        let n = g.node_count();
        for page in 0..n {
            let t = transition_model(&g, page, damping).unwrap();
            let links = &g.adj[page];
            for (v, &p) in t.iter().enumerate() {
                let want = if links.is_empty() {
                    1.0 / n as f64
                } else if links.contains(&v) {
                    (1.0 - damping) / n as f64 + damping / links.len() as f64
                } else {
                    (1.0 - damping) / n as f64
                };
                prop_assert!((p - want).abs() < 1e-12, "T({} -> {}) = {}, want {}", page, v, p, want);
            }
        }
    }

    #[test]
    fn sampled_ranks_form_a_distribution(g in arb_graph(8), samples in 1usize..400, seed in any::<u64>()) {
        let cfg = SamplingConfig { damping: 0.85, samples, seed };
        let ranks = sample_pagerank(&g, cfg).unwrap();
        assert_is_distribution(&ranks, g.node_count(), 1e-9);
        for &r in &ranks {
            let visits = r * samples as f64;
            prop_assert!((visits - visits.round()).abs() < 1e-6, "rank {} is not a visit fraction", r);
        }
    }

    #[test]
    fn iterated_ranks_form_a_distribution(g in arb_graph(8), damping in 0.05f64..0.95) {
        let cfg = PageRankConfig { damping, ..Default::default() };
        let result = iterate_pagerank(&g, cfg).unwrap();
        prop_assert!(result.converged);
        assert_is_distribution(&result.scores, g.node_count(), 1e-9);
    }

    // Only graphs without dangling pages: the final rescale redistributes the
    // mass dangling pages drop, so the normalized ranks are no longer a fixed
    // point of the raw recurrence there.
    #[test]
    fn iterated_ranks_are_a_fixed_point(g in arb_linked_graph(8)) {
        let cfg = PageRankConfig::default();
        let result = iterate_pagerank(&g, cfg).unwrap();
        prop_assert!(result.converged);

        let n = g.node_count();
        let r = &result.scores;
        // The update is a d-contraction in L1, and the last pass moved each page by
        // less than `tolerance`, so one more pass moves the whole vector by less
        // than d * n * tolerance.
        let bound = cfg.damping * n as f64 * cfg.tolerance;
        for p in 0..n {
            let inbound: f64 = (0..n)
                .filter(|&q| g.adj[q].contains(&p))
                .map(|q| r[q] / g.adj[q].len() as f64)
                .sum();
            let next = (1.0 - cfg.damping) / n as f64 + cfg.damping * inbound;
            prop_assert!(
                (next - r[p]).abs() <= bound,
                "page {}: r={} next={}", p, r[p], next
            );
        }
    }
}

#[test]
fn two_page_cycle_ranks_evenly() {
    let g = LinkGraph::from_links([("A", vec!["B"]), ("B", vec!["A"])]);
    let out = g.iterate_pagerank(PageRankConfig::default()).unwrap();
    assert!(out.converged);
    assert!((out.ranks.get(&"A").unwrap() - 0.5).abs() < 1e-9);
    assert!((out.ranks.get(&"B").unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn iteration_stops_on_largest_per_page_change() {
    // 4.html is dangling. Stopping on the largest single-page change takes 17
    // passes here; summing the changes instead would keep iterating longer.
    let g = LinkGraph::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec![]),
    ]);
    let out = g.iterate_pagerank(PageRankConfig::default()).unwrap();
    assert!(out.converged);
    assert_eq!(out.iterations, 17);
    assert!(out.delta < 1e-3);

    let want = [
        ("1.html", 0.2297073798480885),
        ("2.html", 0.3685781503669883),
        ("3.html", 0.2297073798480885),
        ("4.html", 0.1720070899368346),
    ];
    for (page, rank) in want {
        let got = out.ranks.get(&page).unwrap();
        assert!((got - rank).abs() < 1e-12, "{page}: got {got}, want {rank}");
    }
}

#[test]
fn dangling_page_transitions_uniformly() {
    let g = LinkGraph::from_links([("A", vec![]), ("B", vec!["A"])]);
    let t = g.transition_model(&"A", 0.85).unwrap();
    assert_eq!(t.get(&"A"), Some(0.5));
    assert_eq!(t.get(&"B"), Some(0.5));
}

#[test]
fn single_page_gets_full_rank_from_both_estimators() {
    let g = LinkGraph::from_links([("A", Vec::<&str>::new())]);
    let sampled = g.sample_pagerank(SamplingConfig::default()).unwrap();
    assert_eq!(sampled.into_inner().into_iter().collect::<Vec<_>>(), vec![("A", 1.0)]);

    let iterated = g.iterate_pagerank(PageRankConfig::default()).unwrap();
    assert_eq!(iterated.ranks.into_inner().into_iter().collect::<Vec<_>>(), vec![("A", 1.0)]);
}

#[test]
fn one_sample_puts_all_mass_on_one_page() {
    let g = corpus();
    for seed in 0..20 {
        let cfg = SamplingConfig { samples: 1, seed, ..Default::default() };
        let ranks = g.sample_pagerank(cfg).unwrap();
        assert_eq!(ranks.len(), 4);
        assert_eq!(ranks.iter().filter(|(_, &r)| r == 1.0).count(), 1);
        assert_eq!(ranks.iter().filter(|(_, &r)| r == 0.0).count(), 3);
    }
}

#[test]
fn filtered_links_leave_page_dangling() {
    let g = LinkGraph::from_links([("A", vec!["offsite.html"]), ("B", vec!["A"]), ("C", vec!["A", "C"])]);
    let t = g.transition_model(&"A", 0.85).unwrap();
    for (_, &p) in &t {
        assert!((p - 1.0 / 3.0).abs() < 1e-12);
    }
    // C's self link is gone, leaving a single link to A.
    let t = g.transition_model(&"C", 0.85).unwrap();
    assert!((t.get(&"A").unwrap() - (0.05 + 0.85)).abs() < 1e-12);
    assert!((t.get(&"C").unwrap() - 0.05).abs() < 1e-12);
}

#[test]
fn estimators_agree_without_dangling_pages() {
    let g = corpus();
    let sampled = g.sample_pagerank(SamplingConfig { samples: 20_000, seed: 5, ..Default::default() }).unwrap();
    let iterated = g.iterate_pagerank(PageRankConfig::default()).unwrap();
    for (page, &r) in &iterated.ranks {
        let s = sampled.get(page).unwrap();
        assert!((s - r).abs() < 0.03, "{page}: sampled={s} iterated={r}");
    }
    assert_eq!(iterated.ranks.top_k(1)[0].0, "2.html");
}

#[test]
fn explicit_rng_is_reproducible() {
    let g = corpus();
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);
    let ra = g.sample_pagerank_with_rng(0.85, 2_000, &mut a).unwrap();
    let rb = g.sample_pagerank_with_rng(0.85, 2_000, &mut b).unwrap();
    assert_eq!(ra, rb);

    let cfg = SamplingConfig { damping: 0.85, samples: 2_000, seed: 99 };
    assert_eq!(g.sample_pagerank(cfg).unwrap(), ra);
}

#[test]
fn keyed_and_index_apis_agree() {
    let g = corpus();
    let cfg = SamplingConfig { samples: 1_000, ..Default::default() };
    let keyed = g.sample_pagerank(cfg).unwrap();
    let indexed = sample_pagerank(&g, cfg).unwrap();
    let keyed_scores: Vec<f64> = keyed.iter().map(|(_, &r)| r).collect();
    assert_eq!(keyed_scores, indexed);

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    assert_eq!(sample_pagerank_with_rng(&g, cfg.damping, cfg.samples, &mut rng).unwrap(), indexed);
}

#[test]
fn invalid_sizes_fail_fast() {
    let bad_tolerance = PageRankConfig { tolerance: -1.0, ..Default::default() };
    assert_eq!(corpus().iterate_pagerank(bad_tolerance), Err(Error::InvalidTolerance(-1.0)));

    let empty: LinkGraph<&str> = LinkGraph::from_links(Vec::<(&str, Vec<&str>)>::new());
    assert!(empty.is_empty());
    assert_eq!(empty.sample_pagerank(SamplingConfig::default()), Err(Error::EmptyGraph));
    assert_eq!(empty.iterate_pagerank(PageRankConfig::default()), Err(Error::EmptyGraph));

    let g = corpus();
    let cfg = SamplingConfig { samples: 0, ..Default::default() };
    assert_eq!(g.sample_pagerank(cfg), Err(Error::ZeroSamples));
    assert_eq!(g.transition_model(&"9.html".to_string(), 0.85).unwrap_err(), Error::UnknownPage("\"9.html\"".into()));
}
