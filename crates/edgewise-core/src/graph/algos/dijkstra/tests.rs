use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::error::GraphError;
use crate::graph::Color;

const STRATEGIES: [QueueStrategy; 3] = [
    QueueStrategy::Auto,
    QueueStrategy::BinaryHeap,
    QueueStrategy::LinearScan,
];

fn elements<T: Copy + PartialEq + fmt::Debug>(graph: &Graph<T>, path: &[VertexId]) -> Vec<T> {
    path.iter().map(|id| *graph.element(*id).unwrap()).collect()
}

/// a-b(1), b-c(1), a-c(4), c-d(1)
fn diamond() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for e in ["a", "b", "c", "d"] {
        graph.add_vertex(e).unwrap();
    }
    graph.connect_weighted(&"a", &"b", 1.0).unwrap();
    graph.connect_weighted(&"b", &"c", 1.0).unwrap();
    graph.connect_weighted(&"a", &"c", 4.0).unwrap();
    graph.connect_weighted(&"c", &"d", 1.0).unwrap();
    graph
}

/// Seeded pseudo-random graph over `0..n`
fn random_graph(n: u32, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex(i).unwrap();
    }
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_ratio(1, 3) {
                let weight = rng.gen_range(1..=9) as f64;
                graph.connect_weighted(&a, &b, weight).unwrap();
            }
        }
    }
    graph
}

fn assert_clean(graph: &Graph<u32>) {
    graph.for_each_vertex(|v| assert_eq!(v.color(), Color::Neutral));
    assert!(graph.vertices.iter().all(|v| v.slot.is_none() && v.distance == 0.0));
}

#[test]
fn test_weighted_path_prefers_lighter_route() {
    let mut graph = diamond();
    for strategy in STRATEGIES {
        let path = graph.shortest_path_weighted_with(&"a", &"d", strategy).unwrap();
        assert_eq!(elements(&graph, &path), vec!["a", "b", "c", "d"]);
        assert_eq!(graph.path_weight(&path).unwrap(), 3.0);
    }
    assert_eq!(graph.distance_weighted(&"a", &"d").unwrap(), Some(3.0));

    let path = graph.shortest_path_unweighted(&"a", &"d").unwrap();
    assert_eq!(elements(&graph, &path), vec!["a", "c", "d"]);
}

#[test]
fn test_weighted_path_same_vertex() {
    let mut graph = diamond();
    let path = graph.shortest_path_weighted(&"c", &"c").unwrap();
    assert_eq!(elements(&graph, &path), vec!["c"]);
    assert_eq!(graph.distance_weighted(&"c", &"c").unwrap(), Some(0.0));
}

#[test]
fn test_weighted_path_unreachable() {
    let mut graph = diamond();
    graph.add_vertex("island").unwrap();

    for strategy in STRATEGIES {
        let path = graph
            .shortest_path_weighted_with(&"a", &"island", strategy)
            .unwrap();
        assert!(path.is_empty());
    }
    assert_eq!(graph.distance_weighted(&"island", &"a").unwrap(), None);
}

#[test]
fn test_weighted_path_missing_endpoint() {
    let mut graph = diamond();
    let err = graph.shortest_path_weighted(&"zz", &"a").unwrap_err();
    assert!(matches!(err, GraphError::NotFound { .. }));
    let err = graph.distance_weighted(&"a", &"zz").unwrap_err();
    assert!(matches!(err, GraphError::NotFound { .. }));
}

#[test]
fn test_strategies_agree_on_distances() {
    for seed in 1..6 {
        let mut graph = random_graph(24, seed);
        for to in 1..24 {
            let mut costs = Vec::new();
            for strategy in STRATEGIES {
                let path = graph.shortest_path_weighted_with(&0, &to, strategy).unwrap();
                costs.push(if path.is_empty() {
                    None
                } else {
                    Some(graph.path_weight(&path).unwrap())
                });
            }
            assert!(costs.windows(2).all(|w| w[0] == w[1]), "seed {seed} to {to}: {costs:?}");
            assert_eq!(costs[0], graph.distance_weighted(&0, &to).unwrap());
        }
        assert_clean(&graph);
    }
}

#[test]
fn test_weighted_paths_are_valid() {
    let mut graph = random_graph(30, 42);
    for to in 1..30 {
        let path = graph.shortest_path_weighted(&0, &to).unwrap();
        let Some(cost) = graph.distance_weighted(&0, &to).unwrap() else {
            assert!(path.is_empty());
            continue;
        };

        let ids = elements(&graph, &path);
        assert_eq!(ids.first(), Some(&0));
        assert_eq!(ids.last(), Some(&to));
        for pair in ids.windows(2) {
            assert!(graph.are_neighbors(&pair[0], &pair[1]));
        }
        assert_eq!(graph.path_weight(&path).unwrap(), cost);
    }
    assert_clean(&graph);
}

#[test]
fn test_unit_weights_match_hop_count() {
    let mut graph: Graph<u32> = Graph::new();
    for i in 0..12 {
        graph.add_vertex(i).unwrap();
    }
    // A ring with two chords
    for i in 0..12 {
        graph.connect(&i, &((i + 1) % 12)).unwrap();
    }
    graph.connect(&0, &6).unwrap();
    graph.connect(&3, &9).unwrap();

    for to in 1..12 {
        let weighted = graph.shortest_path_weighted(&0, &to).unwrap();
        let hops = graph.distance_unweighted(&0, &to).unwrap().unwrap();
        assert_eq!(weighted.len() - 1, hops);
        assert_eq!(graph.distance_weighted(&0, &to).unwrap(), Some(hops as f64));
    }
}

#[test]
fn test_dense_graph_uses_configured_strategy() {
    // Complete graph on 6 vertices: 15 edges, above the auto threshold
    let mut graph: Graph<u32> = Graph::new();
    for i in 0..6 {
        graph.add_vertex(i).unwrap();
    }
    for a in 0..6 {
        for b in (a + 1)..6 {
            graph.connect_weighted(&a, &b, (a + b + 1) as f64).unwrap();
        }
    }
    assert_eq!(
        QueueStrategy::Auto.resolve(graph.len(), graph.edge_count(), graph.config().dense_slack),
        QueueStrategy::LinearScan
    );

    let auto = graph.distance_weighted(&0, &5).unwrap();
    let mut config = *graph.config();
    config.queue = QueueStrategy::BinaryHeap;
    graph.set_config(config);
    assert_eq!(graph.distance_weighted(&0, &5).unwrap(), auto);
    assert_eq!(auto, Some(6.0));
}

#[test]
fn test_paths_after_removal() {
    let mut graph = diamond();
    graph.remove_vertex(&"b").unwrap();

    let path = graph.shortest_path_weighted(&"a", &"d").unwrap();
    assert_eq!(elements(&graph, &path), vec!["a", "c", "d"]);
    assert_eq!(graph.distance_weighted(&"a", &"d").unwrap(), Some(5.0));
}

#[test]
fn test_path_found_when_small_weights_are_absorbed() {
    // 1e17 + 1.0 == 1e17, so x, y and z all settle at the same distance
    let mut graph = Graph::new();
    for e in ["s", "x", "y", "z"] {
        graph.add_vertex(e).unwrap();
    }
    graph.connect_weighted(&"s", &"x", 1e17).unwrap();
    graph.connect_weighted(&"y", &"z", 1.0).unwrap();
    graph.connect_weighted(&"x", &"y", 1.0).unwrap();

    for strategy in STRATEGIES {
        let path = graph.shortest_path_weighted_with(&"s", &"z", strategy).unwrap();
        assert_eq!(elements(&graph, &path), vec!["s", "x", "y", "z"], "{strategy}");
        assert_eq!(graph.distance_weighted(&"s", &"z").unwrap(), Some(1e17));
    }
    graph.for_each_vertex(|v| assert_eq!(v.color(), Color::Neutral));
    assert!(graph.vertices.iter().all(|v| v.slot.is_none()));
}
