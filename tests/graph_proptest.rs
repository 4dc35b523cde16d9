use std::collections::{HashMap, HashSet};

use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;
use wdgraph::{AdjacencyGraph, EdgeListGraph, GraphError, WeightedDigraph};

#[derive(Debug, Clone)]
enum Operation {
    Add(u8),
    Set(u8, u8, i32),
    Remove(u8),
    Sources(u8),
    Targets(u8),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            1 => (0u8..8).prop_map(Operation::Add),
            4 => (0u8..8, 0u8..8, -2i32..6).prop_map(|(s, t, w)| Operation::Set(s, t, w)),
            1 => (0u8..8).prop_map(Operation::Remove),
            1 => (0u8..10).prop_map(Operation::Sources),
            1 => (0u8..10).prop_map(Operation::Targets),
        ],
        1..120,
    )
}

fn model_sources(model: &DiGraphMap<u8, i32>, target: u8) -> HashMap<u8, i32> {
    model
        .all_edges()
        .filter(|&(_, t, _)| t == target)
        .map(|(s, _, &w)| (s, w))
        .collect()
}

fn model_targets(model: &DiGraphMap<u8, i32>, source: u8) -> HashMap<u8, i32> {
    model
        .all_edges()
        .filter(|&(s, _, _)| s == source)
        .map(|(_, t, &w)| (t, w))
        .collect()
}

/// Replays `ops` against `graph` and a petgraph reference, comparing every
/// result and checking invariants after each step.
fn replay<G: WeightedDigraph<u8>>(mut graph: G, ops: &[Operation]) {
    let mut model: DiGraphMap<u8, i32> = DiGraphMap::new();

    for op in ops {
        match *op {
            Operation::Add(v) => {
                let expected = !model.contains_node(v);
                model.add_node(v);
                assert_eq!(graph.add(v), expected, "add({v}) mismatch");
            }
            Operation::Set(s, t, w) => {
                let result = graph.set(s, t, w);
                if w < 0 {
                    assert_eq!(result, Err(GraphError::NegativeWeight(w)));
                } else {
                    model.add_node(s);
                    model.add_node(t);
                    let expected = if w > 0 {
                        model.add_edge(s, t, w)
                    } else {
                        model.remove_edge(s, t)
                    };
                    assert_eq!(result, Ok(expected.unwrap_or(0)), "set({s}, {t}, {w}) mismatch");
                }
            }
            Operation::Remove(v) => {
                assert_eq!(graph.remove(&v), model.remove_node(v), "remove({v}) mismatch");
            }
            Operation::Sources(v) => {
                assert_eq!(graph.sources(&v), model_sources(&model, v), "sources({v}) mismatch");
            }
            Operation::Targets(v) => {
                assert_eq!(graph.targets(&v), model_targets(&model, v), "targets({v}) mismatch");
            }
        }

        assert!(graph.check_invariants(), "invariants violated after {op:?}");
        assert_eq!(graph.vertex_count(), model.node_count());
        assert_eq!(graph.edge_count(), model.edge_count());
    }

    let vertices: HashSet<u8> = model.nodes().collect();
    assert_eq!(graph.vertices(), vertices, "final vertex set mismatch");
    for edge in graph.edges() {
        assert!(edge.weight() > 0);
        assert_eq!(
            model.edge_weight(*edge.source(), *edge.target()),
            Some(&edge.weight()),
            "final edge {edge:?} mismatch"
        );
    }
}

proptest! {
    #[test]
    fn test_edge_list_matches_reference(ops in operations()) {
        replay(EdgeListGraph::new(), &ops);
    }

    #[test]
    fn test_adjacency_matches_reference(ops in operations()) {
        replay(AdjacencyGraph::new(), &ops);
    }

    #[test]
    fn test_representations_agree(ops in operations()) {
        let mut a = EdgeListGraph::new();
        let mut b = AdjacencyGraph::new();
        for op in &ops {
            if let Operation::Set(s, t, w) = *op {
                prop_assert_eq!(a.set(s, t, w), b.set(s, t, w));
            } else if let Operation::Remove(v) = *op {
                prop_assert_eq!(a.remove(&v), b.remove(&v));
            } else if let Operation::Add(v) = *op {
                prop_assert_eq!(a.add(v), b.add(v));
            }
        }
        prop_assert_eq!(a.vertices(), b.vertices());
        for v in a.vertices() {
            prop_assert_eq!(a.targets(&v), b.targets(&v));
            prop_assert_eq!(a.sources(&v), b.sources(&v));
        }
    }
}
