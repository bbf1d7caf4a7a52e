//! Property-based tests for graph invariants
//!
//! Random sequences of mutations are applied to a graph and the structural
//! guarantees (sorted unique nodes, no dangling edges, independent copies,
//! orientation-free equality, simple paths) are checked after each run.

use std::sync::Arc;

use campus_core::{Building, BuildingRegistry, Graph};
use proptest::prelude::*;

const CODES: [&str; 6] = ["AL", "B1", "DC", "E2", "MC", "QNC"];
const CONNECTORS: [&str; 3] = ["tunnel", "skyway", "bridge"];

#[derive(Debug, Clone)]
enum Op {
    AddNode(usize),
    RemoveNode(usize),
    AddEdge(usize, usize, usize),
    RemoveEdge(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    let code = 0..CODES.len();
    prop_oneof![
        3 => code.clone().prop_map(Op::AddNode),
        1 => code.clone().prop_map(Op::RemoveNode),
        4 => (code.clone(), code.clone(), 0..CONNECTORS.len())
            .prop_map(|(a, b, c)| Op::AddEdge(a, b, c)),
        1 => (code.clone(), code).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
    ]
}

fn registry() -> BuildingRegistry {
    let mut registry = BuildingRegistry::new();
    for code in CODES {
        registry.insert(code, &format!("Building {code}")).unwrap();
    }
    registry
}

fn apply(graph: &mut Graph, registry: &BuildingRegistry, op: &Op) {
    match *op {
        Op::AddNode(i) => {
            let building = registry.find_building(CODES[i]).unwrap();
            let _ = graph.add_node(building);
        }
        Op::RemoveNode(i) => {
            graph.remove_node(CODES[i]);
        }
        Op::AddEdge(a, b, c) => {
            let _ = graph.add_edge(CODES[a], CODES[b], CONNECTORS[c]);
        }
        Op::RemoveEdge(a, b) => {
            graph.remove_edge(CODES[a], CODES[b]);
        }
    }
}

fn build(ops: &[Op]) -> Graph {
    let registry = registry();
    let mut graph = Graph::new();
    for op in ops {
        apply(&mut graph, &registry, op);
    }
    graph
}

fn assert_invariants(graph: &Graph) {
    let codes: Vec<&str> = graph.buildings().map(|b| b.code().as_str()).collect();
    for pair in codes.windows(2) {
        assert!(pair[0] < pair[1], "nodes out of order: {:?}", codes);
    }
    for edge in graph.edges() {
        assert!(graph.contains(edge.from.as_str()), "dangling edge {}", edge);
        assert!(graph.contains(edge.to.as_str()), "dangling edge {}", edge);
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(op(), 0..40)) {
        let graph = build(&ops);
        assert_invariants(&graph);
    }

    #[test]
    fn prop_remove_node_cascades(ops in prop::collection::vec(op(), 0..40), victim in 0..CODES.len()) {
        let mut graph = build(&ops);
        graph.remove_node(CODES[victim]);

        prop_assert!(!graph.contains(CODES[victim]));
        prop_assert!(graph.edges().iter().all(|e| !e.touches(CODES[victim])));
        assert_invariants(&graph);
    }

    #[test]
    fn prop_copy_is_independent(
        ops in prop::collection::vec(op(), 0..30),
        more in prop::collection::vec(op(), 1..20),
    ) {
        let registry = registry();
        let original = build(&ops);
        let snapshot = original.to_string();
        let (nodes, edges) = (original.node_count(), original.edge_count());

        let mut copy = original.clone();
        for op in &more {
            apply(&mut copy, &registry, op);
        }
        copy.delete_graph();

        prop_assert_eq!(original.node_count(), nodes);
        prop_assert_eq!(original.edge_count(), edges);
        prop_assert_eq!(original.to_string(), snapshot);
    }

    #[test]
    fn prop_equality_reflexive_and_symmetric(
        a in prop::collection::vec(op(), 0..20),
        b in prop::collection::vec(op(), 0..20),
    ) {
        let g = build(&a);
        let h = build(&b);

        prop_assert!(PartialEq::eq(&g, &g));
        prop_assert_eq!(g == h, h == g);
        prop_assert!(g == g.clone());
    }

    #[test]
    fn prop_equality_ignores_edge_orientation(ops in prop::collection::vec(op(), 0..40)) {
        let graph = build(&ops);

        let mut flipped = Graph::new();
        for building in graph.buildings() {
            flipped.add_node(Arc::clone(building)).unwrap();
        }
        for edge in graph.edges().iter().rev() {
            flipped
                .add_edge(edge.to.as_str(), edge.from.as_str(), &edge.connector)
                .unwrap();
        }

        prop_assert!(graph == flipped);
    }

    #[test]
    fn prop_paths_are_simple(ops in prop::collection::vec(op(), 0..25), from in 0..CODES.len(), to in 0..CODES.len()) {
        let graph = build(&ops);
        let (from, to) = (CODES[from], CODES[to]);

        match graph.find_paths(from, to, true) {
            Err(err) => {
                prop_assert!(err.is_not_found());
                prop_assert!(!graph.contains(from) || !graph.contains(to));
            }
            Ok(paths) => {
                for path in &paths {
                    let codes: Vec<&str> = path.codes().map(|c| c.as_str()).collect();
                    prop_assert_eq!(codes[0], from);
                    prop_assert_eq!(codes[codes.len() - 1], to);

                    let mut unique = codes.clone();
                    unique.sort_unstable();
                    unique.dedup();
                    prop_assert_eq!(unique.len(), codes.len());

                    for (pair, connector) in codes.windows(2).zip(path.connectors()) {
                        prop_assert!(graph
                            .edges()
                            .iter()
                            .any(|e| e.connects(pair[0], pair[1]) && e.connector == connector));
                    }
                }

                let first = graph.find_paths(from, to, false).unwrap();
                prop_assert_eq!(first.len(), paths.len().min(1));
                prop_assert_eq!(first.first(), paths.first());
            }
        }
    }
}

#[test]
fn add_node_order_does_not_matter() {
    let registry = registry();
    let mut forward = Graph::new();
    let mut backward = Graph::new();

    for code in CODES {
        forward.add_node(registry.find_building(code).unwrap()).unwrap();
    }
    for code in CODES.iter().rev() {
        backward.add_node(registry.find_building(code).unwrap()).unwrap();
    }

    assert_eq!(forward, backward);
    assert_eq!(forward.to_string(), backward.to_string());
}

#[test]
fn buildings_outlive_registry_removal() {
    let mut registry = registry();
    let mut graph = Graph::new();
    graph.add_node(registry.find_building("MC").unwrap()).unwrap();

    graph.remove_node("MC");
    registry.remove("MC");

    assert!(graph.is_empty());
    assert!(registry.find_building("MC").is_none());

    let standalone = Arc::new(Building::new("MC", "Mathematics and Computer"));
    graph.add_node(standalone).unwrap();
    assert_eq!(graph.node_count(), 1);
}
