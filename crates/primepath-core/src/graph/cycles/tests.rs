#![allow(clippy::expect_used)]

use super::*;
use crate::edgelist::EdgeList;
use crate::graph::build_graph;

fn graph(n: usize, edges: &[(usize, usize)]) -> FlowGraph {
    let edge_list = EdgeList {
        vertex_count: n,
        edges: edges.to_vec(),
    };
    build_graph(&edge_list).expect("fixture graph should build")
}

// ── acyclic graphs ─────────────────────────────────────────────────────────

/// A graph without edges has no cycles.
#[test]
fn test_edgeless_graph_has_no_cycles() {
    let g = graph(3, &[]);
    assert!(all_cycles(&g).is_empty());
}

/// A chain has no cycles.
#[test]
fn test_chain_has_no_cycles() {
    let g = graph(3, &[(0, 1), (1, 2)]);
    assert!(all_cycles(&g).is_empty());
}

/// A diamond has no cycles even though two routes share endpoints.
#[test]
fn test_diamond_has_no_cycles() {
    let g = graph(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    assert!(all_cycles(&g).is_empty());
}

// ── loops and rotations ────────────────────────────────────────────────────

/// A self-loop closes immediately as a two-entry cycle.
#[test]
fn test_self_loop_cycle() {
    let g = graph(1, &[(0, 0)]);
    assert_eq!(all_cycles(&g), vec![vec![0, 0]]);
}

/// Parallel self-loops each close their own cycle.
#[test]
fn test_parallel_self_loops_close_separately() {
    let g = graph(1, &[(0, 0), (0, 0)]);
    assert_eq!(all_cycles(&g), vec![vec![0, 0], vec![0, 0]]);
}

/// A two-vertex cycle is reported once from each start vertex.
#[test]
fn test_two_vertex_cycle_rotations() {
    let g = graph(2, &[(0, 1), (1, 0)]);
    assert_eq!(all_cycles(&g), vec![vec![0, 1, 0], vec![1, 0, 1]]);
}

/// Every rotation of a triangle is kept as its own cycle.
#[test]
fn test_triangle_rotations() {
    let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(
        all_cycles(&g),
        vec![vec![0, 1, 2, 0], vec![1, 2, 0, 1], vec![2, 0, 1, 2]]
    );
}

/// Two loops sharing a hub are found from all three reachable starts.
#[test]
fn test_figure_eight_cycles() {
    let g = graph(3, &[(0, 1), (1, 0), (0, 2), (2, 0)]);
    assert_eq!(
        all_cycles(&g),
        vec![
            vec![0, 1, 0],
            vec![0, 2, 0],
            vec![1, 0, 1],
            vec![2, 0, 2],
        ]
    );
}

// ── closure rule ───────────────────────────────────────────────────────────

/// An edge back into the middle of the path does not close a cycle.
#[test]
fn test_cycle_closes_only_on_start() {
    let g = graph(3, &[(0, 1), (1, 2), (2, 1)]);
    assert_eq!(all_cycles(&g), vec![vec![1, 2, 1], vec![2, 1, 2]]);
}

/// A cycle behind an entry chain is found only from its own vertices.
#[test]
fn test_entry_chain_contributes_no_cycle() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 1)]);
    let cycles = all_cycles(&g);
    assert_eq!(
        cycles,
        vec![vec![1, 2, 3, 1], vec![2, 3, 1, 2], vec![3, 1, 2, 3]]
    );
}

/// Cycles start and end on the same vertex with distinct interior stops.
#[test]
fn test_cycles_are_simple() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 0), (0, 0)]);
    for cycle in all_cycles(&g) {
        assert!(cycle.len() >= 2, "cycle too short: {cycle:?}");
        assert_eq!(cycle.first(), cycle.last());
        let interior = &cycle[..cycle.len() - 1];
        let mut seen = vec![false; 4];
        for &vertex in interior {
            assert!(!seen[vertex], "vertex {vertex} repeats in {cycle:?}");
            seen[vertex] = true;
        }
    }
}

// ── determinism ────────────────────────────────────────────────────────────

/// Two runs over the same graph agree element for element.
#[test]
fn test_enumeration_is_deterministic() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (2, 0), (1, 1)]);
    assert_eq!(all_cycles(&g), all_cycles(&g));
}
