//! Exhaustive simple-path enumeration.
//!
//! [`all_paths`] visits every ordered vertex pair and collects every simple
//! path between them with a backtracking depth-first search. The search
//! state is a single current path plus a visited mask; both are restored on
//! the way back up, so each pair is explored from a clean slate and every
//! branch of the graph is tried exactly once per reachable prefix.
//!
//! Parallel edges are honoured per copy: two edges between the same pair of
//! vertices yield the same path twice, once through each edge.

use crate::graph::{FlowGraph, VertexId};

/// Enumerates all simple paths between every ordered vertex pair.
///
/// For each pair `(start, target)` the search records every path from
/// `start` to `target` that repeats no vertex. The pair with
/// `start == target` contributes the single-vertex path `[start]`, even
/// when a self-loop exists.
///
/// Results are grouped by pair in row-major order (every target for the
/// first start, then the second start, and so on) and within a pair follow
/// depth-first discovery order, which in turn follows edge insertion order.
pub fn all_paths(graph: &FlowGraph) -> Vec<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();
    let mut results = Vec::new();
    let mut nbuf = Vec::new();
    for start in graph.vertices() {
        for target in graph.vertices() {
            let mut visited = vec![false; vertex_count];
            let mut path = vec![start];
            dfs_paths(
                graph,
                start,
                target,
                &mut path,
                &mut visited,
                &mut nbuf,
                &mut results,
            );
        }
    }
    results
}

/// One step of the path search rooted at `path[0]`.
///
/// `path` holds the vertices walked so far, `current` being the last entry.
/// Reaching `target` records a snapshot and stops extending; the target
/// check comes before the visited mark, so the start vertex of a trivial
/// pair is recorded before any successor is considered.
fn dfs_paths(
    graph: &FlowGraph,
    current: VertexId,
    target: VertexId,
    path: &mut Vec<VertexId>,
    visited: &mut [bool],
    nbuf: &mut Vec<VertexId>,
    results: &mut Vec<Vec<VertexId>>,
) {
    if current == target {
        results.push(path.clone());
        return;
    }
    visited[current] = true;
    graph.successors_into(current, nbuf);
    // Copy the ids out so `nbuf` is free to be reused by the recursive call.
    let successors: Vec<VertexId> = nbuf.clone();
    for successor in successors {
        if !visited[successor] {
            path.push(successor);
            dfs_paths(graph, successor, target, path, visited, nbuf, results);
            path.pop();
        }
    }
    visited[current] = false;
}
