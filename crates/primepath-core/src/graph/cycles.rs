//! Exhaustive simple-cycle enumeration.
//!
//! [`all_cycles`] runs one backtracking depth-first search per start vertex
//! and records a cycle whenever an edge leads back to that search's own
//! start. Interior vertices stay distinct, so every result is a simple
//! cycle written with its start repeated at the end.
//!
//! Each rotation of a cycle is discovered by the search rooted at its own
//! first vertex, and all rotations are kept as separate results.

use crate::graph::{FlowGraph, VertexId};

/// Enumerates all simple cycles through every start vertex.
///
/// A cycle is reported as `[start, .., start]`, closing only on the vertex
/// the search began at; edges back into the middle of the current path are
/// ignored. A self-loop on `v` yields `[v, v]`, once per declared copy.
///
/// Results are grouped by start vertex in ascending order and within a
/// start follow depth-first discovery order, which in turn follows edge
/// insertion order.
pub fn all_cycles(graph: &FlowGraph) -> Vec<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();
    let mut results = Vec::new();
    let mut nbuf = Vec::new();
    for start in graph.vertices() {
        let mut visited = vec![false; vertex_count];
        let mut path = vec![start];
        dfs_cycles(graph, start, &mut path, &mut visited, &mut nbuf, &mut results);
    }
    results
}

/// One step of the cycle search rooted at `path[0]`.
///
/// Unvisited successors extend the path; a visited successor closes a
/// cycle only when it equals the root. The mark on `current` is dropped on
/// the way back up so sibling branches see a clean mask.
fn dfs_cycles(
    graph: &FlowGraph,
    current: VertexId,
    path: &mut Vec<VertexId>,
    visited: &mut [bool],
    nbuf: &mut Vec<VertexId>,
    results: &mut Vec<Vec<VertexId>>,
) {
    visited[current] = true;
    graph.successors_into(current, nbuf);
    // Copy the ids out so `nbuf` is free to be reused by the recursive call.
    let successors: Vec<VertexId> = nbuf.clone();
    for successor in successors {
        if !visited[successor] {
            path.push(successor);
            dfs_cycles(graph, successor, path, visited, nbuf, results);
            path.pop();
        } else if successor == path[0] {
            let mut cycle = path.clone();
            cycle.push(successor);
            results.push(cycle);
        }
    }
    visited[current] = false;
}

#[cfg(test)]
mod tests;
