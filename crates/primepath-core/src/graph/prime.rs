//! The containment filter that selects prime paths.
//!
//! A prime path is an element of the combined path-and-cycle pool that is
//! not a contiguous sub-sequence of any other element. Containment is
//! judged per pool slot, so two identical elements each count as "another
//! element" for the other and both are dropped.

use crate::graph::{FlowGraph, VertexId, all_cycles, all_paths};

/// Returns `true` when `needle` occurs as a contiguous run inside
/// `haystack`.
///
/// Equal sequences contain each other, and the empty sequence is contained
/// in everything.
pub fn is_subpath(needle: &[VertexId], haystack: &[VertexId]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Filters `pool` down to the elements contained in no other element.
///
/// An element survives only if [`is_subpath`] rejects it against every
/// other slot of the pool. Identical elements occupy distinct slots and so
/// eliminate each other. Survivors keep their pool order.
pub fn retain_maximal(pool: &[Vec<VertexId>]) -> Vec<Vec<VertexId>> {
    pool.iter()
        .enumerate()
        .filter(|(i, candidate)| {
            !pool
                .iter()
                .enumerate()
                .any(|(j, other)| j != *i && is_subpath(candidate, other))
        })
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

/// Computes the prime paths of `graph`.
///
/// Pools every simple path from [`all_paths`] and every simple cycle from
/// [`all_cycles`], then keeps the elements contained in no other pool
/// entry. The result preserves pool order: paths in pair order first, then
/// cycles in start order.
pub fn prime_paths(graph: &FlowGraph) -> Vec<Vec<VertexId>> {
    let mut pool = all_paths(graph);
    pool.extend(all_cycles(graph));
    retain_maximal(&pool)
}
