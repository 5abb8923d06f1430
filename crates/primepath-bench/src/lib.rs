//! Edge-list generators and benchmark utilities for the primepath enumerators.
//!
//! This crate provides deterministic generation of small edge lists for
//! benchmarking and sanity-testing `primepath-core`. The enumeration
//! workload grows exponentially with graph density, so every preset stays
//! deliberately tiny: a dense graph a few dozen vertices wide already
//! produces an astronomically large path pool.

use primepath_core::EdgeList;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the random digraph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges to draw.
    pub edge_count: usize,
}

/// Predefined size tiers for benchmarking.
///
/// Tiers are spaced by vertex count at a near-constant edges-per-vertex
/// ratio, keeping the branching factor low enough that exhaustive
/// enumeration finishes in benchmark-friendly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 6 vertices, 8 random edges.
    Small,
    /// 9 vertices, 13 random edges.
    Medium,
    /// 12 vertices, 18 random edges.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                vertex_count: 6,
                edge_count: 8,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                vertex_count: 9,
                edge_count: 13,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                vertex_count: 12,
                edge_count: 18,
            },
        }
    }
}

/// Generates a linear chain `0 → 1 → … → n-1`.
///
/// The cheap end of the workload: every ordered pair is joined by at most
/// one path and no cycle exists.
pub fn linear_chain(vertex_count: usize) -> EdgeList {
    let edges = (1..vertex_count).map(|v| (v - 1, v)).collect();
    EdgeList {
        vertex_count,
        edges,
    }
}

/// Generates a single directed cycle `0 → 1 → … → n-1 → 0`.
///
/// Every ordered pair is joined by exactly one path and each vertex roots
/// one rotation of the cycle.
pub fn single_cycle(vertex_count: usize) -> EdgeList {
    let mut edges: Vec<(usize, usize)> = (1..vertex_count).map(|v| (v - 1, v)).collect();
    if vertex_count > 0 {
        edges.push((vertex_count - 1, 0));
    }
    EdgeList {
        vertex_count,
        edges,
    }
}

/// Generates a sparse random digraph.
///
/// Both endpoints of every edge are drawn uniformly, so self-loops and
/// parallel edges occur at their natural frequency. All randomness is
/// deterministic, seeded from `config.seed`.
pub fn sparse_random(config: &GeneratorConfig) -> EdgeList {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(config.edge_count);
    for _ in 0..config.edge_count {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        edges.push((source, target));
    }
    EdgeList {
        vertex_count: config.vertex_count,
        edges,
    }
}
