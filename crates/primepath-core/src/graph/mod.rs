//! Directed multigraph over integer vertices, built on `petgraph`.
//!
//! [`FlowGraph`] wraps a [`DiGraph`] whose node indices coincide with the
//! vertex ids `0..n`: all `n` vertices are added at construction time, in
//! order, and nothing is ever removed. Edges carry no payload; parallel
//! edges and self-loops are kept exactly as declared.
//!
//! # Construction
//!
//! [`build_graph`] consumes a parsed [`EdgeList`]: it allocates the vertex
//! set, then appends every declared edge in document order. Endpoint bounds
//! are checked at [`FlowGraph::add_edge`] time, and the first out-of-range
//! endpoint aborts construction.
//!
//! # Enumeration
//!
//! See the [`paths`] submodule for simple-path enumeration, [`cycles`] for
//! simple-cycle enumeration, and [`prime`] for the containment filter that
//! reduces both to the prime set.

pub mod cycles;
pub mod paths;
pub mod prime;

pub use cycles::all_cycles;
pub use paths::all_paths;
pub use prime::{is_subpath, prime_paths, retain_maximal};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::edgelist::EdgeList;

/// Integer vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Errors that can occur while assembling a [`FlowGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    /// An edge endpoint lies outside `[0, vertex_count)`.
    InvalidVertex {
        /// The offending vertex id.
        vertex: VertexId,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

impl std::fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphBuildError::InvalidVertex {
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "vertex {vertex} is out of range for a graph with {vertex_count} vertices"
                )
            }
        }
    }
}

impl std::error::Error for GraphBuildError {}

/// A directed multigraph over vertices `0..n`.
///
/// Wraps a `petgraph` [`DiGraph`] with unit node and edge weights. Because
/// every vertex is added up front and none is ever removed, a [`VertexId`]
/// and the underlying [`NodeIndex`] are interchangeable, so the public
/// surface speaks plain `usize` throughout.
///
/// The graph is immutable once all edges are added; enumeration never
/// mutates it.
///
/// Construct with [`FlowGraph::with_vertices`] and [`FlowGraph::add_edge`],
/// or in bulk with [`build_graph`].
#[derive(Debug)]
pub struct FlowGraph {
    graph: DiGraph<(), ()>,
}

impl FlowGraph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = DiGraph::with_capacity(n, 0);
        for _ in 0..n {
            graph.add_node(());
        }
        FlowGraph { graph }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns an iterator over all vertex ids in ascending order.
    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.vertex_count()
    }

    /// Appends a directed edge from `source` to `target`.
    ///
    /// Parallel edges and self-loops are recorded as declared; nothing is
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphBuildError::InvalidVertex`] if either endpoint is
    /// outside `[0, vertex_count)`.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<(), GraphBuildError> {
        let vertex_count = self.vertex_count();
        for vertex in [source, target] {
            if vertex >= vertex_count {
                return Err(GraphBuildError::InvalidVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.graph
            .add_edge(NodeIndex::new(source), NodeIndex::new(target), ());
        Ok(())
    }

    /// Fills `buf` with the successors of `vertex`, in edge-insertion order.
    ///
    /// The buffer is cleared before being populated, so callers can reuse a
    /// single allocation across many iterations rather than allocating a
    /// fresh `Vec` per call. A parallel edge contributes its target once per
    /// copy; an out-of-range `vertex` has no successors.
    pub fn successors_into(&self, vertex: VertexId, buf: &mut Vec<VertexId>) {
        buf.clear();
        for edge_ref in self.graph.edges(NodeIndex::new(vertex)) {
            buf.push(edge_ref.target().index());
        }
        // petgraph walks a node's out-edges most-recently-added first;
        // reverse to recover insertion order.
        buf.reverse();
    }

    /// Returns the successors of `vertex` in edge-insertion order.
    pub fn successors(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut buf = Vec::new();
        self.successors_into(vertex, &mut buf);
        buf
    }
}

/// Constructs a [`FlowGraph`] from a parsed [`EdgeList`].
///
/// Allocates `edge_list.vertex_count` vertices, then appends every declared
/// edge in document order.
///
/// # Errors
///
/// Returns [`GraphBuildError::InvalidVertex`] for the first declared edge
/// endpoint outside `[0, vertex_count)`.
pub fn build_graph(edge_list: &EdgeList) -> Result<FlowGraph, GraphBuildError> {
    let mut graph = FlowGraph::with_vertices(edge_list.vertex_count);
    for &(source, target) in &edge_list.edges {
        graph.add_edge(source, target)?;
    }
    Ok(graph)
}
