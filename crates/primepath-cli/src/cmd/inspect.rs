//! Implementation of `primepath inspect <file>`.
//!
//! Parses an edge-list file and prints summary statistics to stdout:
//! - vertex and edge counts
//! - self-loop count
//! - surplus parallel-edge count
//! - source count (vertices with no incoming edge)
//! - sink count (vertices with no outgoing edge)
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = parse/build failure.
use std::collections::BTreeMap;

use primepath_core::{FlowGraph, VertexId};

use crate::OutputFormat;
use crate::cmd::parse_graph;
use crate::error::CliError;

/// Statistics gathered from a built [`FlowGraph`].
pub struct InspectStats {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of edges, counting parallel copies separately.
    pub edge_count: usize,
    /// Number of self-loop edges.
    pub self_loop_count: usize,
    /// Edge copies beyond the first between the same ordered vertex pair.
    pub parallel_edge_count: usize,
    /// Vertices with no incoming edge.
    pub source_count: usize,
    /// Vertices with no outgoing edge.
    pub sink_count: usize,
}

impl InspectStats {
    /// Computes statistics from a built [`FlowGraph`].
    pub fn from_graph(graph: &FlowGraph) -> Self {
        let mut self_loop_count = 0;
        let mut parallel_edge_count = 0;
        let mut sink_count = 0;
        let mut has_incoming = vec![false; graph.vertex_count()];
        let mut buf = Vec::new();

        for vertex in graph.vertices() {
            graph.successors_into(vertex, &mut buf);
            if buf.is_empty() {
                sink_count += 1;
            }
            let mut multiplicity: BTreeMap<VertexId, usize> = BTreeMap::new();
            for &successor in &buf {
                *multiplicity.entry(successor).or_insert(0) += 1;
                has_incoming[successor] = true;
                if successor == vertex {
                    self_loop_count += 1;
                }
            }
            parallel_edge_count += multiplicity.values().map(|&count| count - 1).sum::<usize>();
        }

        let source_count = has_incoming.iter().filter(|&&incoming| !incoming).count();

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            self_loop_count,
            parallel_edge_count,
            source_count,
            sink_count,
        }
    }
}

/// Runs the `inspect` command.
///
/// Parses `content` as an edge list, builds the graph, computes statistics,
/// and writes them to stdout in the requested format.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the content cannot be parsed or
/// the graph cannot be built.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = parse_graph(content)?;
    let stats = InspectStats::from_graph(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "vertices:        {}", stats.vertex_count)?;
    writeln!(w, "edges:           {}", stats.edge_count)?;
    writeln!(w, "self_loops:      {}", stats.self_loop_count)?;
    writeln!(w, "parallel_edges:  {}", stats.parallel_edge_count)?;
    writeln!(w, "sources:         {}", stats.source_count)?;
    writeln!(w, "sinks:           {}", stats.sink_count)?;
    Ok(())
}

/// Writes inspect statistics as a single JSON object to stdout.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();

    obj.insert(
        "vertex_count".to_owned(),
        serde_json::Value::Number(stats.vertex_count.into()),
    );
    obj.insert(
        "edge_count".to_owned(),
        serde_json::Value::Number(stats.edge_count.into()),
    );
    obj.insert(
        "self_loop_count".to_owned(),
        serde_json::Value::Number(stats.self_loop_count.into()),
    );
    obj.insert(
        "parallel_edge_count".to_owned(),
        serde_json::Value::Number(stats.parallel_edge_count.into()),
    );
    obj.insert(
        "source_count".to_owned(),
        serde_json::Value::Number(stats.source_count.into()),
    );
    obj.insert(
        "sink_count".to_owned(),
        serde_json::Value::Number(stats.sink_count.into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    writeln!(w, "{json}")
}
