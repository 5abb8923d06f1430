//! Implementation of `primepath paths <file>`.
//!
//! Parses an edge-list file, builds the directed graph, and enumerates all
//! simple paths between every ordered vertex pair, including the trivial
//! single-vertex path of each vertex.
//!
//! Output (human mode): each path on one line with vertices separated by
//! ` -> `, shortest first.
//! Output (JSON mode): a JSON object `{"paths": [[...], ...], "count": N}`,
//! with paths ordered shortest-first.
//!
//! Exit codes: 0 = success, 2 = parse/build failure.
use primepath_core::all_paths;

use crate::OutputFormat;
use crate::cmd::parse_graph;
use crate::error::CliError;
use crate::format::{sort_sequences, write_human, write_json};

/// Runs the `paths` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if the input cannot be parsed or the graph
/// cannot be built.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = parse_graph(content)?;
    let mut paths = all_paths(&graph);
    sort_sequences(&mut paths);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => write_human(&mut out, &paths),
        OutputFormat::Json => write_json(&mut out, "paths", &paths),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
