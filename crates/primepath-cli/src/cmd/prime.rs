//! Implementation of `primepath prime <file>`.
//!
//! Parses an edge-list file, builds the directed graph, pools all simple
//! paths and simple cycles, and keeps only the prime paths: pool entries
//! that are a contiguous sub-sequence of no other entry. Duplicate pool
//! entries contain each other and are both dropped.
//!
//! Output (human mode): each prime path on one line with vertices separated
//! by ` -> `, shortest first.
//! Output (JSON mode): a JSON object
//! `{"prime_paths": [[...], ...], "count": N}`, ordered shortest-first.
//!
//! Exit codes: 0 = success, 2 = parse/build failure.
use primepath_core::prime_paths;

use crate::OutputFormat;
use crate::cmd::parse_graph;
use crate::error::CliError;
use crate::format::{sort_sequences, write_human, write_json};

/// Runs the `prime` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if the input cannot be parsed or the graph
/// cannot be built.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = parse_graph(content)?;
    let mut prime = prime_paths(&graph);
    sort_sequences(&mut prime);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => write_human(&mut out, &prime),
        OutputFormat::Json => write_json(&mut out, "prime_paths", &prime),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
