//! Implementation of `primepath cycles <file>`.
//!
//! Parses an edge-list file, builds the directed graph, and enumerates all
//! simple cycles through every start vertex. Rotations of the same cycle
//! count separately, one per start vertex.
//!
//! Output (human mode): each cycle on one line with vertices separated by
//! ` -> `, the start vertex repeated at the end, shortest first.
//! Output (JSON mode): a JSON object `{"cycles": [[...], ...], "count": N}`,
//! with cycles ordered shortest-first.
//!
//! Exit codes: 0 = success, 2 = parse/build failure.
use primepath_core::all_cycles;

use crate::OutputFormat;
use crate::cmd::parse_graph;
use crate::error::CliError;
use crate::format::{sort_sequences, write_human, write_json};

/// Runs the `cycles` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if the input cannot be parsed or the graph
/// cannot be built.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = parse_graph(content)?;
    let mut cycles = all_cycles(&graph);
    sort_sequences(&mut cycles);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => write_human(&mut out, &cycles),
        OutputFormat::Json => write_json(&mut out, "cycles", &cycles),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
