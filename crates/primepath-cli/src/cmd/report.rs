//! Implementation of `primepath report <file>`.
//!
//! Parses an edge-list file, builds the directed graph, and prints the full
//! coverage summary: the combined pool of simple paths and simple cycles,
//! then the prime paths, each section with its total.
//!
//! Output (human mode): a `All paths and cycles:` section and a
//! `All Prime paths:` section, each listing one sequence per line followed
//! by a `Total of ...` line and a blank separator line.
//! Output (JSON mode): a single object with `all_paths_and_cycles`,
//! `total_paths_and_cycles`, `prime_paths` and `total_prime_paths` fields.
//!
//! Exit codes: 0 = success, 2 = parse/build failure.
use primepath_core::{VertexId, all_cycles, all_paths, retain_maximal};

use crate::OutputFormat;
use crate::cmd::parse_graph;
use crate::error::CliError;
use crate::format::{sequences_value, sort_sequences, write_human};

/// Runs the `report` command.
///
/// The prime set is computed from the unsorted pool; both are then sorted
/// shortest-first for presentation.
///
/// # Errors
///
/// [`CliError`] exit code 2 if the input cannot be parsed or the graph
/// cannot be built.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = parse_graph(content)?;
    let mut pool = all_paths(&graph);
    pool.extend(all_cycles(&graph));
    let mut prime = retain_maximal(&pool);
    sort_sequences(&mut pool);
    sort_sequences(&mut prime);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &pool, &prime),
        OutputFormat::Json => print_json(&mut out, &pool, &prime),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes both report sections with their totals.
fn print_human<W: std::io::Write>(
    w: &mut W,
    pool: &[Vec<VertexId>],
    prime: &[Vec<VertexId>],
) -> std::io::Result<()> {
    writeln!(w, "All paths and cycles:")?;
    write_human(w, pool)?;
    writeln!(w, "Total of paths and cycles: {}\n", pool.len())?;

    writeln!(w, "All Prime paths:")?;
    write_human(w, prime)?;
    writeln!(w, "Total of Prime paths: {}\n", prime.len())
}

/// Writes the report as a single JSON object.
fn print_json<W: std::io::Write>(
    w: &mut W,
    pool: &[Vec<VertexId>],
    prime: &[Vec<VertexId>],
) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert("all_paths_and_cycles".to_owned(), sequences_value(pool));
    obj.insert(
        "total_paths_and_cycles".to_owned(),
        serde_json::Value::Number(pool.len().into()),
    );
    obj.insert("prime_paths".to_owned(), sequences_value(prime));
    obj.insert(
        "total_prime_paths".to_owned(),
        serde_json::Value::Number(prime.len().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    writeln!(w, "{json}")
}
