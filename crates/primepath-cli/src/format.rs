//! Shared output helpers for the sequence-producing subcommands.
//!
//! Every subcommand renders vertex sequences the same way: human mode writes
//! one sequence per line with vertices separated by ` -> `; JSON mode emits a
//! single object holding the sequences and their count. Presentation order
//! is shared too: shorter sequences first, ties broken by the first
//! differing vertex.

use primepath_core::VertexId;

/// Sorts sequences into presentation order: by length, then by the first
/// differing vertex.
pub fn sort_sequences(sequences: &mut [Vec<VertexId>]) {
    sequences.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
}

/// Renders one sequence with its vertices separated by ` -> `.
pub fn join_vertices(sequence: &[VertexId]) -> String {
    sequence
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Writes sequences in human-readable format: each sequence on one line.
pub fn write_human<W: std::io::Write>(
    w: &mut W,
    sequences: &[Vec<VertexId>],
) -> std::io::Result<()> {
    for sequence in sequences {
        writeln!(w, "{}", join_vertices(sequence))?;
    }
    Ok(())
}

/// Converts sequences to a JSON array of arrays of vertex numbers.
pub fn sequences_value(sequences: &[Vec<VertexId>]) -> serde_json::Value {
    serde_json::Value::Array(
        sequences
            .iter()
            .map(|sequence| {
                serde_json::Value::Array(
                    sequence
                        .iter()
                        .map(|&vertex| serde_json::Value::Number(vertex.into()))
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Writes sequences as a JSON object `{"<key>": [[...], ...], "count": N}`.
pub fn write_json<W: std::io::Write>(
    w: &mut W,
    key: &str,
    sequences: &[Vec<VertexId>],
) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert(key.to_owned(), sequences_value(sequences));
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(sequences.len().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    writeln!(w, "{json}")
}
