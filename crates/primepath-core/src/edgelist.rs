//! Whitespace-delimited edge-list input format.
//!
//! A document is a flat sequence of unsigned integers separated by any ASCII
//! whitespace (spaces, tabs, and newlines are all equivalent): a vertex
//! count, an edge count, then that many `source target` pairs. Vertex ids
//! are `0..vertex_count`.
//!
//! ```text
//! 3 3
//! 0 1
//! 1 2
//! 2 0
//! ```
//!
//! [`parse_edge_list`] is a pure tokenizer: endpoint values are not
//! range-checked here. [`build_graph`](crate::graph::build_graph) rejects
//! out-of-range endpoints when the graph is assembled.

// ---------------------------------------------------------------------------
// EdgeList
// ---------------------------------------------------------------------------

/// A parsed edge-list document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of vertices; vertex ids are `0..vertex_count`. Always ≥ 1 for
    /// a parsed document.
    pub vertex_count: usize,
    /// Declared `(source, target)` pairs in document order. Parallel edges
    /// and self-loops appear exactly as declared.
    pub edges: Vec<(usize, usize)>,
}

// ---------------------------------------------------------------------------
// EdgeListError
// ---------------------------------------------------------------------------

/// Errors produced while tokenizing an edge-list document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListError {
    /// The stream ended before the named item could be read.
    UnexpectedEnd {
        /// What the parser was trying to read (e.g. `"vertex count"`,
        /// `"target of edge 3"`).
        expected: String,
    },

    /// A token could not be parsed as an unsigned integer.
    ///
    /// Negative numbers land here: vertex and edge counts are unsigned, so a
    /// leading `-` makes the whole token invalid.
    InvalidToken {
        /// The offending token text.
        token: String,
        /// 1-based ordinal of the token in the document.
        position: usize,
    },

    /// The vertex count token parsed as zero; a graph needs at least one
    /// vertex.
    ZeroVertices,

    /// Tokens remained after the declared number of edges was read.
    TrailingInput {
        /// Number of leftover tokens.
        count: usize,
    },
}

impl std::fmt::Display for EdgeListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeListError::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input: expected {expected}")
            }
            EdgeListError::InvalidToken { token, position } => {
                write!(f, "token {position} is not an unsigned integer: {token:?}")
            }
            EdgeListError::ZeroVertices => {
                write!(f, "vertex count must be at least 1")
            }
            EdgeListError::TrailingInput { count } => {
                write!(f, "{count} unexpected token(s) after the last declared edge")
            }
        }
    }
}

impl std::error::Error for EdgeListError {}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Tokenizer cursor over an edge-list document.
struct Tokens<'a> {
    iter: std::str::SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            iter: input.split_ascii_whitespace(),
            position: 0,
        }
    }

    /// Reads the next token as a `usize`, naming `expected` in the error
    /// when the stream ends first.
    fn next_integer(&mut self, expected: &str) -> Result<usize, EdgeListError> {
        let Some(token) = self.iter.next() else {
            return Err(EdgeListError::UnexpectedEnd {
                expected: expected.to_owned(),
            });
        };
        self.position += 1;
        token
            .parse::<usize>()
            .map_err(|_| EdgeListError::InvalidToken {
                token: token.to_owned(),
                position: self.position,
            })
    }

    /// Consumes and counts all remaining tokens.
    fn remaining(&mut self) -> usize {
        self.iter.by_ref().count()
    }
}

/// Parses the textual edge-list format: a vertex count, an edge count, then
/// that many `source target` pairs, all whitespace-delimited.
///
/// The parser reads exactly the declared number of pairs and then requires
/// the stream to be exhausted; leftover tokens are an error rather than
/// silently dropped edges.
///
/// # Errors
///
/// - [`EdgeListError::UnexpectedEnd`] — the stream ends before the header or
///   the declared pairs are complete.
/// - [`EdgeListError::InvalidToken`] — a token is not an unsigned integer.
/// - [`EdgeListError::ZeroVertices`] — the vertex count is `0`.
/// - [`EdgeListError::TrailingInput`] — tokens remain after the last pair.
pub fn parse_edge_list(input: &str) -> Result<EdgeList, EdgeListError> {
    let mut tokens = Tokens::new(input);

    let vertex_count = tokens.next_integer("vertex count")?;
    if vertex_count == 0 {
        return Err(EdgeListError::ZeroVertices);
    }

    let edge_count = tokens.next_integer("edge count")?;

    // The declared count is untrusted input; cap the preallocation.
    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(edge_count.min(1024));
    for ordinal in 1..=edge_count {
        let source = tokens.next_integer(&format!("source of edge {ordinal}"))?;
        let target = tokens.next_integer(&format!("target of edge {ordinal}"))?;
        edges.push((source, target));
    }

    let leftover = tokens.remaining();
    if leftover > 0 {
        return Err(EdgeListError::TrailingInput { count: leftover });
    }

    Ok(EdgeList {
        vertex_count,
        edges,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
