/// Command module for the `primepath` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the raw input text and returns `Ok(())` on success or a
/// [`crate::error::CliError`] on failure.
pub mod cycles;
pub mod inspect;
pub mod paths;
pub mod prime;
pub mod report;

use primepath_core::{FlowGraph, build_graph, parse_edge_list};

use crate::error::CliError;

/// Parses `content` as an edge list and assembles the graph.
///
/// Shared front half of every subcommand. Parse and build failures map to
/// [`CliError::ParseFailed`] and [`CliError::GraphBuildFailed`], both exit
/// code 2.
pub fn parse_graph(content: &str) -> Result<FlowGraph, CliError> {
    let edge_list = parse_edge_list(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;
    build_graph(&edge_list).map_err(|e| CliError::GraphBuildFailed {
        detail: e.to_string(),
    })
}
