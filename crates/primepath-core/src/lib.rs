#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod edgelist;
pub mod graph;

pub use edgelist::{EdgeList, EdgeListError, parse_edge_list};
pub use graph::{
    FlowGraph, GraphBuildError, VertexId, all_cycles, all_paths, build_graph, is_subpath,
    prime_paths, retain_maximal,
};

/// Returns the current version of the primepath-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
