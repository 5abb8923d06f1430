//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits plain text to stdout, one sequence per line. `Json` emits a
/// single structured object.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `primepath` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Enumerate all simple paths between every ordered vertex pair.
    Paths {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Enumerate all simple cycles through every start vertex.
    Cycles {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Compute the prime paths: pool entries contained in no other entry.
    Prime {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the combined path-and-cycle pool followed by the prime paths.
    Report {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print summary statistics for a graph.
    Inspect {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `primepath` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "primepath",
    version,
    about = "Prime path coverage CLI",
    long_about = "Prime path coverage command-line tool.\n\
                  Enumerates simple paths and simple cycles of a directed graph\n\
                  described by a whitespace-separated edge list, and reduces them\n\
                  to the prime paths used for structural coverage criteria."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `PRIMEPATH_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MB).
    #[arg(
        long,
        global = true,
        env = "PRIMEPATH_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,
}
