//! Entry point for the `primepath` binary.
//!
//! Parses the command line, reads the input (a file or stdin), and hands the
//! text to the subcommand implementations in [`cmd`]. All failures funnel
//! through [`error::CliError`]: the message goes to stderr and the process
//! exits with the error's code. Success exits with 0.
mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser as _;

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed command line to its subcommand implementation.
///
/// Every subcommand consumes one input and shares the same signature, so
/// dispatch picks the input source and the handler, then runs the shared
/// read-then-handle sequence once.
fn run(cli: &Cli) -> Result<(), CliError> {
    type Handler = fn(&str, &OutputFormat) -> Result<(), CliError>;

    let (file, handler): (&PathOrStdin, Handler) = match &cli.command {
        Command::Paths { file } => (file, cmd::paths::run),
        Command::Cycles { file } => (file, cmd::cycles::run),
        Command::Prime { file } => (file, cmd::prime::run),
        Command::Report { file } => (file, cmd::report::run),
        Command::Inspect { file } => (file, cmd::inspect::run),
    };

    let content = io::read_input(file, cli.max_file_size)?;
    handler(&content, &cli.format)
}
