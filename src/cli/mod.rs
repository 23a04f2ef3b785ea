// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
/// On invalid arguments or `--help`, clap prints its message and exits
/// the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
