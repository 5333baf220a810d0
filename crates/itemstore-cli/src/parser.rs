//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the in-memory item store.
#[derive(Parser)]
#[command(name = "itemstore")]
#[command(about = "In-memory item store with a JSON HTTP API")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["itemstore", "--verbose", "serve"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Serve(_))));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["itemstore"]);
        assert!(cli.command.is_none());
    }
}
