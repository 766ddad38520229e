//! langutils command-line interface

use anyhow::Result;
use clap::Parser;
use langutils_cli::commands::Commands;

/// Encoding- and language-aware character classification
#[derive(Debug, Parser)]
#[command(name = "langutils", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
