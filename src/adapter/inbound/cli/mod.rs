//! CLI module graph.

pub mod check;
pub mod command;
pub mod invoke;
pub mod output;
pub mod run;
pub mod tokens;

use command::{CheckCommand, Cli, Commands};
use output::OutputConfig;

use crate::error::Result;

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        cli.color.enabled(),
    ));

    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Invoke(args) => invoke::execute(&args).await,
        Commands::Tokens(args) => tokens::list(&args),
        Commands::Check(CheckCommand::Config(args)) => check::config(&args),
    }
}
