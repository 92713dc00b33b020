//! Command-line interface definitions.
//!
//! Defines the CLI structure for the aave-toolkit binary using `clap`.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Number;

use crate::domain::LendingAction;

/// Aave v3 lending actions served to a toolkit host
#[derive(Parser, Debug)]
#[command(name = "aave-toolkit")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Whether stdout output should be colored.
    #[must_use]
    pub fn enabled(&self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to the toolkit host and serve lending actions
    Run(RunArgs),

    /// Run one lending action locally and print its result
    Invoke(InvokeArgs),

    /// List supported tokens and their contract addresses
    Tokens(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `aave-toolkit check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and required environment variables
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `invoke` subcommand.
#[derive(Parser, Debug)]
pub struct InvokeArgs {
    /// Action to run: supply, borrow, repay or withdraw
    pub action: LendingAction,

    /// Token symbol (case-insensitive)
    #[arg(short, long)]
    pub token: String,

    /// Amount of the asset
    #[arg(short, long, value_parser = parse_amount)]
    pub amount: Number,

    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn parse_amount(raw: &str) -> Result<Number, String> {
    serde_json::from_str::<Number>(raw.trim()).map_err(|_| format!("'{raw}' is not a number"))
}
