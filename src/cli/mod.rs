//! Command-line interface definitions.

pub mod check;
pub mod classify;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::{Pairing, Selection};

/// Solwatch - Solana wallet trade alerts for Telegram.
#[derive(Parser, Debug)]
#[command(name = "solwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch wallets and relay trade alerts (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Fetch one transaction and print how it classifies
    Classify(ClassifyArgs),
}

/// Subcommands for `solwatch check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `classify` subcommand.
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Transaction signature
    pub signature: String,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override balance pairing (by_mint, positional)
    #[arg(long)]
    pub pairing: Option<Pairing>,

    /// Override candidate selection (last, first, largest)
    #[arg(long)]
    pub selection: Option<Selection>,

    /// Override dust threshold
    #[arg(long)]
    pub dust: Option<Decimal>,
}
