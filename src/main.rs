//! Uniception - hide text in plain sight
//!
//! A CLI tool that tucks messages between invisible Unicode characters.
//! Only a single visible prefix character shows; the rest is whitespace
//! that most renderers draw as nothing at all.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use commands::{
    AppContext, CiphersCommand, CommandExecutor, ConfigCommand, DecodeCommand, EncodeCommand,
    InspectCommand,
};
use uniception::Config;

/// Uniception - hide text in plain sight
///
/// Encodes messages as invisible Unicode characters framed by word joiners.
/// This is obfuscation, not encryption: anyone with this tool can read them.
#[derive(Parser)]
#[command(name = "uniception")]
#[command(version)]
#[command(about = "Hide messages between invisible Unicode characters")]
#[command(long_about = None)]
struct Cli {
    /// Path to the config file (default: ~/.uniception/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (debug logging and frame details)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message into an invisible carrier
    Encode(EncodeCommand),

    /// Decode the message hidden in a carrier
    Decode(DecodeCommand),

    /// Show the frame of a carrier without decoding it
    Inspect(InspectCommand),

    /// List the available ciphers
    Ciphers(CiphersCommand),

    /// Show or create the defaults file
    Config(ConfigCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Encode(cmd) => cmd,
            Commands::Decode(cmd) => cmd,
            Commands::Inspect(cmd) => cmd,
            Commands::Ciphers(cmd) => cmd,
            Commands::Config(cmd) => cmd,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    let ctx = AppContext {
        config_path,
        verbose: cli.verbose,
    };

    cli.command.executor().execute(&ctx)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
