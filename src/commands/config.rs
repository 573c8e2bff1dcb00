//! Config command - show or create the defaults file.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use uniception::Config;

use super::{AppContext, CommandExecutor};

/// Manage the defaults used when --cipher or --prefix are omitted.
///
/// Defaults are stored in ~/.uniception/config.toml unless --config
/// points elsewhere.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a config file with the built-in defaults
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match &self.action {
            ConfigAction::Show => show_config(ctx),
            ConfigAction::Init(args) => init_config(ctx, args),
        }
    }
}

fn show_config(ctx: &AppContext) -> Result<()> {
    let config = ctx.load_config()?;
    let source = if ctx.config_path.exists() {
        ctx.config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", ctx.config_path.display())
    };

    println!("Config: {}", source);
    println!("  cipher = {}", config.cipher);
    println!("  prefix = {}", config.prefix);
    Ok(())
}

fn init_config(ctx: &AppContext, args: &ConfigInitArgs) -> Result<()> {
    if ctx.config_path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            ctx.config_path.display()
        );
    }

    Config::default()
        .save_to(&ctx.config_path)
        .with_context(|| format!("Failed to write config to {}", ctx.config_path.display()))?;

    println!("Config written to {}", ctx.config_path.display());
    Ok(())
}
