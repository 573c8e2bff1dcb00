//! Encode command - hide a message between invisible characters.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use uniception::cipher;
use uniception::{encode_text, parse_prefix, wrap};

use super::{read_stdin, strip_line_ending, AppContext, CommandExecutor};

/// Encode a message into an invisible carrier.
///
/// The output is a single visible prefix character followed by invisible
/// characters. Paste it anywhere; decode it with the same cipher.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Message to encode (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Cipher name, tag (base16) or menu number (defaults to the config value)
    #[arg(short, long)]
    pub cipher: Option<String>,

    /// Visible prefix: a character or U+XXXX (defaults to the config value)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Write the carrier to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let config = ctx.load_config()?;

        let cipher_name = self.cipher.as_deref().unwrap_or(&config.cipher);
        let cipher = cipher::lookup(cipher_name)?;

        let prefix_text = self.prefix.as_deref().unwrap_or(&config.prefix);
        let prefix = parse_prefix(prefix_text)?;
        if prefix.is_none() {
            anyhow::bail!("A visible prefix is required, otherwise the carrier cannot be decoded");
        }

        let message = match &self.message {
            Some(m) => m.clone(),
            None => strip_line_ending(read_stdin().context("Failed to read message from stdin")?),
        };
        if message.is_empty() {
            anyhow::bail!("Nothing to encode");
        }

        let carrier = wrap(prefix, &encode_text(&message, cipher));
        info!(cipher = cipher.name(), chars = carrier.chars().count(), "message encoded");

        match &self.output {
            Some(path) => {
                fs::write(path, &carrier)
                    .with_context(|| format!("Failed to write carrier to {}", path.display()))?;
                eprintln!("Carrier written to {} (cipher: {})", path.display(), cipher.display_name());
            }
            None => println!("{}", carrier),
        }

        Ok(())
    }
}
