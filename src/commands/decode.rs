//! Decode command - reveal the message hidden in a carrier.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use uniception::cipher;
use uniception::{decode_text, parse_carrier};

use super::{read_carrier, AppContext, CommandExecutor};

/// Decode a carrier produced by `encode`.
///
/// The carrier does not say which cipher made it; pass the same cipher
/// that was used for encoding. A wrong cipher usually fails with an
/// unexpected character or invalid UTF-8.
///
/// Carrier can be provided as:
/// - Direct text: --carrier "..."
/// - Text file: --carrier-file carrier.txt
/// - Stdin (when neither is given)
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// The full carrier, including prefix and boundaries
    #[arg(long, conflicts_with = "carrier_file")]
    pub carrier: Option<String>,

    /// Read the carrier from a text file
    #[arg(long, conflicts_with = "carrier")]
    pub carrier_file: Option<PathBuf>,

    /// Cipher used for encoding (defaults to the config value)
    #[arg(short, long)]
    pub cipher: Option<String>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let config = ctx.load_config()?;
        let cipher_name = self.cipher.as_deref().unwrap_or(&config.cipher);
        let cipher = cipher::lookup(cipher_name)?;

        let input = read_carrier(self.carrier.as_deref(), self.carrier_file.as_deref())?;
        let parsed = parse_carrier(&input)?;
        let message = decode_text(parsed.payload, cipher)
            .with_context(|| format!("Could not decode with cipher '{}'", cipher.name()))?;

        if ctx.verbose {
            eprintln!("Cipher: {}", cipher.display_name());
            eprintln!("Prefix: {} (U+{:04X})", parsed.prefix, u32::from(parsed.prefix));
            if !parsed.suffix.is_empty() {
                eprintln!("Ignored trailing text: {:?}", parsed.suffix);
            }
        }

        println!("{}", message);
        Ok(())
    }
}
