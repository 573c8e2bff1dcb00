//! Ciphers command - list the available ciphers.

use anyhow::Result;
use clap::Args;

use uniception::cipher;

use super::{AppContext, CommandExecutor};

/// List the available ciphers with their base, digit width and alphabet.
#[derive(Args, Debug)]
pub struct CiphersCommand {
    /// Print the code point of every digit
    #[arg(long)]
    pub code_points: bool,
}

impl CommandExecutor for CiphersCommand {
    fn execute(&self, _ctx: &AppContext) -> Result<()> {
        println!("Available ciphers:");
        for (idx, c) in cipher::all().iter().enumerate() {
            println!(
                "  {}. {} - {} digits per byte",
                idx + 1,
                c.display_name(),
                c.digit_width()
            );

            if self.code_points {
                let codes: Vec<String> = c
                    .alphabet()
                    .iter()
                    .map(|&ch| format!("U+{:04X}", u32::from(ch)))
                    .collect();
                println!("     {}", codes.join(" "));
            }
        }
        Ok(())
    }
}
