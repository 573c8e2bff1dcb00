//! Inspect command - show the frame of a carrier without decoding it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use uniception::cipher;
use uniception::parse_carrier;

use super::{read_carrier, AppContext, CommandExecutor};

/// Show the prefix, payload size and suffix of a carrier.
///
/// Lists the ciphers whose alphabet covers every payload character and
/// whose digit width divides the payload length. Several can match, since
/// the smaller alphabets are subsets of Hex Whisper's.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// The full carrier, including prefix and boundaries
    #[arg(long, conflicts_with = "carrier_file")]
    pub carrier: Option<String>,

    /// Read the carrier from a text file
    #[arg(long, conflicts_with = "carrier")]
    pub carrier_file: Option<PathBuf>,
}

impl CommandExecutor for InspectCommand {
    fn execute(&self, _ctx: &AppContext) -> Result<()> {
        let input = read_carrier(self.carrier.as_deref(), self.carrier_file.as_deref())?;
        let parsed = parse_carrier(&input)?;
        let payload_len = parsed.payload.chars().count();

        println!("Carrier Frame");
        println!("=============");
        println!("  Prefix: {} (U+{:04X})", parsed.prefix, u32::from(parsed.prefix));
        println!("  Payload: {} code points", payload_len);
        if parsed.suffix.is_empty() {
            println!("  Suffix: (none)");
        } else {
            println!("  Suffix: {:?}", parsed.suffix);
        }

        println!();
        println!("Compatible ciphers:");
        let mut any = false;
        for c in cipher::all() {
            let fits_alphabet = parsed.payload.chars().all(|ch| c.digit_for(ch).is_some());
            if fits_alphabet && payload_len % c.digit_width() == 0 {
                println!("  {} -> {} bytes", c.display_name(), payload_len / c.digit_width());
                any = true;
            }
        }
        if !any {
            println!("  (none - payload does not match any cipher)");
        }

        Ok(())
    }
}
