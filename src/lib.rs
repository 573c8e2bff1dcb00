//! # Uniception - hide text in plain sight
//!
//! Uniception hides a message inside a carrier string made of invisible
//! Unicode formatting characters (zero-width spaces, joiners and friends).
//! Rendered, the carrier looks like a single visible character; a decoder
//! that knows the cipher recovers the message exactly.
//!
//! ## Overview
//!
//! - The message is converted to UTF-8 bytes
//! - Each byte becomes a fixed number of digits in the cipher's base
//!   (16, 8, 4 or 2)
//! - Each digit is written as one invisible character from the cipher's alphabet
//! - The payload is framed as `prefix + BOUNDARY + payload + BOUNDARY`,
//!   where the boundary is three U+2060 WORD JOINERs
//!
//! ## Not encryption
//!
//! This is obfuscation. Anyone who knows the scheme can read the message,
//! and nothing protects it from tampering. The carrier also does not record
//! which cipher was used, so both sides must agree on it beforehand.
//!
//! ## Example Usage
//!
//! ```rust
//! use uniception::{decode, encode};
//!
//! let carrier = encode("meet at dawn 🌅", "Quaternary Verse", "U+2764").unwrap();
//!
//! // One visible heart, everything after it invisible
//! let cipher = uniception::cipher::lookup("Quaternary Verse").unwrap();
//! assert!(carrier.starts_with('\u{2764}'));
//! assert!(carrier
//!     .chars()
//!     .skip(1)
//!     .all(|c| c == uniception::text::BOUNDARY_CHAR || cipher.alphabet().contains(&c)));
//!
//! let message = decode(&carrier, "Quaternary Verse").unwrap();
//! assert_eq!(message, "meet at dawn 🌅");
//! ```
//!
//! ## Modules
//!
//! - [`cipher`]: The four ciphers and base conversion arithmetic
//! - [`text`]: Carrier framing and prefix parsing
//! - [`encoder`]: Bytes and text to invisible payloads and carriers
//! - [`decoder`]: Payloads and carriers back to bytes and text
//! - [`config`]: CLI defaults stored in `~/.uniception/config.toml`

pub mod cipher;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod text;

// Re-export commonly used types at the crate root
pub use cipher::CipherVariant;
pub use config::{Config, ConfigError};
pub use decoder::{decode, decode_text, decode_to_bytes};
pub use encoder::{encode, encode_bytes, encode_text};
pub use error::{Result, UniceptionError};
pub use text::{parse_carrier, parse_prefix, wrap, ParsedCarrier, BOUNDARY};
