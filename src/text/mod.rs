//! Text-level pieces of the carrier format.
//!
//! This module provides:
//! - Framing of the invisible payload between boundary markers
//! - Parsing of the visible prefix notation (`U+XXXX` or a literal character)

pub mod carrier;
pub mod prefix;

pub use carrier::{parse_carrier, wrap, ParsedCarrier, BOUNDARY, BOUNDARY_CHAR};
pub use prefix::parse_prefix;
