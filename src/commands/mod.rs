//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! This provides clean separation of concerns and makes adding new commands easy.

mod ciphers;
mod config;
mod decode;
mod encode;
mod inspect;

pub use ciphers::CiphersCommand;
pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use uniception::Config;

/// State shared by all commands, resolved from global flags.
pub struct AppContext {
    /// Config file in use (`--config` or `~/.uniception/config.toml`).
    pub config_path: PathBuf,
    /// `--verbose` was given.
    pub verbose: bool,
}

impl AppContext {
    /// Loads the config file, falling back to defaults when it is missing.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path)
            .with_context(|| format!("Failed to load config from {}", self.config_path.display()))
    }
}

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Resolves a carrier from `--carrier`, `--carrier-file` or stdin.
///
/// Terminals and editors append a newline to pasted or saved text; one
/// trailing line ending is dropped from file and stdin input.
pub(crate) fn read_carrier(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t.to_string());
    }

    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read carrier file: {}", path.display()))?,
        None => read_stdin().context("Failed to read carrier from stdin")?,
    };

    Ok(strip_line_ending(raw))
}

pub(crate) fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

pub(crate) fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_line_ending("abc".to_string()), "abc");
    }

    #[test]
    fn test_read_carrier_prefers_text() {
        let carrier = read_carrier(Some("x\n"), None).unwrap();
        assert_eq!(carrier, "x\n");
    }

    #[test]
    fn test_read_carrier_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carrier.txt");
        fs::write(&path, "carrier\n").unwrap();

        assert_eq!(read_carrier(None, Some(&path)).unwrap(), "carrier");
    }

    #[test]
    fn test_read_carrier_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(read_carrier(None, Some(&path)).is_err());
    }
}
