//! Configuration file parsing and management
//!
//! This module handles:
//! - Config file discovery (CLI flag, project tree, XDG directory)
//! - TOML parsing with serde
//! - Marker token validation
//! - Gitignore-style pattern matching for source filtering
//!
//! Command-line flags always take precedence over config file values;
//! that merge happens in the command layer, not here.

mod discovery;
mod patterns;
mod types;
mod validation;

pub use discovery::ConfigDiscovery;
pub use patterns::PatternSet;
pub use types::{Config, SuffixPolicy};
pub use validation::validate_marker;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;

/// Coordinates config discovery and parsing
pub struct ConfigManager;

impl ConfigManager {
    /// Load the highest-precedence config file, if any
    ///
    /// Returns the parsed config together with the path it came from,
    /// or defaults when no config file was found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested config file is missing
    /// or if a discovered file is not valid TOML.
    pub fn load(cli_path: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
        if let Some(path) = cli_path
            && !path.is_file()
        {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let Some(path) = ConfigDiscovery::discover(cli_path) else {
            return Ok((Config::default(), None));
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok((config, Some(path)))
    }
}
