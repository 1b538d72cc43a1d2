//! Configuration file discovery
//!
//! Precedence: CLI flag, then `.vendsync.toml` found walking up from the
//! current directory, then the XDG config directory. Only the
//! highest-precedence file is used; there is no cross-file merging.

use std::path::{Path, PathBuf};

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Name of the project-local config file searched for upward from CWD
    pub const PROJECT_FILE: &'static str = ".vendsync.toml";

    /// Discover the highest-precedence configuration file
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_path
            && path.is_file()
        {
            return Some(path.to_path_buf());
        }

        Self::find_project_file().or_else(Self::find_global_config)
    }

    /// Find `.vendsync.toml` in the current directory or any parent
    fn find_project_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let candidate = current.join(Self::PROJECT_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Find the global config in the XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global = dirs::config_dir()?.join("vendsync").join("config.toml");

        if global.is_file() { Some(global) } else { None }
    }
}
