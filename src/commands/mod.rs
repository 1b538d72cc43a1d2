pub mod common;
pub mod config;
pub mod flatten_mods;
pub mod status;
pub mod sync;

pub use config::Config;
pub use flatten_mods::FlattenMods;
pub use status::Status;
pub use sync::Sync;

use std::path::{Path, PathBuf};

/// Process-wide flags shared by every command
#[derive(Debug, Clone)]
pub struct RunContext {
    pub verbose: bool,
    pub dry_run: bool,
    pub config: Option<PathBuf>,
    pub no_config: bool,
}

impl RunContext {
    pub fn new(verbose: bool, dry_run: bool, config: Option<&Path>, no_config: bool) -> Self {
        Self {
            verbose,
            dry_run,
            config: config.map(Path::to_path_buf),
            no_config,
        }
    }
}
