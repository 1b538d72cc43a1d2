use vendsync::error::Result;
use vendsync::reconcile::ReconcileOptions;

use super::{RunContext, common};

pub struct Config;

impl Config {
    /// Show the effective configuration and where it came from
    pub fn execute(ctx: &RunContext) -> Result<()> {
        if ctx.no_config {
            println!("Config files disabled (--no-config); using built-in defaults");
        }

        let (config, path) = common::load_config(ctx)?;

        match path {
            Some(path) => println!("Config file: {}", path.display()),
            None => println!("Config file: (none found, using defaults)"),
        }

        let defaults = ReconcileOptions::default();
        println!(
            "Source root: {}",
            config
                .source
                .as_deref()
                .map_or("(unset)".to_string(), |p| p.display().to_string())
        );
        println!(
            "Destination root: {}",
            config
                .dest
                .as_deref()
                .map_or("(unset)".to_string(), |p| p.display().to_string())
        );
        println!(
            "Marker: {}",
            config.marker.as_deref().unwrap_or(&defaults.marker)
        );
        println!("Suffix policy: {:?}", config.suffix.unwrap_or(defaults.suffix));
        println!(
            "Target extension: {}",
            config.target_ext.as_deref().unwrap_or(&defaults.target_ext)
        );
        println!("Move directories: {}", config.move_dirs);
        println!("Fail on conflict: {}", config.fail_on_conflict);
        println!("Ignore patterns: {:?}", config.ignore);
        println!("Include patterns: {:?}", config.include);

        Ok(())
    }
}
