use std::path::Path;

use vendsync::error::{ReconcileError, Result};
use vendsync::reconcile::{FlattenReporter, ModFlattener};

use super::{RunContext, common};

pub struct FlattenMods;

impl FlattenMods {
    /// Flatten the tree and print the report
    ///
    /// Returns whether the run finished without recorded errors.
    pub fn execute(root: Option<&Path>, ctx: &RunContext) -> Result<bool> {
        let (config, _) = common::load_config(ctx)?;

        let root = root
            .map(Path::to_path_buf)
            .or_else(|| config.source.clone())
            .ok_or(ReconcileError::MissingRoot("source"))?;

        let dry_run = ctx.dry_run || config.dry_run;
        if ctx.verbose {
            println!("Flattening: {}", root.display());
        }
        if dry_run {
            println!("Dry run: no changes will be made");
        }

        let summary = ModFlattener::new(dry_run).run(&root)?;

        print!("{}", FlattenReporter::render(&summary));

        Ok(summary.is_success())
    }
}
