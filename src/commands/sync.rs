use vendsync::error::Result;
use vendsync::reconcile::{ReconcileEngine, ReconcileReporter};

use super::{RunContext, common};
use crate::cli::ReconcileArgs;

pub struct Sync;

impl Sync {
    /// Run the reconciliation and print the report
    ///
    /// Returns whether the run passed the configured exit policy: zero
    /// errors, and zero conflicts when `--fail-on-conflict` is set.
    pub fn execute(args: &ReconcileArgs, ctx: &RunContext) -> Result<bool> {
        let run = common::resolve(args, ctx, false)?;

        if ctx.verbose {
            println!("Source: {}", run.source.display());
            println!("Destination: {}", run.dest.display());
            println!("Marker: {}", run.options.marker);
        }
        if run.options.dry_run {
            println!("Dry run: no changes will be made");
        }

        let engine = ReconcileEngine::new(run.options);
        let summary = engine.run(&run.source, &run.dest)?;

        print!("{}", ReconcileReporter::render(&summary));

        Ok(summary.is_success() && !(run.fail_on_conflict && summary.conflicts > 0))
    }
}
