use vendsync::error::Result;
use vendsync::reconcile::{ReconcileEngine, ReconcileReporter};

use super::{RunContext, common};
use crate::cli::ReconcileArgs;

pub struct Status;

impl Status {
    /// Preview dispositions without touching the filesystem
    pub fn execute(args: &ReconcileArgs, ctx: &RunContext) -> Result<()> {
        let run = common::resolve(args, ctx, true)?;

        println!(
            "Previewing reconciliation: {} -> {} (no changes will be made)",
            run.source.display(),
            run.dest.display()
        );

        let engine = ReconcileEngine::new(run.options);
        let summary = engine.run(&run.source, &run.dest)?;

        print!("{}", ReconcileReporter::render(&summary));

        Ok(())
    }
}
