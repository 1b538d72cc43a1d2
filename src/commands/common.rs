//! Shared resolution from CLI arguments and config file to engine options

use std::path::PathBuf;

use vendsync::config::{Config, ConfigManager};
use vendsync::error::{ReconcileError, Result};
use vendsync::reconcile::ReconcileOptions;

use super::RunContext;
use crate::cli::{ReconcileArgs, SuffixArg};

/// A fully resolved run: roots, engine options, and the exit policy
pub struct ResolvedRun {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub options: ReconcileOptions,
    pub fail_on_conflict: bool,
}

/// Merge CLI arguments over config file values
///
/// `force_dry_run` is set by `status`, which never mutates.
pub fn resolve(args: &ReconcileArgs, ctx: &RunContext, force_dry_run: bool) -> Result<ResolvedRun> {
    let (config, config_path) = load_config(ctx)?;

    if ctx.verbose && let Some(path) = &config_path {
        println!("Using config file: {}", path.display());
    }

    let source = args
        .source
        .clone()
        .or_else(|| config.source.clone())
        .ok_or(ReconcileError::MissingRoot("source"))?;
    let dest = args
        .dest
        .clone()
        .or_else(|| config.dest.clone())
        .ok_or(ReconcileError::MissingRoot("destination"))?;

    let defaults = ReconcileOptions::default();
    let options = ReconcileOptions {
        marker: args
            .marker
            .clone()
            .or_else(|| config.marker.clone())
            .unwrap_or(defaults.marker),
        suffix: args
            .suffix
            .map(SuffixArg::policy)
            .or(config.suffix)
            .unwrap_or(defaults.suffix),
        target_ext: args
            .target_ext
            .clone()
            .or_else(|| config.target_ext.clone())
            .unwrap_or(defaults.target_ext),
        move_dirs: args.move_dirs || config.move_dirs,
        dry_run: force_dry_run || ctx.dry_run || config.dry_run,
        show_diff: args.diff,
        ignore: config.ignore,
        include: config.include,
    };

    Ok(ResolvedRun {
        source,
        dest,
        options,
        fail_on_conflict: args.fail_on_conflict || config.fail_on_conflict,
    })
}

/// Load the config file honoring `--config` / `--no-config`
pub fn load_config(ctx: &RunContext) -> Result<(Config, Option<PathBuf>)> {
    if ctx.no_config {
        return Ok((Config::default(), None));
    }

    ConfigManager::load(ctx.config.as_deref())
}
