use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vendsync::config::SuffixPolicy;

/// Vendored-Tree Reconciliation Tool
///
/// Migrate files from an upstream vendored tree into a local fork. Files the
/// fork already has are never overwritten; the incoming copy is moved to a
/// marker-suffixed shadow name for manual review
#[derive(Parser, Debug)]
#[command(name = "vendsync")]
#[command(long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preview changes without executing (dry-run)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile the source tree into the destination tree
    Sync {
        #[command(flatten)]
        args: ReconcileArgs,
    },

    /// Preview dispositions without touching the filesystem
    Status {
        #[command(flatten)]
        args: ReconcileArgs,
    },

    /// Rename mod.rs files after their parent directory (foo/mod.rs -> foo.rs)
    FlattenMods {
        /// Root of the tree to flatten (falls back to the config source root)
        root: Option<PathBuf>,
    },

    /// Show the effective configuration and where it came from
    Config,
}

/// Arguments shared by `sync` and `status`
#[derive(Args, Debug, Clone)]
pub struct ReconcileArgs {
    /// Source root: the tree being migrated from
    pub source: Option<PathBuf>,

    /// Destination root: the tree being migrated into
    pub dest: Option<PathBuf>,

    /// Marker token carried by shadow filenames
    #[arg(long, value_name = "TOKEN")]
    pub marker: Option<String>,

    /// Shadow-name convention
    #[arg(long, value_enum)]
    pub suffix: Option<SuffixArg>,

    /// Extension recognized by the insert convention
    #[arg(long, value_name = "EXT")]
    pub target_ext: Option<String>,

    /// Move whole subdirectories when the destination counterpart is absent
    #[arg(long)]
    pub move_dirs: bool,

    /// Treat a run with conflicts as failed (non-zero exit)
    #[arg(long)]
    pub fail_on_conflict: bool,

    /// Print a unified diff for pairs with differing content
    #[arg(long)]
    pub diff: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuffixArg {
    /// Insert the marker before the recognized extension (b.rs -> b.new.rs)
    Insert,
    /// Append the marker after the full filename (b.rs -> b.rs.new)
    Append,
}

impl SuffixArg {
    /// Convert to the library-level policy
    pub const fn policy(self) -> SuffixPolicy {
        match self {
            Self::Insert => SuffixPolicy::Insert,
            Self::Append => SuffixPolicy::Append,
        }
    }
}
