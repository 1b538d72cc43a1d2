mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::RunContext;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    if cli.verbose {
        println!("Verbose mode enabled");
        println!("Dry run: {}", cli.dry_run);
    }

    let ctx = RunContext::new(cli.verbose, cli.dry_run, cli.config.as_deref(), cli.no_config);

    match &cli.command {
        Commands::Sync { args } => {
            let passed =
                commands::Sync::execute(args, &ctx).context("Failed to execute sync command")?;
            if !passed {
                std::process::exit(1);
            }
        }
        Commands::Status { args } => {
            commands::Status::execute(args, &ctx).context("Failed to execute status command")?;
        }
        Commands::FlattenMods { root } => {
            let passed = commands::FlattenMods::execute(root.as_deref(), &ctx)
                .context("Failed to execute flatten-mods command")?;
            if !passed {
                std::process::exit(1);
            }
        }
        Commands::Config => {
            commands::Config::execute(&ctx).context("Failed to execute config command")?;
        }
    }

    Ok(())
}
