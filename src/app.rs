// Declare modules
pub mod cli;
pub mod collector;
pub mod config;
pub mod exclusion;
pub mod models;
pub mod naming;
pub mod output;
pub mod report;
pub mod repository;

use anyhow::{Context, Result};
use std::env;

use self::cli::Cli;
use self::config::{builtin_config, resolve_runtime};
use self::models::{HarvestConfig, RuntimeConfig};
use self::output::OutputDir;
use self::report::RunReport;
use self::repository::RepositoryProcessor;

/// Resolves configuration, harvests every repository and prints the summary.
pub fn run(args: Cli) -> Result<()> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let runtime = resolve_runtime(&args, current_dir);
    let config = builtin_config()?;

    let report = harvest(&config, &runtime)?;

    let missing = report.missing();
    if missing.len() == config.repositories.len() && !missing.is_empty() {
        log::warn!("⚠️ None of the configured repositories were found in {}", runtime.workdir.display());
    }

    if !args.quiet {
        println!(
            "All files successfully copied to '{}' folder!",
            args.output.display()
        );
        println!("{}", report.render());
    }

    Ok(())
}

/// Resets the output directory, then processes each repository in order.
/// A failure midway leaves whatever was already copied in place.
pub fn harvest(config: &HarvestConfig, runtime: &RuntimeConfig) -> Result<RunReport> {
    let output = OutputDir::reset(&runtime.output_dir)?;
    let processor = RepositoryProcessor::new(&runtime.workdir, &config.exclusions, &output);

    let mut report = RunReport::new(output.path().to_path_buf());
    for repo in &config.repositories {
        let outcome = processor
            .process(repo)
            .with_context(|| format!("Failed to harvest repository {}", repo.id))?;
        report.push(&repo.id, outcome);
    }

    log::info!(
        "Harvested {} files into {}",
        report.totals().copied,
        report.output_dir.display()
    );
    Ok(report)
}
