use crate::app::cli::Cli;
use crate::app::exclusion::ExclusionRules;
use crate::app::models::{HarvestConfig, RepositoryConfig, RuntimeConfig};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Repository table and exclusion lists shipped inside the binary.
const BUILTIN_CONFIG: &str = include_str!("defaults.toml");

#[derive(Deserialize, Debug)]
struct ConfigDocument {
    #[serde(default, rename = "repository")]
    repositories: Vec<RepositoryConfig>,
    #[serde(default)]
    exclusions: ExclusionLists,
}

#[derive(Deserialize, Debug, Default)]
struct ExclusionLists {
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    dirs: Vec<String>,
    #[serde(default)]
    test_patterns: Vec<String>,
}

pub fn builtin_config() -> Result<HarvestConfig> {
    parse_config(BUILTIN_CONFIG).context("Built-in configuration is invalid")
}

fn parse_config(content: &str) -> Result<HarvestConfig> {
    let doc: ConfigDocument = toml::from_str(content).context("Failed to parse configuration")?;

    let mut seen = HashSet::new();
    for repo in &doc.repositories {
        if repo.id.is_empty() {
            bail!("Repository with empty id");
        }
        if !seen.insert(repo.id.as_str()) {
            bail!("Duplicate repository id: {}", repo.id);
        }
    }

    let lists = doc.exclusions;
    Ok(HarvestConfig {
        repositories: doc.repositories,
        exclusions: ExclusionRules::new(lists.extensions, lists.dirs, lists.test_patterns),
    })
}

/// Relative paths from the command line are anchored at `current_dir`.
pub fn resolve_runtime(cli: &Cli, current_dir: PathBuf) -> RuntimeConfig {
    let workdir = match &cli.workdir {
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };
    let output_dir = workdir.join(&cli.output);

    RuntimeConfig { workdir, output_dir }
}
