use crate::app::exclusion::ExclusionRules;
use crate::app::report::RepoStats;
use serde::Deserialize;
use std::path::PathBuf;

/// One repository to harvest, keyed by the name of its directory.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RepositoryConfig {
    pub id: String,
    /// Subdirectories walked recursively, in order.
    #[serde(default)]
    pub target_dirs: Vec<String>,
    /// Root-level files always taken when present.
    #[serde(default)]
    pub extra_files: Vec<String>,
    /// Prefixes or suffixes selecting further root-level files.
    #[serde(default)]
    pub file_patterns: Vec<String>,
}

impl RepositoryConfig {
    /// Whether a file sitting directly in the repository root is picked up.
    /// The exclusion rules do not apply here.
    pub fn wants_root_file(&self, name: &str) -> bool {
        self.extra_files.iter().any(|extra| extra == name)
            || self
                .file_patterns
                .iter()
                .any(|pat| name.ends_with(pat.as_str()) || name.starts_with(pat.as_str()))
    }
}

/// Everything that decides what gets collected. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct HarvestConfig {
    pub repositories: Vec<RepositoryConfig>,
    pub exclusions: ExclusionRules,
}

/// Paths resolved from the command line.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory holding one subdirectory per repository.
    pub workdir: PathBuf,
    pub output_dir: PathBuf,
}

/// What happened when a file was offered to the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Copied,
    /// The flattened name was already taken; first writer wins.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryOutcome {
    Missing,
    Harvested(RepoStats),
}
