use crate::app::collector::TreeCollector;
use crate::app::exclusion::ExclusionRules;
use crate::app::models::{RepositoryConfig, RepositoryOutcome};
use crate::app::naming::{file_name_text, root_target_name};
use crate::app::output::OutputDir;
use crate::app::report::RepoStats;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Harvests one repository: its target directories, then its root-level extras.
pub struct RepositoryProcessor<'a> {
    workdir: &'a Path,
    collector: TreeCollector<'a>,
    output: &'a OutputDir,
}

impl<'a> RepositoryProcessor<'a> {
    pub fn new(workdir: &'a Path, rules: &'a ExclusionRules, output: &'a OutputDir) -> Self {
        Self {
            workdir,
            collector: TreeCollector::new(rules, output),
            output,
        }
    }

    pub fn process(&self, repo: &RepositoryConfig) -> Result<RepositoryOutcome> {
        let repo_root = self.workdir.join(&repo.id);
        if !repo_root.is_dir() {
            log::warn!("Repository {} not found, skipping...", repo.id);
            return Ok(RepositoryOutcome::Missing);
        }

        log::info!("Processing repository: {}", repo.id);
        let mut stats = RepoStats::default();

        for target in &repo.target_dirs {
            let dir = repo_root.join(target);
            if !dir.is_dir() {
                log::debug!("{}: no {} directory", repo.id, target);
                continue;
            }
            stats.merge(self.collector.collect(&dir, &dir, &repo.id)?);
        }

        stats.merge(self.collect_root_files(&repo_root, repo)?);
        Ok(RepositoryOutcome::Harvested(stats))
    }

    /// Immediate files of the repository root picked by name or pattern.
    fn collect_root_files(&self, repo_root: &Path, repo: &RepositoryConfig) -> Result<RepoStats> {
        let mut stats = RepoStats::default();

        let mut entries = fs::read_dir(repo_root)
            .with_context(|| format!("Failed to list repository root {:?}", repo_root))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to list repository root {:?}", repo_root))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            // Follows symlinks, so a linked file is copied as its target's contents.
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let raw_name = entry.file_name();
            let filename = file_name_text(&raw_name);
            if !repo.wants_root_file(&filename) {
                continue;
            }

            let name = root_target_name(&repo.id, &filename);
            stats.record(self.output.place(&path, &name)?);
        }

        Ok(stats)
    }
}
