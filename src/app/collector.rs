use crate::app::exclusion::ExclusionRules;
use crate::app::naming::{file_name_text, target_name};
use crate::app::output::OutputDir;
use crate::app::report::RepoStats;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::path::Path;

/// Walks a target directory and flattens every surviving file into the output.
pub struct TreeCollector<'a> {
    rules: &'a ExclusionRules,
    output: &'a OutputDir,
}

impl<'a> TreeCollector<'a> {
    pub fn new(rules: &'a ExclusionRules, output: &'a OutputDir) -> Self {
        Self { rules, output }
    }

    /// Copies every non-excluded file under `start_dir`. Names are computed
    /// relative to `base_dir`. Symlinked files are copied through; symlinked
    /// directories are not descended. Any walk error aborts the collection.
    pub fn collect(&self, base_dir: &Path, start_dir: &Path, repository_id: &str) -> Result<RepoStats> {
        let mut stats = RepoStats::default();

        // Plain traversal: no gitignore handling, hidden files included,
        // excluded directory names pruned before descending.
        let pruning = self.rules.clone();
        let walker = WalkBuilder::new(start_dir)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                entry.depth() == 0 || !is_dir || !pruning.is_excluded_dir_name(entry.file_name())
            })
            .build();

        for result in walker {
            let entry =
                result.with_context(|| format!("Failed to walk {}", start_dir.display()))?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let file_dir = path.parent().unwrap_or(start_dir);
            let relative_dir = diff_paths(file_dir, base_dir).unwrap_or_default();
            if self.rules.is_excluded_path(&relative_dir) {
                log::trace!("Skipping {} (excluded directory)", path.display());
                continue;
            }

            let filename = file_name_text(entry.file_name());
            if self.rules.is_excluded_file(&filename) {
                log::debug!("Skipping {} (excluded file)", path.display());
                continue;
            }

            let name = target_name(repository_id, base_dir, file_dir, &filename);
            stats.record(self.output.place(path, &name)?);
        }

        Ok(stats)
    }
}
