use crate::app::models::{Placement, RepositoryOutcome};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepoStats {
    pub copied: usize,
    /// Files whose flattened name was already taken.
    pub skipped: usize,
}

impl RepoStats {
    pub fn record(&mut self, placement: Placement) {
        match placement {
            Placement::Copied => self.copied += 1,
            Placement::Skipped => self.skipped += 1,
        }
    }

    pub fn merge(&mut self, other: RepoStats) {
        self.copied += other.copied;
        self.skipped += other.skipped;
    }
}

/// Per-repository results of one run, in processing order.
#[derive(Debug)]
pub struct RunReport {
    pub output_dir: PathBuf,
    pub repositories: Vec<(String, RepositoryOutcome)>,
}

impl RunReport {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            repositories: Vec::new(),
        }
    }

    pub fn push(&mut self, id: &str, outcome: RepositoryOutcome) {
        self.repositories.push((id.to_string(), outcome));
    }

    pub fn totals(&self) -> RepoStats {
        let mut totals = RepoStats::default();
        for (_, outcome) in &self.repositories {
            if let RepositoryOutcome::Harvested(stats) = outcome {
                totals.merge(*stats);
            }
        }
        totals
    }

    pub fn missing(&self) -> Vec<&str> {
        self.repositories
            .iter()
            .filter(|(_, outcome)| *outcome == RepositoryOutcome::Missing)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn render(&self) -> String {
        let width = self
            .repositories
            .iter()
            .map(|(id, _)| id.len())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for (id, outcome) in &self.repositories {
            let line = match outcome {
                RepositoryOutcome::Missing => "not found".to_string(),
                RepositoryOutcome::Harvested(stats) => describe(stats),
            };
            output.push_str(&format!("  {:<width$}  {}\n", id, line, width = width));
        }

        output.push_str(&format!("Total: {}", describe(&self.totals())));
        output
    }
}

fn describe(stats: &RepoStats) -> String {
    if stats.skipped == 0 {
        format!("{} copied", stats.copied)
    } else {
        format!("{} copied, {} skipped", stats.copied, stats.skipped)
    }
}
