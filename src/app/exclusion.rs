use crate::app::naming::split_extension;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

/// Global skip rules applied while walking target directories.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    extensions: HashSet<String>,
    dirs: HashSet<String>,
    test_patterns: Vec<String>,
}

impl ExclusionRules {
    /// Extensions and test patterns are stored lower-cased; directory names
    /// are kept verbatim since they must match a path segment exactly.
    pub fn new<E, D, T>(extensions: E, dirs: D, test_patterns: T) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
            dirs: dirs.into_iter().map(Into::into).collect(),
            test_patterns: test_patterns
                .into_iter()
                .map(|pat| pat.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True for binary/media extensions and for anything that looks like a test file.
    pub fn is_excluded_file(&self, filename: &str) -> bool {
        let (_, ext) = split_extension(filename);
        if !ext.is_empty() && self.extensions.contains(&ext.to_lowercase()) {
            return true;
        }

        let lowered = filename.to_lowercase();
        self.test_patterns
            .iter()
            .any(|pat| lowered.contains(pat.as_str()))
    }

    /// True if any segment of `path` is an excluded directory name.
    pub fn is_excluded_path(&self, path: &Path) -> bool {
        path.components()
            .any(|c| self.is_excluded_dir_name(c.as_os_str()))
    }

    pub fn is_excluded_dir_name(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|s| self.dirs.contains(s))
    }
}
