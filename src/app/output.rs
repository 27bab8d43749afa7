use crate::app::models::Placement;
use anyhow::{Context, Result};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

/// The flat directory every harvested file lands in.
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Deletes whatever a previous run left behind and starts empty.
    pub fn reset(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if root.is_dir() {
            log::debug!("Removing previous output at {}", root.display());
            fs::remove_dir_all(&root)
                .with_context(|| format!("Failed to remove output directory {:?}", root))?;
        }
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create output directory {:?}", root))?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Copies `source` to `<root>/<name>` unless that name is already taken.
    pub fn place(&self, source: &Path, name: &str) -> Result<Placement> {
        let dest = self.root.join(name);
        if dest.exists() {
            log::debug!(
                "Skipping {}: {} already exists",
                source.display(),
                dest.display()
            );
            return Ok(Placement::Skipped);
        }

        copy_with_times(source, &dest)
            .with_context(|| format!("Failed to copy {:?} to {:?}", source, dest))?;

        log::trace!("Copied {} -> {}", source.display(), name);
        Ok(Placement::Copied)
    }
}

/// Contents, timestamps and permission bits, in that order so a read-only
/// source does not block the timestamp update.
fn copy_with_times(source: &Path, dest: &Path) -> io::Result<()> {
    let mut reader = File::open(source)?;
    let meta = reader.metadata()?;
    let mut writer = File::options().write(true).create_new(true).open(dest)?;

    let written = io::copy(&mut reader, &mut writer).and_then(|_| {
        let mut times = FileTimes::new().set_modified(meta.modified()?);
        if let Ok(accessed) = meta.accessed() {
            times = times.set_accessed(accessed);
        }
        writer.set_times(times)?;
        writer.set_permissions(meta.permissions())
    });

    if written.is_err() {
        // Never leave a truncated file behind under a valid name.
        drop(writer);
        let _ = fs::remove_file(dest);
    }
    written
}
