use pathdiff::diff_paths;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Filename as text for matching and naming. Bytes that are not UTF-8 become
/// U+FFFD, so two such names can flatten to the same target; the later one is
/// then skipped like any other collision.
pub fn file_name_text(name: &OsStr) -> Cow<'_, str> {
    if name.to_str().is_none() {
        log::warn!("Filename {:?} is not valid UTF-8, using a lossy name", name);
    }
    name.to_string_lossy()
}

/// Splits `filename` into stem and extension, the extension keeping its dot.
/// Leading dots belong to the stem, so `.env` has no extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let leading_dots = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading_dots..].rfind('.') {
        Some(idx) => filename.split_at(leading_dots + idx),
        None => (filename, ""),
    }
}

/// Flat output name for a file found at the root of a repository.
pub fn root_target_name(repository_id: &str, filename: &str) -> String {
    format!("{}_{}", repository_id, filename)
}

/// Flat output name for `filename` living in `file_dir`.
///
/// Files directly in `root_dir` get `{repo}_{filename}`. Deeper files carry
/// their directory path, joined with underscores, between stem and
/// extension: `modules/vpc/main.tf` under repo `infra` becomes
/// `infra_main_modules_vpc.tf`.
pub fn target_name(repository_id: &str, root_dir: &Path, file_dir: &Path, filename: &str) -> String {
    let relative = diff_paths(file_dir, root_dir).unwrap_or_else(|| file_dir.to_path_buf());
    let segments: Vec<String> = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        return root_target_name(repository_id, filename);
    }

    let dir_tag = segments.join("_");
    let (stem, ext) = split_extension(filename);
    format!("{}_{}_{}{}", repository_id, stem, dir_tag, ext)
}
