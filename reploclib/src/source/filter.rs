//! Candidate discovery and exclusion filtering.
//!
//! Discovery walks the tree and yields every regular file whose name ends
//! with one of the configured extensions. Exclusion is applied separately so
//! that the same walk can be used both for the progress total and for the
//! actual scan.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// A file selected for counting, tagged with the extension bucket it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Configured extension that matched the file name
    pub extension: String,
    /// Full path (root joined with the relative path)
    pub path: PathBuf,
}

impl Candidate {
    /// Path relative to the scan root, falling back to the full path.
    pub fn relative_to<'a>(&'a self, root: &Path) -> &'a Path {
        self.path.strip_prefix(root).unwrap_or(&self.path)
    }
}

/// Return the first configured extension that `file_name` ends with.
///
/// Matching is an exact, case-sensitive suffix comparison on the raw name
/// bytes, so names that are not valid UTF-8 still match. Configuration
/// order decides between overlapping extensions.
pub fn match_extension<'a>(
    file_name: impl AsRef<OsStr>,
    extensions: &'a [String],
) -> Option<&'a str> {
    let name = file_name.as_ref().as_encoded_bytes();
    extensions
        .iter()
        .find(|ext| !ext.is_empty() && name.ends_with(ext.as_bytes()))
        .map(String::as_str)
}

/// Lazily enumerate candidate files under `root`.
///
/// Order is filesystem traversal order. Symlinks are not followed.
/// Unreadable subtrees are logged and skipped.
pub fn enumerate_candidates<'a>(
    root: &Path,
    extensions: &'a [String],
) -> impl Iterator<Item = Candidate> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(move |entry| {
            let extension = match_extension(entry.file_name(), extensions)?.to_string();
            Some(Candidate {
                extension,
                path: entry.into_path(),
            })
        })
}

/// Check whether a path is excluded.
///
/// A path is excluded if any `exclude_dirs` entry occurs anywhere in its
/// string form (plain substring, so `build` also hits `my-build-tools`), or
/// if its base name matches any of `exclude_files`.
///
/// Only the path given is inspected. During a scan that is the path relative
/// to the scan root (see [`included_candidates`]), so components of the root
/// itself never cause an exclusion: scanning `/srv/build/app` with `build`
/// excluded still counts `/srv/build/app/main.py`, while `app/build/gen.py`
/// below the root is excluded.
pub fn is_excluded(path: &Path, exclude_dirs: &[String], exclude_files: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    if exclude_dirs
        .iter()
        .any(|word| path_str.contains(word.as_str()))
    {
        return true;
    }

    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    exclude_files.iter().any(|pattern| pattern.matches(&name))
}

/// Enumerate the candidates of `config` that survive exclusion.
///
/// Exclusion is checked against the path relative to the root, so a root
/// that happens to contain an excluded word does not hide the whole tree.
pub fn included_candidates(config: &ScanConfig) -> impl Iterator<Item = Candidate> + '_ {
    enumerate_candidates(&config.root, &config.include_extensions).filter(move |candidate| {
        !is_excluded(
            candidate.relative_to(&config.root),
            &config.exclude_dirs,
            &config.exclude_files,
        )
    })
}

/// Count the files a scan of `config` will process.
///
/// This walks the tree a second time and is used only for the progress total.
pub fn count_candidates(config: &ScanConfig) -> u64 {
    included_candidates(config).count() as u64
}
