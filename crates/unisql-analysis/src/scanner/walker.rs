//! Recursive file discovery using the `ignore` crate's walker.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, warn};
use unisql_core::errors::ScanError;

/// Scripts found under a root, plus the entries the walk could not read.
#[derive(Debug, Default)]
pub struct Discovery {
    pub paths: Vec<PathBuf>,
    /// Unreadable directories or entries, as [`ScanError::Walk`].
    pub skipped: Vec<ScanError>,
}

/// Discover every file under `root` whose name ends with `suffix`.
///
/// The walk is recursive with no depth limit. Ignore files and hidden-file
/// filtering are disabled so that every matching file is returned. Entries are
/// sorted by file name within each directory, which makes discovery order
/// stable across runs.
///
/// A symlink to a file always counts as a file. Symlinked directories are
/// only descended into when `follow_symlinks` is set. The suffix is matched on
/// the raw file name, so names that are not valid UTF-8 are kept.
///
/// Only a missing root is an error. Entries the walk cannot read are logged
/// and returned in [`Discovery::skipped`].
pub fn discover_scripts(
    root: &Path,
    suffix: &str,
    follow_symlinks: bool,
) -> Result<Discovery, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let start = Instant::now();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(follow_symlinks)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut found = Discovery::default();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = error_path(&e).unwrap_or(root).to_path_buf();
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                found.skipped.push(ScanError::Walk {
                    path,
                    message: e.to_string(),
                });
                continue;
            }
        };
        if is_file(&entry) && has_suffix(entry.file_name(), suffix) {
            found.paths.push(entry.into_path());
        }
    }

    debug!(
        root = %root.display(),
        files = found.paths.len(),
        skipped = found.skipped.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "script discovery complete"
    );
    Ok(found)
}

fn is_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // Unfollowed link: resolve the target without descending into it.
        Some(ft) if ft.is_symlink() => std::fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(unix)]
fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().ends_with(suffix.as_bytes())
}

#[cfg(not(unix))]
fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.to_string_lossy().ends_with(suffix)
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
