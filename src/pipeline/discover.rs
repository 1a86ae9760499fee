//! Discovery walk: visit directories in a fixed order, prune skipped subtrees, collect rasters.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::engine::tools::{file_name_string, has_extension};
use crate::error::DiscoveryError;
use crate::pipeline::log::ProgressLog;
use crate::pipeline::skip::SkipPolicy;

/// Walk options beyond the skip policy and extension list.
#[derive(Clone, Debug)]
pub struct DiscoverOpts {
    /// Descend below the root. When false only the root's own files are listed.
    pub include_subfolders: bool,
    pub follow_links: bool,
    /// Fail on the first unreadable directory; otherwise log it and carry on.
    pub strict: bool,
}

impl Default for DiscoverOpts {
    fn default() -> Self {
        Self {
            include_subfolders: true,
            follow_links: false,
            strict: true,
        }
    }
}

/// One directory-level walk failure.
struct WalkFailure {
    path: PathBuf,
    reason: String,
}

impl WalkFailure {
    fn from_walkdir(err: walkdir::Error, root: &Path) -> Self {
        Self {
            path: err.path().unwrap_or(root).to_path_buf(),
            reason: err.to_string(),
        }
    }
}

/// Strict: turn the failure into a [`DiscoveryError`]. Otherwise log it once per path and keep
/// walking. The same directory can fail twice: once listing its files, once on walkdir's descent.
fn handle_walk_failure(
    failure: WalkFailure,
    opts: &DiscoverOpts,
    log: &ProgressLog,
    reported: &mut HashSet<PathBuf>,
) -> Result<(), DiscoveryError> {
    if opts.strict {
        return Err(DiscoveryError::Unreadable {
            path: failure.path,
            reason: failure.reason,
        });
    }
    if !reported.insert(failure.path.clone()) {
        return Ok(());
    }
    warn!("Skipping unreadable path {}: {}", failure.path.display(), failure.reason);
    log.emit(format!(
        "Cannot read folder {}: {}",
        failure.path.display(),
        failure.reason
    ));
    Ok(())
}

/// Files directly inside `dir` whose extension is in `extensions`, sorted by name.
fn list_relevant_files(dir: &Path, extensions: &[String]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Collect raster files under `root`.
///
/// Directories are visited depth-first in file-name order, so the result is stable for an
/// unchanged tree. Subdirectories matching `policy` are pruned before descent and never visited.
/// The visited directory's own name is checked afterwards: a match drops that directory's files
/// only. Because every matching child was already pruned, this second check can only fire for
/// the root, and the root's other subdirectories are still walked.
pub fn discover(
    root: &Path,
    policy: &SkipPolicy,
    extensions: &[String],
    opts: &DiscoverOpts,
    log: &ProgressLog,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut walker = WalkDir::new(root)
        .follow_links(opts.follow_links)
        .sort_by_file_name();
    if !opts.include_subfolders {
        walker = walker.max_depth(0);
    }

    let dirs = walker.into_iter().filter_entry(|e| {
        e.depth() == 0
            || !e.file_type().is_dir()
            || !policy.should_skip(&e.file_name().to_string_lossy())
    });

    let mut files = Vec::new();
    let mut reported = HashSet::new();
    for outcome in dirs {
        let entry = match outcome {
            Ok(entry) => entry,
            Err(err) => {
                handle_walk_failure(
                    WalkFailure::from_walkdir(err, root),
                    opts,
                    log,
                    &mut reported,
                )?;
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        if policy.should_skip(&file_name_string(dir)) {
            log.emit(format!("Skipping folder and subfolders: {}", dir.display()));
            continue;
        }
        let relevant = match list_relevant_files(dir, extensions) {
            Ok(relevant) => relevant,
            Err(e) => {
                let failure = WalkFailure {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                };
                handle_walk_failure(failure, opts, log, &mut reported)?;
                continue;
            }
        };
        if relevant.is_empty() {
            log.emit(format!("No relevant files found in folder: {}", dir.display()));
        } else {
            debug!("{} raster(s) in {}", relevant.len(), dir.display());
            log.emit(format!("Discovered folder with files: {}", dir.display()));
            files.extend(relevant);
        }
    }
    Ok(files)
}
