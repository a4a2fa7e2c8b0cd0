//! Delete engine.
//!
//! Per-path removal is idempotent with respect to absence: deleting a path
//! that does not exist succeeds without mutation, regardless of flags. The
//! strict/non-strict batch policy lives only in [`remove_all`]; the per-path
//! primitive always computes and returns its own outcome, so the one place
//! an error is deliberately discarded is auditable and testable on its own.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{FskitError, Result};
use crate::output as out;

/// What a single removal actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    AlreadyAbsent,
}

/// Remove whatever sits at `path`.
///
/// Under `force`, populated directories are removed recursively; without it,
/// only empty directories go (`remove_dir`), so a populated directory is a
/// [`FskitError::DeleteFailed`]. Symlinks are removed as entries, never
/// followed.
pub fn remove_path(path: &Path, force: bool) -> Result<RemoveOutcome> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "already absent, nothing to delete");
            return Ok(RemoveOutcome::AlreadyAbsent);
        }
        Err(e) => {
            return Err(FskitError::DeleteFailed {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let result = if meta.is_dir() {
        if force {
            fs::remove_dir_all(path)
        } else {
            fs::remove_dir(path)
        }
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {
            debug!(path = %path.display(), "removed");
            Ok(RemoveOutcome::Removed)
        }
        // Lost a race with another remover; absence is still success.
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RemoveOutcome::AlreadyAbsent),
        Err(e) => Err(FskitError::DeleteFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Batch driver: remove `paths` strictly in order, one at a time.
///
/// Under `strict` the first failure aborts the batch and propagates; under
/// the default policy a failure is logged and the batch continues, trading
/// completeness for resilience in best-effort cleanup scripts. Returns the
/// outcomes of the paths that were processed successfully.
pub fn remove_all(
    paths: &[PathBuf],
    force: bool,
    strict: bool,
) -> Result<Vec<(PathBuf, RemoveOutcome)>> {
    let mut outcomes = Vec::with_capacity(paths.len());
    for path in paths {
        match remove_path(path, force) {
            Ok(outcome) => outcomes.push((path.clone(), outcome)),
            Err(e) if strict => return Err(e),
            Err(e) => {
                out::print_warn(&format!("Skipping {}: {}", path.display(), e));
                warn!(code = e.code(), path = %path.display(), error = %e, "continuing past delete failure");
            }
        }
    }
    Ok(outcomes)
}

/// Recursive, absence-tolerant removal. Used by the copy engine's force
/// pre-clear, where overwrite must succeed whatever the destination held.
pub(crate) fn remove_tree(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
