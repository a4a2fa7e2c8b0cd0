//! Copy engine.
//!
//! Validates a copy request against structural hazards before anything is
//! touched, then performs (or, in dry-run mode, describes) the parent
//! directory creation, the optional force pre-clear, and the recursive copy.
//! Dry-run branches at each mutation point of this one engine rather than
//! living in a parallel code path, so the reported plan cannot drift from
//! the real behavior.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::delete::remove_tree;
use crate::errors::{io_context, FskitError, Result};
use crate::output as out;
use crate::paths;

/// One copy invocation, built from parsed arguments and resolved absolute
/// paths. Consumed by exactly one [`copy_path`] call.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub force: bool,
    pub preserve_symlinks: bool,
    pub dry_run: bool,
}

/// Validate and execute (or simulate) a copy.
///
/// Validation short-circuits in order: identity, containment, existence.
/// Each later check assumes the earlier ones hold.
pub fn copy_path(req: &CopyRequest) -> Result<()> {
    if req.source.as_os_str() == req.destination.as_os_str() {
        return Err(FskitError::SameSourceAndDestination(req.source.clone()));
    }

    if paths::is_contained_within(&req.source, &req.destination) {
        return Err(FskitError::DestinationInsideSource {
            source_path: req.source.clone(),
            destination: req.destination.clone(),
        });
    }

    // Any entry type counts as existing, including a dangling symlink.
    if fs::symlink_metadata(&req.source).is_err() {
        return Err(FskitError::SourceNotFound(req.source.clone()));
    }

    debug!(
        source = %req.source.display(),
        destination = %req.destination.display(),
        force = req.force,
        preserve_symlinks = req.preserve_symlinks,
        dry_run = req.dry_run,
        "copy request validated"
    );

    if let Some(parent) = req.destination.parent() {
        if req.dry_run {
            out::print_user(&format!(
                "Would ensure parent directory exists: {}",
                parent.display()
            ));
        } else {
            fs::create_dir_all(parent)
                .map_err(io_context("Failed to create parent directory", parent))?;
        }
    }

    if req.dry_run {
        if req.force {
            out::print_user(&format!(
                "Would remove destination (if exists): {}",
                req.destination.display()
            ));
        }
        out::print_user(&format!(
            "Would copy from {} to {} (dereference={}, recursive=true, force={})",
            req.source.display(),
            req.destination.display(),
            !req.preserve_symlinks,
            req.force
        ));
        return Ok(());
    }

    if req.force {
        remove_tree(&req.destination)
            .map_err(io_context("Failed to clear destination", &req.destination))?;
    }

    copy_tree(&req.source, &req.destination, req.preserve_symlinks)
}

/// Recursively copy `src` to `dest`. Works for single files too: the walk
/// then yields exactly one entry. With `preserve_symlinks` the walk does not
/// follow links and recreates them; otherwise links are dereferenced and
/// their targets' content is copied.
fn copy_tree(src: &Path, dest: &Path, preserve_symlinks: bool) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(!preserve_symlinks) {
        let entry = entry.map_err(|e| FskitError::Unknown {
            context: format!("Failed to read source tree '{}'", src.display()),
            source: e.into(),
        })?;
        // Every entry of this walk sits under `src`; an entry that does not
        // must not be silently retargeted at the destination root.
        let rel = entry.path().strip_prefix(src).map_err(|e| FskitError::Unknown {
            context: format!(
                "Walked entry '{}' is not under source '{}'",
                entry.path().display(),
                src.display()
            ),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        let target = if rel.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(rel)
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .map_err(io_context("Failed to create directory", &target))?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_context("Failed to copy", entry.path()))?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> Result<()> {
    let link_target = fs::read_link(src).map_err(io_context("Failed to read symlink", src))?;
    // Re-copying over an existing link would fail with EEXIST.
    if fs::symlink_metadata(dest).is_ok() {
        fs::remove_file(dest).map_err(io_context("Failed to replace", dest))?;
    }
    std::os::unix::fs::symlink(&link_target, dest)
        .map_err(io_context("Failed to create symlink", dest))
}

#[cfg(windows)]
fn copy_symlink(src: &Path, dest: &Path) -> Result<()> {
    let link_target = fs::read_link(src).map_err(io_context("Failed to read symlink", src))?;
    if fs::symlink_metadata(dest).is_ok() {
        remove_tree(dest).map_err(io_context("Failed to replace", dest))?;
    }
    // Windows distinguishes file and directory links; resolve relative
    // targets against the link's own directory to pick the right kind.
    let resolved = if link_target.is_absolute() {
        link_target.clone()
    } else {
        src.parent()
            .map(|p| p.join(&link_target))
            .unwrap_or_else(|| link_target.clone())
    };
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(&link_target, dest)
            .map_err(io_context("Failed to create symlink", dest))
    } else {
        std::os::windows::fs::symlink_file(&link_target, dest)
            .map_err(io_context("Failed to create symlink", dest))
    }
}
