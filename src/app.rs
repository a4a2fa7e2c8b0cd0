//! Entry-point orchestration.
//!
//! Wires parser -> absolute path resolution -> engine -> exit code for each
//! tool. Success summaries, help, version and dry-run plans go to stdout;
//! error messages go to stderr. Usage-shaped failures additionally print the
//! tool's usage text so the caller learns the correct invocation.

use std::env;
use std::path::PathBuf;
use tracing::{debug, error};

use crate::args::{self, COPY_USAGE, DELETE_USAGE};
use crate::copy::{copy_path, CopyRequest};
use crate::delete::{remove_all, RemoveOutcome};
use crate::errors::{FskitError, Result};
use crate::output as out;
use crate::paths;

/// Run the copy tool against raw argv tokens (program name excluded).
/// Returns the process exit code.
pub fn run_copy(argv: &[String]) -> i32 {
    match copy_main(argv) {
        Ok(()) => 0,
        Err(e) => report_failure(&e, COPY_USAGE),
    }
}

/// Run the delete tool against raw argv tokens (program name excluded).
/// Returns the process exit code.
pub fn run_delete(argv: &[String]) -> i32 {
    match delete_main(argv) {
        Ok(()) => 0,
        Err(e) => report_failure(&e, DELETE_USAGE),
    }
}

fn copy_main(argv: &[String]) -> Result<()> {
    let parsed = args::parse_copy_args(argv)?;

    if parsed.help {
        out::print_user(COPY_USAGE);
        return Ok(());
    }
    if parsed.version {
        out::print_user(env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let (Some(source), Some(destination)) = (&parsed.source, &parsed.destination) else {
        return Err(FskitError::MissingRequiredArguments("<source> <destination>"));
    };

    let cwd = current_dir()?;
    let abs_source = paths::resolve_from(&cwd, source);
    let mut abs_destination = paths::resolve_from(&cwd, destination);
    if let Some(new_name) = &parsed.rename {
        abs_destination = abs_destination.join(new_name);
    }

    debug!(source = %abs_source.display(), destination = %abs_destination.display(), "starting copy");

    let request = CopyRequest {
        source: abs_source,
        destination: abs_destination,
        force: parsed.force,
        preserve_symlinks: parsed.preserve_symlinks,
        dry_run: parsed.dry_run,
    };
    copy_path(&request)?;

    if parsed.dry_run {
        out::print_user("Dry run complete. No files were changed.");
    } else {
        out::print_user(&format!(
            "Successfully copied from {} to {}",
            request.source.display(),
            request.destination.display()
        ));
    }
    Ok(())
}

fn delete_main(argv: &[String]) -> Result<()> {
    let parsed = args::parse_delete_args(argv)?;

    if parsed.help {
        out::print_user(DELETE_USAGE);
        return Ok(());
    }
    if parsed.version {
        out::print_user(env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if parsed.paths.is_empty() {
        return Err(FskitError::MissingRequiredArguments("<path1> [path2] ..."));
    }

    let cwd = current_dir()?;
    let targets: Vec<PathBuf> = parsed
        .paths
        .iter()
        .map(|raw| paths::resolve_from(&cwd, raw))
        .collect();

    debug!(count = targets.len(), strict = parsed.strict, "starting delete batch");

    let outcomes = remove_all(&targets, parsed.force, parsed.strict)?;
    for (path, outcome) in &outcomes {
        match outcome {
            RemoveOutcome::Removed => {
                out::print_user(&format!("Successfully deleted {}", path.display()));
            }
            RemoveOutcome::AlreadyAbsent => {
                out::print_user(&format!("Already absent: {}", path.display()));
            }
        }
    }
    Ok(())
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| FskitError::Unknown {
        context: "Failed to determine current directory".to_string(),
        source: e,
    })
}

/// Shared failure epilogue: error to stderr (human text plus structured
/// event), usage text to stdout for usage-shaped errors, kind-specific exit
/// code back to the caller.
fn report_failure(err: &FskitError, usage: &str) -> i32 {
    out::print_error(&err.to_string());
    error!(code = err.code(), error = %err, "operation failed");
    if err.is_usage() {
        out::print_user(usage);
    }
    err.exit_code()
}
