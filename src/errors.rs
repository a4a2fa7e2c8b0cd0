//! Typed error definitions for fskit.
//! A closed set of failure kinds shared by both engines and the CLI entry
//! points; every failure path maps to exactly one kind.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FskitError {
    #[error("Too many arguments provided.")]
    TooManyArguments,

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing value for {0} option.")]
    MissingOptionValue(&'static str),

    #[error("Missing required argument(s): {0}")]
    MissingRequiredArguments(&'static str),

    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Source and destination cannot be the same path: {}", .0.display())]
    SameSourceAndDestination(PathBuf),

    #[error("Destination '{}' is inside the source '{}' (copy would recurse into itself).", .destination.display(), .source_path.display())]
    DestinationInsideSource {
        source_path: PathBuf,
        destination: PathBuf,
    },

    #[error("Failed to delete: {} ({source})", .path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid sizes list '{0}'. Provide comma-separated positive integers.")]
    InvalidSizeList(String),

    #[error("{context}: {source}")]
    Unknown {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl FskitError {
    /// Stable machine-readable code, intended for scripts and structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooManyArguments => "TOO_MANY_ARGS",
            Self::UnknownOption(_) => "UNKNOWN_OPTION",
            Self::MissingOptionValue(_) => "MISSING_OPTION_VALUE",
            Self::MissingRequiredArguments(_) => "MISSING_ARGS",
            Self::SourceNotFound(_) => "SOURCE_NOT_FOUND",
            Self::SameSourceAndDestination(_) => "SAME_SOURCE_DEST",
            Self::DestinationInsideSource { .. } => "DEST_INSIDE_SOURCE",
            Self::DeleteFailed { .. } => "DELETE_FAILED",
            Self::InvalidSizeList(_) => "INVALID_SIZES",
            Self::Unknown { .. } => "UNKNOWN",
        }
    }

    /// Process exit code for this kind. All kinds currently share the generic
    /// failure code; add a match here when a kind needs a distinct one.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Usage-shaped errors trigger help output at the entry point.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::TooManyArguments
                | Self::UnknownOption(_)
                | Self::MissingOptionValue(_)
                | Self::MissingRequiredArguments(_)
        )
    }
}

/// Adapter for `.map_err(...)` that wraps an io::Error as
/// [`FskitError::Unknown`] with an op/path context string.
pub(crate) fn io_context<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> FskitError + 'a {
    move |e: io::Error| FskitError::Unknown {
        context: format!("{} '{}'", op, path.display()),
        source: e,
    }
}

pub type Result<T> = std::result::Result<T, FskitError>;
