//! Core library for `fskit`.
//!
//! Safe, scriptable filesystem mutation for build and deployment scripts:
//! a recursive copy engine and a batch delete engine, both validated against
//! structural hazards (self-copy, destination-inside-source, missing source)
//! before anything is touched, with a dry-run mode that reports the plan
//! instead of executing it.
//!
//! Every failure maps to exactly one [`FskitError`] kind with a stable string
//! code and a process exit code, so shell scripts can branch on outcomes
//! without parsing prose.

pub mod app;
pub mod args;
pub mod copy;
pub mod delete;
pub mod errors;
pub mod logging;
pub mod output;
pub mod paths;

pub use copy::{copy_path, CopyRequest};
pub use delete::{remove_all, remove_path, RemoveOutcome};
pub use errors::FskitError;
