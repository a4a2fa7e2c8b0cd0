//! Token-list argument parsing.
//!
//! The parser is a pure function over the token list: it never prints and
//! never exits. Help/version are plain booleans inspected by the caller,
//! and every parse failure is a [`FskitError`] kind so the entry points can
//! map it to an exit code and decide whether to show usage text.
//!
//! Flags are matched in long (`--force`) and short (`-f`) form. Options that
//! take a value consume the following token; a missing token, or one that
//! itself looks like a flag, is a `MissingOptionValue`.

use crate::errors::{FskitError, Result};

pub const COPY_USAGE: &str = "\
Usage: fskit-copy <source> <destination> [options]

Options:
  -f, --force               Overwrite destination if it exists
  -p, --preserve-symlinks   Preserve symbolic links instead of dereferencing them
  -r, --rename <newName>    New name for the copied file or directory
  -n, --dry-run             Print planned actions without modifying the filesystem
  -h, --help                Show this help message
  -v, --version             Show version

Examples:
  fskit-copy src dist
  fskit-copy ./templates ./out -f
  fskit-copy ./dir ./dest --rename new-name
  fskit-copy ./link ./dest --preserve-symlinks";

pub const DELETE_USAGE: &str = "\
Usage: fskit-delete <path1> [path2] ... [options]

Options:
  -f, --force     Remove populated directories and protected entries
  -s, --strict    Exit on first error (stop processing further paths)
  -h, --help      Show this help message
  -v, --version   Show version

Examples:
  fskit-delete ./dist
  fskit-delete ./dist ./tmp -f
  fskit-delete ./foo -s";

/// Parsed options for the copy tool.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyArgs {
    pub force: bool,
    pub preserve_symlinks: bool,
    pub rename: Option<String>,
    pub dry_run: bool,
    pub help: bool,
    pub version: bool,
    pub source: Option<String>,
    pub destination: Option<String>,
}

/// Parsed options for the delete tool.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    pub force: bool,
    pub strict: bool,
    pub help: bool,
    pub version: bool,
    pub paths: Vec<String>,
}

/// Value for an option like `--rename <newName>`: the next token, unless it
/// is absent or looks like another flag.
fn take_value(tokens: &[String], at: usize, flag: &'static str) -> Result<String> {
    match tokens.get(at + 1) {
        Some(v) if !v.starts_with('-') => Ok(v.clone()),
        _ => Err(FskitError::MissingOptionValue(flag)),
    }
}

pub fn parse_copy_args(tokens: &[String]) -> Result<CopyArgs> {
    let mut out = CopyArgs::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--force" | "-f" => out.force = true,
            "--preserve-symlinks" | "-p" => out.preserve_symlinks = true,
            "--rename" | "-r" => {
                out.rename = Some(take_value(tokens, i, "--rename")?);
                i += 1;
            }
            "--dry-run" | "-n" => out.dry_run = true,
            "--help" | "-h" => out.help = true,
            "--version" | "-v" => out.version = true,
            _ if token.starts_with('-') => {
                return Err(FskitError::UnknownOption(token.to_string()));
            }
            _ => {
                if out.source.is_none() {
                    out.source = Some(token.to_string());
                } else if out.destination.is_none() {
                    out.destination = Some(token.to_string());
                } else {
                    return Err(FskitError::TooManyArguments);
                }
            }
        }
        i += 1;
    }
    Ok(out)
}

pub fn parse_delete_args(tokens: &[String]) -> Result<DeleteArgs> {
    let mut out = DeleteArgs::default();
    for token in tokens {
        match token.as_str() {
            "--force" | "-f" => out.force = true,
            "--strict" | "-s" => out.strict = true,
            "--help" | "-h" => out.help = true,
            "--version" | "-v" => out.version = true,
            t if t.starts_with('-') => {
                return Err(FskitError::UnknownOption(t.to_string()));
            }
            t => out.paths.push(t.to_string()),
        }
    }
    Ok(out)
}

/// Parse a comma-separated size list (e.g. `72,96,128`) into positive
/// integers. Empty segments are skipped; anything non-numeric or
/// non-positive rejects the whole list. Validation surface for the
/// icon-generation collaborator.
pub fn parse_size_list(raw: &str) -> Result<Vec<u32>> {
    let mut sizes = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<u32>() {
            Ok(n) if n > 0 => sizes.push(n),
            _ => return Err(FskitError::InvalidSizeList(raw.to_string())),
        }
    }
    if sizes.is_empty() {
        return Err(FskitError::InvalidSizeList(raw.to_string()));
    }
    Ok(sizes)
}
