//! Path resolution and containment checks.
//!
//! Requests are built from absolute, lexically normalized paths so the
//! engines can compare them textually. Normalization is purely lexical:
//! symlinks are not resolved and no case folding happens, so an aliased
//! self-copy on a case-insensitive filesystem is not detected. That matches
//! the documented guard semantics; do not "fix" it here without changing the
//! containment contract as well.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Resolve `raw` against `base` (normally the current working directory) and
/// lexically normalize the result: `.` segments drop, `..` pops the previous
/// segment (never above the root).
pub fn resolve_from(base: &Path, raw: &str) -> PathBuf {
    let joined = base.join(raw);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep root/prefix components in place.
                if matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// True when `candidate` is `source` itself or lies underneath it.
///
/// Both paths are compared in separator-terminated string form so that
/// partial segments never match (`/src` does not contain `/src2`).
pub fn is_contained_within(source: &Path, candidate: &Path) -> bool {
    if source.as_os_str() == candidate.as_os_str() {
        return true;
    }
    let mut src = source.to_string_lossy().into_owned();
    if !src.ends_with(MAIN_SEPARATOR) {
        src.push(MAIN_SEPARATOR);
    }
    let mut cand = candidate.to_string_lossy().into_owned();
    if !cand.ends_with(MAIN_SEPARATOR) {
        cand.push(MAIN_SEPARATOR);
    }
    cand.starts_with(&src)
}
