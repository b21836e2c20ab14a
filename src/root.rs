// src/root.rs

//! Project root resolution.
//!
//! The project root is the working directory for every subprocess the
//! launcher starts (build, server, clients). It is resolved once per run,
//! before any subprocess work happens, and a resolution failure aborts the
//! run before the build is even attempted.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{LauncherError, Result};

/// Resolve the project root for this run.
///
/// - With `configured` (from `--root` or the `root` config key), that
///   directory is used directly.
/// - Otherwise the root is derived from the launcher executable's own
///   location: one level above the directory containing it.
///
/// Either way the result must be an existing directory; anything else is a
/// fatal [`LauncherError::PathResolution`] with no fallback.
pub fn resolve_root(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(path) => existing_dir(path),
        None => root_from_own_location(),
    }
}

fn root_from_own_location() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| {
        LauncherError::PathResolution(format!("cannot locate the launcher executable: {e}"))
    })?;

    debug!(exe = %exe.display(), "deriving project root from executable location");

    let bin_dir = exe.parent().ok_or_else(|| {
        LauncherError::PathResolution(format!(
            "executable path '{}' has no parent directory",
            exe.display()
        ))
    })?;
    let root = bin_dir.parent().ok_or_else(|| {
        LauncherError::PathResolution(format!(
            "directory '{}' has no parent to use as project root",
            bin_dir.display()
        ))
    })?;

    existing_dir(root)
}

fn existing_dir(path: &Path) -> Result<PathBuf> {
    let canonical = path.canonicalize().map_err(|e| {
        LauncherError::PathResolution(format!("'{}' is not accessible: {e}", path.display()))
    })?;

    if !canonical.is_dir() {
        return Err(LauncherError::PathResolution(format!(
            "'{}' is not a directory",
            canonical.display()
        )));
    }

    Ok(canonical)
}
