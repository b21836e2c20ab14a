// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{LauncherConfig, RawLauncherConfig};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawLauncherConfig`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (empty commands, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawLauncherConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawLauncherConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Rejects empty command strings and an empty `root`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LauncherConfig> {
    let raw_config = load_from_path(&path)?;
    let config = LauncherConfig::try_from(raw_config)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Chatdev.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `CHATDEV_CONFIG`).
/// - Support project-local config discovery.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Chatdev.toml")
}

/// Resolve the configuration for this run.
///
/// - An explicitly given path must exist; a missing file is an error.
/// - Without one, `Chatdev.toml` is loaded when present; otherwise the
///   built-in defaults apply.
pub fn load_or_default(explicit: Option<&Path>) -> Result<LauncherConfig> {
    match explicit {
        Some(path) => load_and_validate(path),
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                load_and_validate(&default_path)
            } else {
                debug!(
                    "no {} found; using built-in defaults",
                    default_path.display()
                );
                Ok(LauncherConfig::default())
            }
        }
    }
}
