// src/config/validate.rs

use crate::config::model::{LauncherConfig, RawLauncherConfig};
use crate::errors::{LauncherError, Result};

impl TryFrom<RawLauncherConfig> for LauncherConfig {
    type Error = crate::errors::LauncherError;

    fn try_from(raw: RawLauncherConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(LauncherConfig::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawLauncherConfig) -> Result<()> {
    // `client.count` needs no check: it is a `usize`, so count >= 0 holds by
    // construction and zero is a legal value.
    ensure_cmd_non_empty("[build].cmd", &cfg.build.cmd)?;
    ensure_cmd_non_empty("[server].cmd", &cfg.server.cmd)?;
    ensure_cmd_non_empty("[client].cmd", &cfg.client.cmd)?;
    validate_root(cfg)?;
    Ok(())
}

fn ensure_cmd_non_empty(field: &str, cmd: &str) -> Result<()> {
    if cmd.trim().is_empty() {
        return Err(LauncherError::ConfigError(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

fn validate_root(cfg: &RawLauncherConfig) -> Result<()> {
    if let Some(root) = &cfg.root {
        if root.trim().is_empty() {
            return Err(LauncherError::ConfigError(
                "root must not be an empty string".to_string(),
            ));
        }
    }
    Ok(())
}
