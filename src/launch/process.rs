// src/launch/process.rs

//! Real process backend built on `tokio::process`.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{LauncherError, Result};
use crate::launch::backend::{BuildOutcome, ProcessBackend};
use crate::launch::plan::{BuildStep, LaunchSpec};

/// Process backend used in production.
///
/// Commands run through the platform shell with the project root as working
/// directory. Launched children are never waited on: the `Child` handle is
/// dropped without `kill_on_drop`, so the server and clients keep running
/// after the launcher exits. Their stdio stays attached to the terminal so
/// the operator can interact with the chat clients directly.
pub struct RealProcessBackend;

impl RealProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealProcessBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    }
}

impl ProcessBackend for RealProcessBackend {
    fn run_build(
        &mut self,
        step: BuildStep,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + '_>> {
        Box::pin(async move {
            info!(cmd = %step.cmd, cwd = %step.cwd.display(), "running build step");

            let status = shell_command(&step.cmd)
                .current_dir(&step.cwd)
                .status()
                .await?;

            if status.success() {
                Ok(BuildOutcome::Success)
            } else {
                Ok(BuildOutcome::Failed(status.code().unwrap_or(-1)))
            }
        })
    }

    fn spawn_detached(
        &mut self,
        spec: LaunchSpec,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            info!(
                process = %spec.name,
                cmd = %spec.cmd,
                cwd = %spec.cwd.display(),
                "starting process"
            );

            let child = shell_command(&spec.cmd)
                .current_dir(&spec.cwd)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .spawn()
                .map_err(|source| LauncherError::LaunchFailed {
                    name: spec.name.clone(),
                    source,
                })?;

            debug!(
                process = %spec.name,
                pid = ?child.id(),
                "process started; handle discarded"
            );

            // Dropping the handle detaches the child: no wait, no kill.
            drop(child);
            Ok(())
        })
    }
}
