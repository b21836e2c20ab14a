// src/launch/launcher.rs

//! The build-then-launch sequence.

use tracing::{error, info};

use crate::errors::{LauncherError, Result};
use crate::launch::backend::{BuildOutcome, ProcessBackend};
use crate::launch::plan::{LaunchPlan, ProcessRole};

/// Counts of launch attempts issued during one run.
///
/// Only attempts are counted. Individual launch outcomes are reported as
/// they happen and are deliberately not aggregated into a final status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchSummary {
    pub server_attempts: usize,
    pub client_attempts: usize,
}

impl LaunchSummary {
    pub fn total_attempts(&self) -> usize {
        self.server_attempts + self.client_attempts
    }
}

/// Drives one build-then-launch sequence against a [`ProcessBackend`].
///
/// The sequence runs exactly once per `Launcher` value:
///
/// 1. the build step, awaited to completion; a non-zero exit aborts the run
///    before any process is started
/// 2. the server launch
/// 3. the client launches, in plan order
///
/// Launch failures are logged per occurrence and never stop the remaining
/// launches. Nothing is retried, waited on, or shut down afterwards.
pub struct Launcher<B: ProcessBackend> {
    plan: LaunchPlan,
    backend: B,
}

impl<B: ProcessBackend> Launcher<B> {
    pub fn new(plan: LaunchPlan, backend: B) -> Self {
        Self { plan, backend }
    }

    /// Run the sequence exactly once, consuming the launcher.
    pub async fn run(mut self) -> Result<LaunchSummary> {
        match self.backend.run_build(self.plan.build.clone()).await? {
            BuildOutcome::Success => {
                info!(cmd = %self.plan.build.cmd, "build step succeeded");
            }
            BuildOutcome::Failed(status) => {
                return Err(LauncherError::BuildFailed { status });
            }
        }

        let mut summary = LaunchSummary::default();
        for spec in self.plan.launches() {
            let name = spec.name.clone();
            let role = spec.role;

            if let Err(err) = self.backend.spawn_detached(spec.clone()).await {
                error!(
                    process = %name,
                    error = %err,
                    "launch failed; continuing with remaining launches"
                );
            }

            match role {
                ProcessRole::Server => summary.server_attempts += 1,
                ProcessRole::Client => summary.client_attempts += 1,
            }
        }

        info!(
            server = summary.server_attempts,
            clients = summary.client_attempts,
            "all launches issued"
        );

        Ok(summary)
    }
}
