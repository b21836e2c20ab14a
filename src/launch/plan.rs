// src/launch/plan.rs

//! Launch plan construction.
//!
//! A [`LaunchPlan`] is the fully resolved sequence for one run: the build
//! step plus every process to start, with the resolved project root baked in
//! as the working directory. The plan fixes the launch order: the server
//! spec always comes before the client specs.

use std::path::PathBuf;

use crate::config::LauncherConfig;

/// The synchronous build invocation gating all launches.
#[derive(Debug, Clone)]
pub struct BuildStep {
    /// Command line, run through the platform shell.
    pub cmd: String,

    /// Working directory (the resolved project root).
    pub cwd: PathBuf,
}

/// Role of a launched process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessRole {
    Server,
    Client,
}

/// One process to start, fire-and-forget.
///
/// A spec is not owned beyond the moment of launch: nothing retains a handle
/// usable for waiting on or killing the process afterwards.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Display name used in logs ("server", "client-1", ...).
    pub name: String,

    /// Whether this is the server or one of the clients.
    pub role: ProcessRole,

    /// Command line, run through the platform shell.
    pub cmd: String,

    /// Working directory (the resolved project root).
    pub cwd: PathBuf,
}

/// The resolved sequence for one launcher run.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    /// Runs first and blocks; a non-zero exit stops everything below.
    pub build: BuildStep,

    /// Started before any client.
    pub server: LaunchSpec,

    /// Started after the server, in vector order. May be empty.
    pub clients: Vec<LaunchSpec>,
}

impl LaunchPlan {
    /// Build the plan from a validated config and a resolved project root.
    pub fn from_config(cfg: &LauncherConfig, root: PathBuf) -> Self {
        let build = BuildStep {
            cmd: cfg.build.cmd.clone(),
            cwd: root.clone(),
        };

        let server = LaunchSpec {
            name: "server".to_string(),
            role: ProcessRole::Server,
            cmd: cfg.server.cmd.clone(),
            cwd: root.clone(),
        };

        let clients = (0..cfg.client.count)
            .map(|i| LaunchSpec {
                name: format!("client-{}", i + 1),
                role: ProcessRole::Client,
                cmd: cfg.client.cmd.clone(),
                cwd: root.clone(),
            })
            .collect();

        Self {
            build,
            server,
            clients,
        }
    }

    /// All launches in issue order: the server first, then every client.
    pub fn launches(&self) -> impl Iterator<Item = &LaunchSpec> {
        std::iter::once(&self.server).chain(self.clients.iter())
    }
}
