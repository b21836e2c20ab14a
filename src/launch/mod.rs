// src/launch/mod.rs

//! Process launch layer.
//!
//! This module owns the build-then-launch sequence: running the build step
//! to completion, then starting the server and client processes
//! fire-and-forget with `tokio::process::Command`.
//!
//! - [`plan`] turns a validated config plus the resolved root into a
//!   [`LaunchPlan`].
//! - [`backend`] provides the `ProcessBackend` trait the launcher drives,
//!   which tests can replace with a fake implementation.
//! - [`process`] is the real `tokio::process` backend.
//! - [`launcher`] sequences build and launches and reports failures.

pub mod backend;
pub mod launcher;
pub mod plan;
pub mod process;

pub use backend::{BuildOutcome, ProcessBackend};
pub use launcher::{LaunchSummary, Launcher};
pub use plan::{BuildStep, LaunchPlan, LaunchSpec, ProcessRole};
pub use process::RealProcessBackend;
