// src/launch/backend.rs

//! Pluggable process backend abstraction.
//!
//! The launcher talks to a `ProcessBackend` instead of `tokio::process`
//! directly. This makes it easy to swap in a fake backend in tests while
//! keeping the production implementation in [`process`](crate::launch::process).
//!
//! - `RealProcessBackend` is the default implementation used by `chatdev`.
//! - Tests can provide their own `ProcessBackend` that, for example, records
//!   which processes were "started" and returns scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::launch::plan::{BuildStep, LaunchSpec};

/// Outcome of the build step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Exit status zero.
    Success,

    /// Non-zero exit status, carried for error reporting.
    Failed(i32),
}

/// Trait abstracting how the launcher invokes the operating system.
///
/// Production code uses [`RealProcessBackend`](crate::launch::RealProcessBackend);
/// tests can provide their own implementation that doesn't spawn real
/// processes.
pub trait ProcessBackend: Send {
    /// Run the build command and wait for it to exit.
    ///
    /// A non-zero exit is a normal result (`BuildOutcome::Failed`); `Err`
    /// means the build tool itself could not be invoked.
    fn run_build(
        &mut self,
        step: BuildStep,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + '_>>;

    /// Start one process without waiting on it.
    ///
    /// `Err` means the OS could not start this specific process; the caller
    /// treats that as non-fatal and continues with the remaining launches.
    fn spawn_detached(
        &mut self,
        spec: LaunchSpec,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}
