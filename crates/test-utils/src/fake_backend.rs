use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use chatdev::errors::{LauncherError, Result};
use chatdev::launch::{BuildOutcome, BuildStep, LaunchSpec, ProcessBackend};

/// A fake process backend that:
/// - records every build invocation and every launch attempt, in issue order
/// - returns scripted outcomes instead of touching the OS process table.
pub struct FakeBackend {
    build_outcome: BuildOutcome,
    fail_launches: HashSet<String>,
    build_calls: Arc<Mutex<Vec<String>>>,
    launched: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            build_outcome: BuildOutcome::Success,
            fail_launches: HashSet::new(),
            build_calls: Arc::new(Mutex::new(Vec::new())),
            launched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the build step to exit with the given non-zero status.
    pub fn with_failing_build(mut self, status: i32) -> Self {
        self.build_outcome = BuildOutcome::Failed(status);
        self
    }

    /// Script the launch of `name` to fail as if the OS refused to start it.
    pub fn with_failing_launch(mut self, name: &str) -> Self {
        self.fail_launches.insert(name.to_string());
        self
    }

    /// Handle to the recorded build invocations (command strings).
    pub fn build_calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.build_calls)
    }

    /// Handle to the recorded launch attempts (process names, in issue order).
    ///
    /// A scripted launch failure is still recorded: the attempt was issued.
    pub fn launched(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.launched)
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessBackend for FakeBackend {
    fn run_build(
        &mut self,
        step: BuildStep,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + '_>> {
        let calls = Arc::clone(&self.build_calls);
        let outcome = self.build_outcome;

        Box::pin(async move {
            calls.lock().unwrap().push(step.cmd.clone());
            Ok(outcome)
        })
    }

    fn spawn_detached(
        &mut self,
        spec: LaunchSpec,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let launched = Arc::clone(&self.launched);
        let fail = self.fail_launches.contains(&spec.name);

        Box::pin(async move {
            launched.lock().unwrap().push(spec.name.clone());

            if fail {
                return Err(LauncherError::LaunchFailed {
                    name: spec.name,
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "scripted launch failure",
                    ),
                });
            }
            Ok(())
        })
    }
}
