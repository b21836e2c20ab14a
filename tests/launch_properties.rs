// tests/launch_properties.rs

use std::path::PathBuf;

use proptest::prelude::*;

use chatdev::launch::{LaunchPlan, Launcher};
use chatdev_test_utils::builders::LauncherConfigBuilder;
use chatdev_test_utils::fake_backend::FakeBackend;

fn plan_with_clients(count: usize) -> LaunchPlan {
    let cfg = LauncherConfigBuilder::new().client_count(count).build();
    LaunchPlan::from_config(&cfg, PathBuf::from("."))
}

fn run_launcher(
    plan: LaunchPlan,
    backend: FakeBackend,
) -> chatdev::errors::Result<chatdev::launch::LaunchSummary> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("building current-thread runtime");
    runtime.block_on(Launcher::new(plan, backend).run())
}

proptest! {
    /// For all N >= 0: a successful build issues exactly one server attempt
    /// and exactly N client attempts, with the server first.
    #[test]
    fn one_server_and_n_clients_for_any_count(count in 0usize..64) {
        let backend = FakeBackend::new();
        let launched = backend.launched();

        let summary = run_launcher(plan_with_clients(count), backend).unwrap();

        prop_assert_eq!(summary.server_attempts, 1);
        prop_assert_eq!(summary.client_attempts, count);

        let order = launched.lock().unwrap().clone();
        prop_assert_eq!(order.len(), 1 + count);
        prop_assert_eq!(order[0].as_str(), "server");
        prop_assert!(order[1..].iter().all(|name| name.starts_with("client-")));
    }

    /// A single failing launch, wherever it sits in the sequence, never
    /// reduces the number of attempts issued.
    #[test]
    fn a_failing_launch_never_blocks_later_attempts(
        count in 1usize..16,
        fail_pick in 0usize..16,
    ) {
        // 0 = the server, 1..=count = one of the clients.
        let fail_idx = fail_pick % (count + 1);
        let fail_name = if fail_idx == 0 {
            "server".to_string()
        } else {
            format!("client-{fail_idx}")
        };

        let backend = FakeBackend::new().with_failing_launch(&fail_name);
        let launched = backend.launched();

        let summary = run_launcher(plan_with_clients(count), backend).unwrap();

        prop_assert_eq!(summary.total_attempts(), 1 + count);
        prop_assert_eq!(launched.lock().unwrap().len(), 1 + count);
    }

    /// A failing build issues zero launch attempts, for any client count and
    /// any non-zero exit status.
    #[test]
    fn failing_build_never_launches(count in 0usize..16, status in 1i32..256) {
        let backend = FakeBackend::new().with_failing_build(status);
        let launched = backend.launched();

        let result = run_launcher(plan_with_clients(count), backend);

        prop_assert!(result.is_err());
        prop_assert!(launched.lock().unwrap().is_empty());
    }
}
