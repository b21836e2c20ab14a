// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod launch;
pub mod logging;
pub mod root;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::launch::{LaunchPlan, Launcher, RealProcessBackend};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (+ CLI overrides)
/// - project root resolution
/// - launch plan construction
/// - the launcher with its real process backend
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_or_default(args.config.as_deref().map(Path::new))?;

    // CLI overrides beat config-file values.
    if let Some(count) = args.clients {
        cfg.client.count = count;
    }
    if let Some(ref root) = args.root {
        cfg.root = Some(PathBuf::from(root));
    }

    // Root resolution happens before any subprocess work; a failure here
    // means the build is never invoked.
    let root = root::resolve_root(cfg.root.as_deref())?;
    info!(root = %root.display(), "project root resolved");

    let plan = LaunchPlan::from_config(&cfg, root);

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let launcher = Launcher::new(plan, RealProcessBackend::new());
    let summary = launcher.run().await?;

    info!(
        server = summary.server_attempts,
        clients = summary.client_attempts,
        "launch sequence finished; processes are now on their own"
    );

    Ok(())
}

/// Simple dry-run output: print the resolved plan.
fn print_dry_run(plan: &LaunchPlan) {
    println!("chatdev dry-run");
    println!("  root: {}", plan.build.cwd.display());
    println!();
    println!("  build:  {}", plan.build.cmd);
    println!("  server: {}", plan.server.cmd);
    println!("  clients ({}):", plan.clients.len());
    for spec in &plan.clients {
        println!("    - {}: {}", spec.name, spec.cmd);
    }

    debug!("dry-run complete (no execution)");
}
