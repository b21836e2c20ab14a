// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `chatdev`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "chatdev",
    version,
    about = "Build the chat workspace, then launch one server and N clients.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Chatdev.toml` in the current working directory. When that
    /// file does not exist, built-in defaults are used instead.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Project root used as the working directory for every subprocess.
    ///
    /// Overrides `root` from the config file. If neither is set, the root is
    /// derived from the location of the chatdev executable.
    #[arg(long, value_name = "PATH")]
    pub root: Option<String>,

    /// Number of client processes to launch.
    ///
    /// Overrides `count` from the `[client]` config section.
    #[arg(long, value_name = "N")]
    pub clients: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CHATDEV_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve + print the launch plan, but don't build or start anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
