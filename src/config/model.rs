// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a `Chatdev.toml` file.
///
/// ```toml
/// root = "/path/to/chat/workspace"
///
/// [build]
/// cmd = "cargo build"
///
/// [server]
/// cmd = "cargo run -p chat-server"
///
/// [client]
/// cmd = "cargo run -p chat-client"
/// count = 2
/// ```
///
/// All sections are optional; the defaults reproduce the manual workflow of
/// building the workspace once, then starting one server and two clients.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawLauncherConfig {
    /// Project root override.
    ///
    /// When absent, the root is derived from the location of the launcher
    /// executable itself (one level above the directory containing it).
    #[serde(default)]
    pub root: Option<String>,

    /// `[build]` section.
    #[serde(default)]
    pub build: BuildSection,

    /// `[server]` section.
    #[serde(default)]
    pub server: ServerSection,

    /// `[client]` section.
    #[serde(default)]
    pub client: ClientSection,
}

/// `[build]` section: the synchronous build invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
    /// Command run to completion before anything is launched.
    #[serde(default = "default_build_cmd")]
    pub cmd: String,
}

fn default_build_cmd() -> String {
    "cargo build".to_string()
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            cmd: default_build_cmd(),
        }
    }
}

/// `[server]` section: the chat server process.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Command started first, fire-and-forget.
    #[serde(default = "default_server_cmd")]
    pub cmd: String,
}

fn default_server_cmd() -> String {
    "cargo run -p chat-server".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            cmd: default_server_cmd(),
        }
    }
}

/// `[client]` section: the chat client processes.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSection {
    /// Command started once per client, fire-and-forget.
    #[serde(default = "default_client_cmd")]
    pub cmd: String,

    /// How many client processes to start. Zero is legal and starts none.
    #[serde(default = "default_client_count")]
    pub count: usize,
}

fn default_client_cmd() -> String {
    "cargo run -p chat-client".to_string()
}

fn default_client_count() -> usize {
    2
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            cmd: default_client_cmd(),
            count: default_client_count(),
        }
    }
}

/// Validated configuration used by the rest of the application.
///
/// Construct via `TryFrom<RawLauncherConfig>` (see `validate`); that is the
/// only place the raw TOML shape is checked.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Optional project root override, as a path.
    pub root: Option<PathBuf>,

    /// The build step gating all launches.
    pub build: BuildSection,

    /// The server process.
    pub server: ServerSection,

    /// The client processes.
    pub client: ClientSection,
}

impl LauncherConfig {
    /// Build a config without re-running validation.
    pub(crate) fn new_unchecked(raw: RawLauncherConfig) -> Self {
        Self {
            root: raw.root.map(PathBuf::from),
            build: raw.build,
            server: raw.server,
            client: raw.client,
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        // The default raw config always passes validation.
        Self::new_unchecked(RawLauncherConfig::default())
    }
}
