#![allow(dead_code)]

use chatdev::config::{LauncherConfig, RawLauncherConfig};

/// Builder for `LauncherConfig` to simplify test setup.
pub struct LauncherConfigBuilder {
    config: RawLauncherConfig,
}

impl LauncherConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawLauncherConfig::default(),
        }
    }

    pub fn build_cmd(mut self, cmd: &str) -> Self {
        self.config.build.cmd = cmd.to_string();
        self
    }

    pub fn server_cmd(mut self, cmd: &str) -> Self {
        self.config.server.cmd = cmd.to_string();
        self
    }

    pub fn client_cmd(mut self, cmd: &str) -> Self {
        self.config.client.cmd = cmd.to_string();
        self
    }

    pub fn client_count(mut self, count: usize) -> Self {
        self.config.client.count = count;
        self
    }

    pub fn root(mut self, root: &str) -> Self {
        self.config.root = Some(root.to_string());
        self
    }

    pub fn build(self) -> LauncherConfig {
        LauncherConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for LauncherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
