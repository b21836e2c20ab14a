// src/config/mod.rs

//! Configuration layer.
//!
//! - [`model`] holds the raw TOML shape and the validated config.
//! - [`loader`] reads config files and applies the default-path fallback.
//! - [`validate`] checks the raw shape before it becomes a `LauncherConfig`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{BuildSection, ClientSection, LauncherConfig, RawLauncherConfig, ServerSection};
