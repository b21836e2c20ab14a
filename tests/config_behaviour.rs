// tests/config_behaviour.rs

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use chatdev::config::{LauncherConfig, load_and_validate, load_or_default};
use chatdev::errors::LauncherError;

#[test]
fn defaults_match_the_manual_workflow() {
    let cfg = LauncherConfig::default();

    assert_eq!(cfg.build.cmd, "cargo build");
    assert_eq!(cfg.server.cmd, "cargo run -p chat-server");
    assert_eq!(cfg.client.cmd, "cargo run -p chat-client");
    assert_eq!(cfg.client.count, 2);
    assert!(cfg.root.is_none());
}

#[test]
fn toml_values_override_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
root = "/tmp"

[build]
cmd = "cargo build --workspace"

[client]
count = 5
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.build.cmd, "cargo build --workspace");
    assert_eq!(cfg.client.count, 5);
    assert_eq!(cfg.root.as_deref(), Some(Path::new("/tmp")));

    // Untouched sections keep their defaults.
    assert_eq!(cfg.server.cmd, "cargo run -p chat-server");
    assert_eq!(cfg.client.cmd, "cargo run -p chat-client");
}

#[test]
fn zero_client_count_is_accepted() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[client]
count = 0
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.client.count, 0);
}

#[test]
fn empty_command_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[server]
cmd = ""
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(LauncherError::ConfigError(msg)) => {
            assert!(msg.contains("[server].cmd"));
        }
        Err(e) => panic!("Expected ConfigError, got: {e:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_root_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
root = "  "
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(LauncherError::ConfigError(_))));
}

#[test]
fn invalid_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "client = [not valid toml").unwrap();

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(LauncherError::TomlError(_))));
}

#[test]
fn explicitly_given_missing_config_path_errors() {
    let result = load_or_default(Some(Path::new("/definitely/not/Chatdev.toml")));
    assert!(matches!(result, Err(LauncherError::IoError(_))));
}

#[test]
fn missing_default_config_falls_back_to_defaults() {
    // The test working directory has no Chatdev.toml, so the built-in
    // defaults apply.
    let cfg = load_or_default(None).unwrap();
    assert_eq!(cfg.client.count, 2);
    assert_eq!(cfg.build.cmd, "cargo build");
}
