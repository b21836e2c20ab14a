// tests/root_resolution.rs

use std::path::Path;

use chatdev::errors::LauncherError;
use chatdev::root::resolve_root;

#[test]
fn configured_root_resolves_to_existing_directory() {
    let dir = tempfile::tempdir().unwrap();

    let root = resolve_root(Some(dir.path())).unwrap();

    assert!(root.is_dir());
    // Canonicalized, so symlinks and relative components are gone.
    assert!(root.is_absolute());
}

#[test]
fn missing_configured_root_is_a_path_resolution_error() {
    let result = resolve_root(Some(Path::new("/definitely/not/a/real/dir")));

    match result {
        Err(LauncherError::PathResolution(msg)) => {
            assert!(msg.contains("/definitely/not/a/real/dir"));
        }
        Err(e) => panic!("Expected PathResolution, got: {e:?}"),
        Ok(p) => panic!("Expected error, got Ok({})", p.display()),
    }
}

#[test]
fn file_is_rejected_as_root() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let result = resolve_root(Some(file.path()));

    assert!(matches!(result, Err(LauncherError::PathResolution(_))));
}

#[test]
fn derived_root_points_one_level_above_the_executable_directory() {
    // Without a configured root, resolution walks up from the test
    // executable's own location; for a cargo test binary that directory
    // always exists.
    let root = resolve_root(None).unwrap();
    assert!(root.is_dir());
}
