//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use trellis_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_trellis_config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[layout]
gutter = 6

[hints]
alphabet = "qwerty"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.gutter, 6);
    assert_eq!(config.hints.alphabet, "qwerty");
    assert_eq!(config.session.max_workspaces, 9);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_does_not_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\ngutter = 500\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.gutter, 500);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trellis").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.gutter, 1);
    assert_eq!(config.keybinds.toggle_hints, "F");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_trellis() {
    let path = default_config_path().unwrap();
    assert!(path.ends_with("trellis/config.toml"));
}
