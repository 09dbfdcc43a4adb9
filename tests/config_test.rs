// tests/config_test.rs
use bumpy::config::{load_config, Config};
use bumpy::BumpyError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_explicit_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
prefix = "api/"
push = "origin"
module = "services/api"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let repo_dir = TempDir::new().unwrap();
    let config = load_config(Some(temp_file.path()), repo_dir.path()).unwrap();

    assert_eq!(config.prefix.as_deref(), Some("api/"));
    assert_eq!(config.push.as_deref(), Some("origin"));
    assert_eq!(config.module, Some(PathBuf::from("services/api")));
}

#[test]
fn test_repository_file_is_found() {
    let repo_dir = TempDir::new().unwrap();
    std::fs::write(repo_dir.path().join("bumpy.toml"), "push = \"upstream\"\n").unwrap();

    let config = load_config(None, repo_dir.path()).unwrap();
    assert_eq!(config.push.as_deref(), Some("upstream"));
    assert_eq!(config.prefix, None);
}

#[test]
fn test_explicit_file_wins_over_repository_file() {
    let repo_dir = TempDir::new().unwrap();
    std::fs::write(repo_dir.path().join("bumpy.toml"), "prefix = \"repo-\"\n").unwrap();

    let mut explicit = NamedTempFile::new().unwrap();
    explicit.write_all(b"prefix = \"explicit-\"\n").unwrap();
    explicit.flush().unwrap();

    let config = load_config(Some(explicit.path()), repo_dir.path()).unwrap();
    assert_eq!(config.prefix.as_deref(), Some("explicit-"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let repo_dir = TempDir::new().unwrap();
    let missing = repo_dir.path().join("nope.toml");

    let err = load_config(Some(missing.as_path()), repo_dir.path()).unwrap_err();
    assert!(matches!(err, BumpyError::Config(_)));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let repo_dir = TempDir::new().unwrap();
    std::fs::write(repo_dir.path().join("bumpy.toml"), "push = 42\n").unwrap();

    let err = load_config(None, repo_dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_default_config_is_empty() {
    let config = Config::default();
    assert_eq!(config.prefix, None);
    assert_eq!(config.push, None);
    assert_eq!(config.module, None);
}
