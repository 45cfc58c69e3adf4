#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use super::*;
use crate::test_fixtures::create_temp_dir;

const MINIMAL: &str = r#"{
    "repo_url": "https://github.com/example/app.git",
    "repo_dir": "app",
    "startup_script": "main.py"
}"#;

#[test]
fn test_minimal_config_uses_defaults() {
    let config = LauncherConfig::from_json(MINIMAL, "repo.json").expect("parse");
    assert_eq!(config.repo_url, "https://github.com/example/app.git");
    assert_eq!(config.repo_dir, PathBuf::from("app"));
    assert!(config.icon.is_none());
    assert!(config.venv_folder.is_none());
    assert!(!config.use_pythonw);
    assert!(config.pip_args.is_empty());
    assert!(!config.base_python().is_empty());
}

#[test]
fn test_full_config() {
    let json = r#"{
        "repo_url": "git@github.com:example/app.git",
        "repo_dir": "app",
        "startup_script": "run.py",
        "icon": "icon.ico",
        "python": "/opt/python/bin/python3.11",
        "venv_folder": "venv",
        "use_pythonw": true,
        "pip_args": ["--no-cache-dir"],
        "locale": "de",
        "translations": "translations.json"
    }"#;
    let config = LauncherConfig::from_json(json, "repo.json").expect("parse");
    assert_eq!(config.base_python(), "/opt/python/bin/python3.11");
    assert_eq!(config.pip_args, vec!["--no-cache-dir".to_string()]);
    assert_eq!(config.locale.as_deref(), Some("de"));
    assert!(config.use_pythonw);
}

#[test]
fn test_missing_field_names_the_field() {
    let json = r#"{ "repo_url": "https://example.com/app.git", "repo_dir": "app" }"#;
    let err = LauncherConfig::from_json(json, "repo.json").expect_err("should fail");
    match err {
        LauncherError::ConfigParseFailed { path, reason } => {
            assert_eq!(path, "repo.json");
            assert!(reason.contains("startup_script"), "got: {reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_wrong_type_reports_json_path() {
    let json = r#"{
        "repo_url": "https://example.com/app.git",
        "repo_dir": "app",
        "startup_script": "main.py",
        "pip_args": "--no-cache-dir"
    }"#;
    let err = LauncherConfig::from_json(json, "repo.json").expect_err("should fail");
    assert!(err.to_string().contains("repo.json"));
    match err {
        LauncherError::ConfigParseFailed { reason, .. } => assert!(reason.starts_with("pip_args")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_missing_file() {
    let temp = create_temp_dir();
    let err = LauncherConfig::load(&temp.path().join("repo.json")).expect_err("should fail");
    assert!(matches!(err, LauncherError::ConfigNotFound { .. }));
}

#[test]
fn test_load_and_resolve_relative_paths() {
    let temp = create_temp_dir();
    let path = temp.path().join("repo.json");
    std::fs::write(&path, MINIMAL).expect("write");

    let config = LauncherConfig::load(&path)
        .expect("load")
        .resolved_against(temp.path());
    let target = config.remote_target();

    assert_eq!(target.local_path, temp.path().join("app"));
    assert_eq!(target.url, "https://github.com/example/app.git");
}

#[test]
fn test_absolute_paths_are_kept() {
    let mut config = LauncherConfig::from_json(MINIMAL, "repo.json").expect("parse");
    let absolute = crate::temp::temp_dir_base().join("elsewhere");
    config.repo_dir = absolute.clone();

    let config = config.resolved_against(Path::new("/work"));
    assert_eq!(config.repo_dir, absolute);
}
