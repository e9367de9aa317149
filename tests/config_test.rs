//! Integration tests for Settings loading from an explicit config file.
//!
//! Every test holds ENV_LOCK: the env layer reads process-wide MAPNODE_*
//! variables, which one test sets temporarily.

use std::env;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use mapnode::application::ApplicationError;
use mapnode::config::Settings;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn given_no_config_file_when_loading_then_uses_defaults() {
    let _guard = env_lock();
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(temp.path().join("absent.toml").as_path())).expect("load");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_with_layout_when_loading_then_overrides_only_given_fields() {
    let _guard = env_lock();
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mapnode.toml");
    fs::write(
        &path,
        r#"
color = false

[layout]
node_width = 240.0
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(path.as_path())).expect("load settings");

    // Assert
    assert!(!settings.color);
    assert_eq!(settings.layout.node_width, 240.0);
    assert_eq!(settings.layout.node_height, 100.0);
    assert_eq!(settings.layout.drag_opacity, 0.5);
}

#[test]
fn given_env_vars_and_config_file_when_loading_then_env_wins() {
    let _guard = env_lock();
    // Arrange: file sets width 300 and color on, env overrides both
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mapnode.toml");
    fs::write(&path, "color = true\n\n[layout]\nnode_width = 300.0\nnode_height = 80.0\n").unwrap();
    env::set_var("MAPNODE_LAYOUT__NODE_WIDTH", "240");
    env::set_var("MAPNODE_COLOR", "false");

    // Act
    let result = Settings::load_from(Some(path.as_path()));
    env::remove_var("MAPNODE_LAYOUT__NODE_WIDTH");
    env::remove_var("MAPNODE_COLOR");
    let settings = result.expect("load settings");

    // Assert
    assert_eq!(settings.layout.node_width, 240.0);
    assert!(!settings.color);
    // untouched by env, file value stays
    assert_eq!(settings.layout.node_height, 80.0);
}

#[test]
fn given_malformed_config_when_loading_then_config_error() {
    let _guard = env_lock();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mapnode.toml");
    fs::write(&path, "[layout\nnode_width = ").unwrap();

    let result = Settings::load_from(Some(path.as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_opacity_out_of_range_when_loading_then_config_error() {
    let _guard = env_lock();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mapnode.toml");
    fs::write(&path, "[layout]\ndrag_opacity = 1.5\n").unwrap();

    let err = Settings::load_from(Some(path.as_path())).unwrap_err();

    assert!(err.to_string().contains("drag_opacity"));
}
