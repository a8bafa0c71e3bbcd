//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use hyperview::config::AppConfig;
use hyperview_core::ThemePreference;
use serial_test::serial;

/// Fresh config directory under the system temp dir
fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hyperview-config-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HV_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HV_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.view.sensitivity, builtin.view.sensitivity);
    assert_eq!(config.view.friction, builtin.view.friction);
    assert_eq!(config.view.scale, builtin.view.scale);
    assert_eq!(config.view.canvas_size(), builtin.view.canvas_size());
    // Friction is per frame; the shipped config keeps frames paced by the display
    assert!(config.window.vsync);
    assert!(config.view.validate().is_ok());
}

#[test]
#[serial]
fn test_missing_directory_gives_defaults() {
    let dir = temp_config_dir("missing").join("nope");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "Hypercube");
    assert_eq!(config.theme.preference, ThemePreference::System);
}

#[test]
#[serial]
fn test_layer_priority() {
    let dir = temp_config_dir("priority");
    fs::write(
        dir.join("default.toml"),
        "[view]\nfriction = 0.99\nscale = 200.0\n\n[theme]\npreference = \"light\"\n",
    )
    .unwrap();
    fs::write(dir.join("user.toml"), "[view]\nscale = 300.0\n").unwrap();
    std::env::set_var("HV_THEME__PREFERENCE", "dark");

    let config = AppConfig::load_from(&dir).unwrap();
    std::env::remove_var("HV_THEME__PREFERENCE");
    let _ = fs::remove_dir_all(&dir);

    // default.toml only
    assert_eq!(config.view.friction, 0.99);
    // user.toml beats default.toml
    assert_eq!(config.view.scale, 300.0);
    // environment beats both
    assert_eq!(config.theme.preference, ThemePreference::Dark);
    // untouched keys fall back to built-in defaults
    assert_eq!(config.view.sensitivity, 0.002);
}

#[test]
#[serial]
fn test_bad_value_is_reported() {
    let dir = temp_config_dir("bad");
    fs::write(dir.join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    let _ = fs::remove_dir_all(&dir);

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_growing_friction_is_rejected() {
    let dir = temp_config_dir("friction");
    fs::write(dir.join("default.toml"), "[view]\nfriction = 1.5\n").unwrap();

    let result = AppConfig::load_from(&dir);
    let _ = fs::remove_dir_all(&dir);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("view.friction"));
}

#[test]
#[serial]
fn test_invalid_env_value_is_rejected() {
    let dir = temp_config_dir("env-scale");
    std::env::set_var("HV_VIEW__SCALE", "0.0");

    let result = AppConfig::load_from(&dir);
    std::env::remove_var("HV_VIEW__SCALE");
    let _ = fs::remove_dir_all(&dir);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("view.scale"));
}

#[test]
#[serial]
fn test_camera_inside_geometry_is_rejected() {
    let dir = temp_config_dir("distance");
    fs::write(dir.join("user.toml"), "[view]\nw_distance = -1.0\n").unwrap();

    let result = AppConfig::load_from(&dir);
    let _ = fs::remove_dir_all(&dir);

    assert!(result.is_err());
}
