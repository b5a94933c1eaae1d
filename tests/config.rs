use termidex::config::Config;
use termidex::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(config.ui.mouse_enabled);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Timeout of zero should fail
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());

    // Excessive timeout should fail
    config.api.timeout_secs = 600;
    assert!(config.validate().is_err());

    // Reset and test a non-http base URL
    config.api.timeout_secs = 10;
    config.api.base_url = "ftp://pokeapi.co".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"https://pokeapi.co/api/v2\""));
    assert!(toml_str.contains("timeout_secs = 10"));
    assert!(toml_str.contains("mouse_enabled = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
timeout_secs = 30

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.api.timeout_secs, 30);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert!(config.ui.mouse_enabled);
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.api.timeout_secs, default_config.api.timeout_secs);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("termidex.toml");
    std::fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_generate_default_config_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
}
