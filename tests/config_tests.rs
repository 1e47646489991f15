// Config loading and validation tests

use hostinfo::config::AppConfig;
use std::io::Write;
use std::time::Duration;

const VALID_CONFIG: &str = r#"
[server]
port = 5000
host = "0.0.0.0"

[collection]
command_timeout_ms = 2500
disk_command = ["df", "-P", "-h", "/"]
process_command = ["ps", "-ax"]
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(
        config.collection.command_timeout(),
        Duration::from_millis(2500)
    );
    assert_eq!(config.collection.disk_command, vec!["df", "-P", "-h", "/"]);
    assert_eq!(config.collection.process_command, vec!["ps", "-ax"]);
}

#[test]
fn test_config_collection_section_defaults() {
    let config = AppConfig::load_from_str("[server]\nport = 8080\nhost = \"127.0.0.1\"\n")
        .expect("load_from_str");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.collection.command_timeout_ms, 5000);
    assert_eq!(config.collection.disk_command, vec!["df", "-h", "/"]);
    assert_eq!(config.collection.process_command, vec!["ps", "-ax"]);
}

#[test]
fn test_config_empty_uses_defaults() {
    let config = AppConfig::load_from_str("").expect("load_from_str");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 5000", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_zero_timeout() {
    let bad = VALID_CONFIG.replace("command_timeout_ms = 2500", "command_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("command_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_empty_disk_command() {
    let bad = VALID_CONFIG.replace(r#"["df", "-P", "-h", "/"]"#, "[]");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("disk_command"));
}

#[test]
fn test_config_validation_rejects_blank_process_program() {
    let bad = VALID_CONFIG.replace(r#"["ps", "-ax"]"#, r#"["", "-ax"]"#);
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("process_command"));
}

#[test]
fn test_config_rejects_malformed_toml() {
    assert!(AppConfig::load_from_str("[server\nport = ").is_err());
}

#[test]
fn test_config_loads_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_CONFIG.as_bytes()).unwrap();
    let config = AppConfig::load_from_path(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.collection.command_timeout_ms, 2500);
}

#[test]
fn test_config_missing_path_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = AppConfig::load_from_path(missing.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("reading config"));
}
