use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub collection: CollectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionConfig {
    /// Upper bound for each report command (df, ps); exceeding it fails the request.
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
    /// Program and arguments printing a disk-usage table for the root filesystem.
    #[serde(default = "default_disk_command")]
    pub disk_command: Vec<String>,
    /// Program and arguments printing the process table.
    #[serde(default = "default_process_command")]
    pub process_command: Vec<String>,
}

fn default_command_timeout_ms() -> u64 {
    5000
}

fn default_disk_command() -> Vec<String> {
    vec!["df".into(), "-h".into(), "/".into()]
}

fn default_process_command() -> Vec<String> {
    vec!["ps".into(), "-ax".into()]
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: default_command_timeout_ms(),
            disk_command: default_disk_command(),
            process_command: default_process_command(),
        }
    }
}

impl CollectionConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

impl AppConfig {
    /// Loads `CONFIG_FILE` (default `config.toml`). Built-in defaults apply only
    /// when no explicit path is set and the default file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_PATH)
            }
            Err(_) => {
                tracing::info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.collection.command_timeout_ms > 0,
            "collection.command_timeout_ms must be > 0, got {}",
            self.collection.command_timeout_ms
        );
        anyhow::ensure!(
            self.collection
                .disk_command
                .first()
                .is_some_and(|p| !p.is_empty()),
            "collection.disk_command must name a program"
        );
        anyhow::ensure!(
            self.collection
                .process_command
                .first()
                .is_some_and(|p| !p.is_empty()),
            "collection.process_command must name a program"
        );
        Ok(())
    }
}
