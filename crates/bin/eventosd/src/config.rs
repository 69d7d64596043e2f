//! Daemon settings: an optional `eventos.toml`, then `EVENTOS_*` variables.
//!
//! `EVENTOS_CONFIG` names another settings file. A missing file is not an
//! error; every key falls back to its default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_FILE: &str = "eventos.toml";

/// Daemon settings, grouped like the `[server]`, `[storage]` and `[logging]`
/// tables of the settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the eventos document lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding the `eventos` collection; created on first start.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

/// Source of override values, usually the process environment.
type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Environment variables applied in order, so later entries win.
const OVERRIDES: &[(&str, fn(&mut Config, String))] = &[
    ("EVENTOS_HOST", |config, value| config.server.host = value),
    ("EVENTOS_PORT", |config, value| {
        if let Ok(port) = value.parse() {
            config.server.port = port;
        }
    }),
    ("EVENTOS_BIND", |config, value| config.server.set_bind(&value)),
    ("EVENTOS_DB_PATH", |config, value| {
        config.storage.path = value.into();
    }),
    ("EVENTOS_LOG", |config, value| config.logging.filter = value),
    ("RUST_LOG", |config, value| config.logging.filter = value),
];

impl Config {
    /// Read the settings file named by `EVENTOS_CONFIG` (default
    /// `eventos.toml`) and apply the environment on top.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when the
    /// final settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let env = |key: &str| std::env::var(key).ok();
        let file = env("EVENTOS_CONFIG").unwrap_or_else(|| DEFAULT_FILE.to_string());
        Self::resolve(Path::new(&file), &env)
    }

    fn resolve(file: &Path, lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(file)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn apply_overrides(&mut self, lookup: Lookup<'_>) {
        for (key, apply) in OVERRIDES {
            if let Some(value) = lookup(key) {
                apply(self, value);
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.server.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyStoragePath);
        }
        Ok(())
    }

    /// `host:port` for [`tokio::net::TcpListener::bind`].
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn storage_path(&self) -> &Path {
        &self.storage.path
    }
}

impl ServerConfig {
    /// Apply a `host:port` pair. The host is kept when the port does not parse.
    fn set_bind(&mut self, bind: &str) {
        if let Some((host, port)) = bind.rsplit_once(':')
            && let Ok(port) = port.parse()
        {
            self.host = host.to_string();
            self.port = port;
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("db.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eventosd=info,eventos=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed settings file")]
    Parse(#[from] toml::de::Error),
    #[error("unreadable settings file")]
    Io(#[from] std::io::Error),
    #[error("server host must not be empty")]
    EmptyHost,
    #[error("server port must be non-zero")]
    ZeroPort,
    #[error("storage path must not be empty")]
    EmptyStoragePath,
}
