//! File-based server configuration.
//!
//! The configuration lives in `config.toml` inside the service's config
//! directory. Missing keys fall back to defaults; a missing file is created
//! with the defaults on first start.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

/// Environment variable naming the config directory explicitly.
pub const CONFIG_DIR_ENV: &str = "CAMERA_SERVICE_CONFIG";

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while locating, reading or creating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not resolve config path: none of CAMERA_SERVICE_CONFIG, XDG_CONFIG_HOME or HOME is set")]
    NoConfigDir,

    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not create default config file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Server configuration.
///
/// | Key                    | Default     |
/// |------------------------|-------------|
/// | `host`                 | `0.0.0.0`   |
/// | `port`                 | `3000`      |
/// | `request_timeout_secs` | `30`        |
/// | `db.hostname`          | `localhost` |
/// | `db.port`              | `5432`      |
/// | `db.database`          | `""`        |
/// | `db.user`              | `""`        |
/// | `db.password`          | `""`        |
/// | `cors.allow_all_origins` | `false`   |
/// | `cors.allowed_origins` | `[]`        |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Database connection settings.
    pub db: DbConfig,
    /// Cross-origin policy.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            request_timeout_secs: 30,
            db: DbConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub hostname: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            hostname: "localhost".into(),
            port: 5432,
            database: String::new(),
            user: String::new(),
            password: String::new(),
        }
    }
}

impl DbConfig {
    /// Connection options for the pool. Empty settings are left to the
    /// driver's own defaults (`PG*` environment variables).
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.hostname)
            .port(self.port);
        if !self.database.is_empty() {
            options = options.database(&self.database);
        }
        if !self.user.is_empty() {
            options = options.username(&self.user);
        }
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        options
    }
}

/// Cross-origin resource sharing policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Accept any origin; `allowed_origins` is ignored when set.
    pub allow_all_origins: bool,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load the configuration from the resolved config directory.
    pub fn load() -> Result<Self, ConfigError> {
        let dir = resolve_config_dir(|key| std::env::var_os(key))?;
        Self::load_from_dir(&dir)
    }

    /// Load `config.toml` from `dir`, creating the directory and a default
    /// file when they do not exist yet.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(CONFIG_FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(file = %path.display(), "Loaded service config from config file");
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                let contents = toml::to_string_pretty(&config)?;
                fs::write(&path, contents).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(file = %path.display(), "Config file not found, created default config file");
                Ok(config)
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }
}

/// Resolve the config directory: `$CAMERA_SERVICE_CONFIG`, then
/// `$XDG_CONFIG_HOME/camera_service`, then `$HOME/.config/camera_service`.
pub fn resolve_config_dir(
    lookup: impl Fn(&str) -> Option<OsString>,
) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = lookup(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = lookup("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("camera_service"));
    }
    if let Some(home) = lookup("HOME") {
        return Ok(PathBuf::from(home).join(".config").join("camera_service"));
    }
    Err(ConfigError::NoConfigDir)
}
