use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, FeaturesConfig, JobsConfig, LogLevel,
    LoggingConfig, OrcidConfig, ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub orcid: OrcidConfig,
    pub features: FeaturesConfig,
    pub jobs: JobsConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for ATRIUM_CONFIG_DIR env var, else use ./.atrium/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ATRIUM_CONFIG_DIR env var > ./.atrium/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("ATRIUM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".atrium"))
    }

    /// Environment variables beat config.toml. The ORCID client
    /// credentials are secrets and usually arrive only this way.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ATRIUM_SERVER_HOST") {
            self.server.host = host;
        }
        #[allow(clippy::collapsible_if)]
        if let Ok(port) = std::env::var("ATRIUM_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(path) = std::env::var("ATRIUM_DATABASE_PATH") {
            self.database.path = path;
        }
        #[allow(clippy::collapsible_if)]
        if let Ok(level) = std::env::var("ATRIUM_LOG_LEVEL") {
            if let Ok(level) = LogLevel::from_str(&level) {
                self.logging.level = level;
            }
        }
        if let Ok(client_id) = std::env::var("ORCID_CLIENT_ID") {
            self.orcid.client_id = Some(client_id);
        }
        if let Ok(client_secret) = std::env::var("ORCID_CLIENT_SECRET") {
            self.orcid.client_secret = Some(client_secret);
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.orcid.validate()?;
        self.jobs.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// One-line-per-section startup summary. Secrets are reported only by
    /// presence.
    pub fn log_summary(&self) {
        info!("Config: server {}", self.bind_addr());
        info!("Config: database {}", self.database.path);
        info!(
            "Config: orcid token_url={} api_url={} timeout={}s credentials={}",
            self.orcid.token_url,
            self.orcid.api_url,
            self.orcid.request_timeout_secs,
            if self.orcid.client_id.is_some() {
                "configured"
            } else {
                "absent"
            }
        );
        info!("Config: jobs ingest_queue={}", self.jobs.ingest_queue_name);
    }
}
