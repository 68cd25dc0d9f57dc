mod config;
mod database_config;
mod error;
mod features_config;
mod jobs_config;
mod log_level;
mod logging_config;
mod orcid_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use features_config::FeaturesConfig;
pub use jobs_config::JobsConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use orcid_config::OrcidConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_TOKEN_URL: &str = "https://orcid.org/oauth/token";
const DEFAULT_API_URL: &str = "https://api.orcid.org/v3.0";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_INGEST_QUEUE_NAME: &str = "ingest";
