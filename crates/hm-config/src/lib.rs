mod config;
mod database_config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod provisioning_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provisioning_config::ProvisioningConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_IDENTITY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 3;
const MAX_SLUG_ATTEMPTS_LIMIT: u32 = 10;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const MIN_PORT: u16 = 1024;
