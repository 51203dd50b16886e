use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_TIMEOUT_SECS};

use serde::Deserialize;

/// Connection settings for the external identity provider.
///
/// The keys are secrets and normally arrive via `HM_IDENTITY_ANON_KEY` /
/// `HM_IDENTITY_SERVICE_KEY` rather than the TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub base_url: String,
    /// Key used for credential verification (sign-in)
    pub anon_key: String,
    /// Key used for administrative create/delete operations
    pub service_key: String,
    /// Per-request timeout for every provider call
    pub timeout_secs: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            service_key: String::new(),
            timeout_secs: DEFAULT_IDENTITY_TIMEOUT_SECS,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::identity(
                "identity.base_url must be set (HM_IDENTITY_URL)",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::identity(
                "identity.base_url must start with http:// or https://",
            ));
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::identity(
                "identity.anon_key must be set (HM_IDENTITY_ANON_KEY)",
            ));
        }

        if self.service_key.trim().is_empty() {
            return Err(ConfigError::identity(
                "identity.service_key must be set (HM_IDENTITY_SERVICE_KEY)",
            ));
        }

        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ConfigError::identity(format!(
                "identity.timeout_secs must be 1-60, got {}",
                self.timeout_secs
            )));
        }

        Ok(())
    }
}
