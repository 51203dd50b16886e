use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_SLUG_ATTEMPTS, MAX_SLUG_ATTEMPTS_LIMIT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    /// How many slug/code candidates to try before giving up on a
    /// uniqueness conflict
    pub max_slug_attempts: u32,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            max_slug_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
        }
    }
}

impl ProvisioningConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_slug_attempts == 0 || self.max_slug_attempts > MAX_SLUG_ATTEMPTS_LIMIT {
            return Err(ConfigError::provisioning(format!(
                "provisioning.max_slug_attempts must be 1-{}, got {}",
                MAX_SLUG_ATTEMPTS_LIMIT, self.max_slug_attempts
            )));
        }

        Ok(())
    }
}
