//! Dashboard configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What to do when a create would duplicate a natural key (CPF, CRM, CID).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with a duplicate-key error
    #[default]
    Reject,
    /// Accept the duplicate silently
    Allow,
}

/// Store and dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Natural key uniqueness policy for create/update
    pub duplicate_policy: DuplicatePolicy,
    /// Maximum rows in the upcoming appointments list
    pub upcoming_limit: u32,
    /// Maximum rows in the recent patients list
    pub recent_patients_limit: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            upcoming_limit: 5,
            recent_patients_limit: 5,
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would leave dashboard lists permanently empty.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.upcoming_limit == 0 {
            return Err(ConfigError::Invalid("upcomingLimit must be at least 1".into()));
        }
        if self.recent_patients_limit == 0 {
            return Err(ConfigError::Invalid(
                "recentPatientsLimit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.upcoming_limit, 5);
        assert_eq!(config.recent_patients_limit, 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DashboardConfig::from_json(r#"{"duplicatePolicy":"allow"}"#).unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Allow);
        assert_eq!(config.upcoming_limit, 5);
    }

    #[test]
    fn test_rejects_zero_limits() {
        let err = DashboardConfig::from_json(r#"{"upcomingLimit":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
