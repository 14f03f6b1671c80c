//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `will_clinic=debug`
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Build the subscriber filter, preferring `RUST_LOG` when it is set.
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.filter).map_err(|e| ValidationError::InvalidLogFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.filter"));
        }
        EnvFilter::try_new(&self.filter).map_err(|e| ValidationError::InvalidLogFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "will_clinic=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "will_clinic=info");
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_filter_is_missing() {
        let config = LoggingConfig {
            filter: "  ".to_string(),
            json: false,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("logging.filter"))
        ));
    }

    #[test]
    fn test_unparseable_filter_is_rejected() {
        let config = LoggingConfig {
            filter: "will_clinic=loud".to_string(),
            json: false,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter { .. })
        ));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{ "filter": "debug", "json": true }"#;
        let config: LoggingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.filter, "debug");
        assert!(config.json);
    }
}
