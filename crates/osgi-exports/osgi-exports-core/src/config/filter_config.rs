//! Export filter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_FILTER, EXPORT_PACKAGE_HEADER};
use crate::errors::ConfigError;

/// What to do when an archive's Export-Package header fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Propagate the error out of filter initialization.
    #[default]
    Fail,
    /// Log a warning and treat the archive as declaring no exports.
    Skip,
}

/// Configuration for the export filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Main manifest attribute holding the export clauses. Default: "Export-Package".
    pub header: Option<String>,
    /// Policy for malformed headers. Default: fail.
    pub on_parse_error: ParseErrorPolicy,
    /// Tracing filter used when `RUST_LOG` is unset. Default: "warn".
    pub log_filter: Option<String>,
}

impl FilterConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the filter silently read nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(header) = &self.header {
            if header.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "header".to_string(),
                    reason: "manifest attribute name must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the manifest attribute to read, defaulting to "Export-Package".
    pub fn effective_header(&self) -> &str {
        self.header.as_deref().unwrap_or(EXPORT_PACKAGE_HEADER)
    }

    /// Returns the tracing filter directive, defaulting to "warn".
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
