//! Configuration loading errors.

use super::error_code::{self, ExportErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to decode config: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ExportErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Decode(_) => error_code::CONFIG_DECODE,
            Self::InvalidValue { .. } => error_code::CONFIG_INVALID_VALUE,
        }
    }
}
