use super::error_code::ExportErrorCode;
use super::{ConfigError, ParseError};

/// Top-level error type for the export filter.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Export-Package header of archive {archive} is invalid: {source}")]
    Header {
        archive: String,
        #[source]
        source: ParseError,
    },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias.
pub type FilterResult<T> = Result<T, FilterError>;

impl ExportErrorCode for FilterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Header { source, .. } => source.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
