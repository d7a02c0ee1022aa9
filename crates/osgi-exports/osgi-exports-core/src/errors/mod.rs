//! Error types for the export filter, one file per error family.

pub mod error_code;

mod archive_error;
mod config_error;
mod filter_error;
mod parse_error;

pub use archive_error::ArchiveError;
pub use config_error::ConfigError;
pub use filter_error::{FilterError, FilterResult};
pub use parse_error::ParseError;
