//! # osgi-exports-core
//!
//! Foundation crate for the OSGi export filter.
//! Defines errors, error codes, config, tracing setup, collection aliases, and constants.
//! The filter crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{FilterConfig, ParseErrorPolicy};
pub use errors::error_code::ExportErrorCode;
pub use errors::{ArchiveError, ConfigError, FilterError, FilterResult, ParseError};
pub use types::collections::{FxHashMap, FxHashSet};
