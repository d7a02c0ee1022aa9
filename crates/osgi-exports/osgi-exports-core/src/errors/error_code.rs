//! Stable error codes, independent of the human-readable messages.

/// Every error in the workspace maps to a stable code string.
pub trait ExportErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const PARSE_UNEXPECTED_CHARACTER: &str = "PARSE_UNEXPECTED_CHARACTER";
pub const PARSE_UNEXPECTED_END: &str = "PARSE_UNEXPECTED_END";
pub const PARSE_INVALID_PATTERN: &str = "PARSE_INVALID_PATTERN";
pub const ARCHIVE_IO: &str = "ARCHIVE_IO";
pub const ARCHIVE_MALFORMED_MANIFEST: &str = "ARCHIVE_MALFORMED_MANIFEST";
pub const ARCHIVE_INVALID_JAR: &str = "ARCHIVE_INVALID_JAR";
pub const CONFIG_DECODE: &str = "CONFIG_DECODE";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";
