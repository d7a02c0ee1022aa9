//! Errors reading a bundle archive or its manifest.

use super::error_code::{self, ExportErrorCode};

/// The archive could not be opened, or its manifest is not well formed.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to read archive {archive}: {source}")]
    Io {
        archive: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest in archive {archive} at line {line}")]
    MalformedManifest { archive: String, line: usize },

    #[error("archive {archive} is not a readable jar: {message}")]
    InvalidJar { archive: String, message: String },
}

impl ArchiveError {
    /// Name of the archive the error refers to.
    pub fn archive(&self) -> &str {
        match self {
            Self::Io { archive, .. }
            | Self::MalformedManifest { archive, .. }
            | Self::InvalidJar { archive, .. } => archive,
        }
    }
}

impl ExportErrorCode for ArchiveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::ARCHIVE_IO,
            Self::MalformedManifest { .. } => error_code::ARCHIVE_MALFORMED_MANIFEST,
            Self::InvalidJar { .. } => error_code::ARCHIVE_INVALID_JAR,
        }
    }
}
