//! Errors raised by the Export-Package header parser.

use super::error_code::{self, ExportErrorCode};

/// The header violates the Export-Package grammar.
///
/// Every variant carries the 0-based character index at which parsing stopped
/// and the complete header, so callers can point at the offending position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("could not parse the Export-Package directive: unexpected character at index {index} of directive:\n{input}")]
    UnexpectedCharacter { index: usize, input: String },

    #[error("could not parse the Export-Package directive: input ends unexpectedly at index {index} of directive:\n{input}")]
    UnexpectedEnd { index: usize, input: String },

    #[error("could not parse the Export-Package directive: invalid class name pattern `{pattern}` at index {index} ({message}) of directive:\n{input}")]
    InvalidPattern {
        index: usize,
        input: String,
        pattern: String,
        message: String,
    },
}

impl ParseError {
    /// Character index where parsing stopped.
    pub fn index(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { index, .. }
            | Self::UnexpectedEnd { index, .. }
            | Self::InvalidPattern { index, .. } => *index,
        }
    }

    /// The full header that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::UnexpectedCharacter { input, .. }
            | Self::UnexpectedEnd { input, .. }
            | Self::InvalidPattern { input, .. } => input,
        }
    }
}

impl ExportErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter { .. } => error_code::PARSE_UNEXPECTED_CHARACTER,
            Self::UnexpectedEnd { .. } => error_code::PARSE_UNEXPECTED_END,
            Self::InvalidPattern { .. } => error_code::PARSE_INVALID_PATTERN,
        }
    }
}
