//! Error code and message tests.

use std::io;

use osgi_exports_core::{ArchiveError, ExportErrorCode, FilterConfig, FilterError, ParseError};

fn unexpected(index: usize, input: &str) -> ParseError {
    ParseError::UnexpectedCharacter {
        index,
        input: input.to_string(),
    }
}

#[test]
fn parse_error_exposes_index_and_input() {
    let err = unexpected(3, "a.b-c");
    assert_eq!(err.index(), 3);
    assert_eq!(err.input(), "a.b-c");
    assert_eq!(
        err.to_string(),
        "could not parse the Export-Package directive: unexpected character at index 3 of directive:\na.b-c"
    );
}

#[test]
fn invalid_pattern_reports_pattern() {
    let err = ParseError::InvalidPattern {
        index: 7,
        input: "p;include:=(".to_string(),
        pattern: "(".to_string(),
        message: "unclosed group".to_string(),
    };
    assert_eq!(err.index(), 7);
    assert!(err.to_string().contains("`(`"));
    assert_eq!(err.error_code(), "PARSE_INVALID_PATTERN");
}

#[test]
fn archive_errors_name_the_archive() {
    let io_err = ArchiveError::Io {
        archive: "bundle.jar".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(io_err.archive(), "bundle.jar");
    assert_eq!(io_err.error_code(), "ARCHIVE_IO");

    let malformed = ArchiveError::MalformedManifest {
        archive: "bundle.jar".to_string(),
        line: 4,
    };
    assert_eq!(
        malformed.to_string(),
        "malformed manifest in archive bundle.jar at line 4"
    );
    assert_eq!(malformed.error_code(), "ARCHIVE_MALFORMED_MANIFEST");
}

#[test]
fn filter_error_delegates_codes() {
    let from_config: FilterError = FilterConfig::from_toml("on_parse_error = \"retry\"")
        .unwrap_err()
        .into();
    assert_eq!(from_config.error_code(), "CONFIG_DECODE");

    let header = FilterError::Header {
        archive: "bundle.jar".to_string(),
        source: ParseError::UnexpectedEnd {
            index: 2,
            input: "a:".to_string(),
        },
    };
    assert_eq!(header.error_code(), "PARSE_UNEXPECTED_END");
    assert!(header
        .to_string()
        .starts_with("Export-Package header of archive bundle.jar is invalid"));
}

#[test]
fn filter_error_keeps_source_chain() {
    use std::error::Error;

    let err = FilterError::Header {
        archive: "x".to_string(),
        source: unexpected(1, "a,;"),
    };
    let source = err.source().expect("parse error as source");
    assert!(source.to_string().contains("unexpected character at index 1"));
}

#[test]
fn invalid_jar_has_its_own_code() {
    let err = ArchiveError::InvalidJar {
        archive: "broken.jar".to_string(),
        message: "invalid Zip archive".to_string(),
    };
    assert_eq!(err.archive(), "broken.jar");
    assert_eq!(err.error_code(), "ARCHIVE_INVALID_JAR");
    assert_eq!(
        err.to_string(),
        "archive broken.jar is not a readable jar: invalid Zip archive"
    );
}
