//! Manifest constants shared across the workspace.

/// Main manifest attribute listing the packages a bundle exports.
pub const EXPORT_PACKAGE_HEADER: &str = "Export-Package";

/// Location of the manifest inside a bundle, relative to the bundle root.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Directive restricting the exported classes to those matching its patterns.
pub const INCLUDE_DIRECTIVE: &str = "include";

/// Directive removing matching classes from the exported set.
pub const EXCLUDE_DIRECTIVE: &str = "exclude";

/// Default tracing filter when neither `RUST_LOG` nor config provide one.
pub const DEFAULT_LOG_FILTER: &str = "warn";
