//! # osgi-exports-filter
//!
//! Decides which classes of a bundle belong to its public surface.
//! Contains the Export-Package header parser, export definitions,
//! manifest and archive reading, and the per-API export filter.

pub mod element;
pub mod exports;
pub mod filter;
pub mod manifest;

pub use element::{ApiElement, ApiSide, Element, TypeCoordinates};
pub use exports::definition::ExportDefinition;
pub use exports::parser::{parse, parse_header};
pub use exports::pattern::ClassPattern;
pub use filter::{Api, ExportPackageFilter};
pub use manifest::archive::{
    Archive, BundleDirectory, InMemoryArchive, JarArchive, ManifestFile,
};
pub use manifest::Manifest;
