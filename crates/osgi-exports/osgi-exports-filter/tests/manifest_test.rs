//! Manifest reading through the public API.

use osgi_exports_core::{ArchiveError, ExportErrorCode};
use osgi_exports_filter::{Archive, InMemoryArchive, Manifest};

// ─── Line handling ─────────────────────────────────────────────────────────

#[test]
fn continuation_lines_extend_the_previous_value() {
    let manifest = Manifest::parse(
        "a.jar",
        "Manifest-Version: 1.0\nExport-Package: com.acme.api,\n com.acme\n .spi\n",
    )
    .unwrap();

    assert_eq!(manifest.len(), 2);
    assert_eq!(
        manifest.main_attribute("Export-Package"),
        Some("com.acme.api,com.acme.spi")
    );
}

#[test]
fn crlf_and_cr_line_endings_read_like_lf() {
    let lf = Manifest::parse("a.jar", "Export-Package: a.b\n .c\nBundle-Name: x\n").unwrap();
    let crlf =
        Manifest::parse("a.jar", "Export-Package: a.b\r\n .c\r\nBundle-Name: x\r\n").unwrap();
    let cr = Manifest::parse("a.jar", "Export-Package: a.b\r .c\rBundle-Name: x\r").unwrap();

    assert_eq!(lf, crlf);
    assert_eq!(lf, cr);
    assert_eq!(cr.main_attribute("export-package"), Some("a.b.c"));
}

#[test]
fn per_entry_sections_are_ignored() {
    let manifest = Manifest::parse(
        "a.jar",
        "Export-Package: a\n\nName: a/B.class\nExport-Package: ignored\n",
    )
    .unwrap();

    assert_eq!(manifest.main_attribute("Export-Package"), Some("a"));
    assert_eq!(manifest.main_attribute("Name"), None);
}

#[test]
fn leading_continuation_is_malformed() {
    let err = Manifest::parse("a.jar", " orphan\n").unwrap_err();
    match &err {
        ArchiveError::MalformedManifest { archive, line } => {
            assert_eq!(archive, "a.jar");
            assert_eq!(*line, 1);
        }
        other => panic!("expected malformed manifest, got {other:?}"),
    }
    assert_eq!(err.error_code(), "ARCHIVE_MALFORMED_MANIFEST");
}

// ─── Archives ──────────────────────────────────────────────────────────────

#[test]
fn in_memory_archive_joins_continuations() {
    let archive = InMemoryArchive::new("mem.jar", "Export-Package: long.pack\n age.name\n");
    let manifest = archive.read_manifest().unwrap().unwrap();

    assert_eq!(archive.name(), "mem.jar");
    assert_eq!(manifest.main_attribute("Export-Package"), Some("long.package.name"));
}

#[test]
fn in_memory_archive_without_manifest() {
    let archive = InMemoryArchive::without_manifest("empty.jar");
    assert!(archive.read_manifest().unwrap().is_none());
}
