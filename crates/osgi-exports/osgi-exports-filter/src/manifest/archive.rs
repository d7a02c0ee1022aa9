//! Sources of bundle manifests.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use osgi_exports_core::constants::MANIFEST_PATH;
use osgi_exports_core::ArchiveError;

use super::Manifest;

/// A bundle that may carry a manifest.
pub trait Archive: Send + Sync {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> &str;

    /// `Ok(None)` when the archive has no manifest.
    fn read_manifest(&self) -> Result<Option<Manifest>, ArchiveError>;
}

/// An exploded bundle on disk, manifest at `META-INF/MANIFEST.MF`.
#[derive(Debug, Clone)]
pub struct BundleDirectory {
    root: PathBuf,
    name: String,
}

impl BundleDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root.display().to_string();
        Self { root, name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Archive for BundleDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_manifest(&self) -> Result<Option<Manifest>, ArchiveError> {
        match fs::read_to_string(self.root.join(MANIFEST_PATH)) {
            Ok(text) => Manifest::parse(&self.name, &text).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ArchiveError::Io {
                archive: self.name.clone(),
                source,
            }),
        }
    }
}

/// A bundle jar; the manifest is the `META-INF/MANIFEST.MF` zip entry.
#[derive(Debug, Clone)]
pub struct JarArchive {
    path: PathBuf,
    name: String,
}

impl JarArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    fn io_error(&self, source: io::Error) -> ArchiveError {
        ArchiveError::Io {
            archive: self.name.clone(),
            source,
        }
    }

    fn zip_error(&self, error: ZipError) -> ArchiveError {
        match error {
            ZipError::Io(source) => self.io_error(source),
            other => ArchiveError::InvalidJar {
                archive: self.name.clone(),
                message: other.to_string(),
            },
        }
    }
}

impl Archive for JarArchive {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_manifest(&self) -> Result<Option<Manifest>, ArchiveError> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let mut jar = ZipArchive::new(file).map_err(|e| self.zip_error(e))?;

        let mut entry = match jar.by_name(MANIFEST_PATH) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(self.zip_error(e)),
        };

        let mut text = String::new();
        entry
            .read_to_string(&mut text)
            .map_err(|e| self.io_error(e))?;
        Manifest::parse(&self.name, &text).map(Some)
    }
}

/// A standalone manifest file. Unlike a bundle directory, the file must exist.
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: PathBuf,
    name: String,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl Archive for ManifestFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_manifest(&self) -> Result<Option<Manifest>, ArchiveError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ArchiveError::Io {
            archive: self.name.clone(),
            source,
        })?;
        Manifest::parse(&self.name, &text).map(Some)
    }
}

/// Manifest text held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryArchive {
    name: String,
    manifest: Option<String>,
}

impl InMemoryArchive {
    pub fn new(name: impl Into<String>, manifest: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manifest: Some(manifest.into()),
        }
    }

    pub fn without_manifest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manifest: None,
        }
    }
}

impl Archive for InMemoryArchive {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_manifest(&self) -> Result<Option<Manifest>, ArchiveError> {
        self.manifest
            .as_deref()
            .map(|text| Manifest::parse(&self.name, text))
            .transpose()
    }
}
