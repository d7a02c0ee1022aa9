//! Export filter: decides per element whether it is part of a bundle's
//! exported surface, using the Export-Package headers of every archive on
//! the element's side of the comparison.

use tracing::{debug, warn};

use osgi_exports_core::{
    FilterConfig, FilterError, FilterResult, FxHashMap, FxHashSet, ParseErrorPolicy,
};

use crate::element::{ApiElement, ApiSide};
use crate::exports::definition::ExportDefinition;
use crate::exports::parser;
use crate::manifest::archive::Archive;

/// The archives making up one side of a comparison.
#[derive(Default)]
pub struct Api {
    archives: Vec<Box<dyn Archive>>,
}

impl Api {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_archive(mut self, archive: impl Archive + 'static) -> Self {
        self.push(archive);
        self
    }

    pub fn push(&mut self, archive: impl Archive + 'static) {
        self.archives.push(Box::new(archive));
    }

    pub fn archives(&self) -> impl Iterator<Item = &dyn Archive> {
        self.archives.iter().map(|a| a.as_ref())
    }
}

/// Element filter backed by per-side export definitions.
///
/// Built once by [`initialize`](Self::initialize), read-only afterwards.
#[derive(Debug)]
pub struct ExportPackageFilter {
    config: FilterConfig,
    exported: FxHashMap<ApiSide, FxHashSet<ExportDefinition>>,
}

impl ExportPackageFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            exported: FxHashMap::default(),
        }
    }

    /// Build a filter from a TOML config.
    pub fn from_toml(toml_str: &str) -> FilterResult<Self> {
        Ok(Self::new(FilterConfig::from_toml(toml_str)?))
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Read the export definitions of both sides, replacing any previous ones.
    ///
    /// On error the previous definitions are left untouched.
    pub fn initialize(&mut self, old: &Api, new: &Api) -> FilterResult<()> {
        let mut exported = FxHashMap::default();
        for (side, api) in [(ApiSide::Old, old), (ApiSide::New, new)] {
            let definitions = self.collect_exports(api)?;
            debug!(
                ?side,
                definitions = definitions.len(),
                "export definitions collected"
            );
            exported.insert(side, definitions);
        }
        self.exported = exported;
        Ok(())
    }

    /// Cached definitions of one side, if it has been initialized.
    pub fn definitions(&self, side: ApiSide) -> Option<&FxHashSet<ExportDefinition>> {
        self.exported.get(&side)
    }

    /// Whether `element` belongs to the exported surface.
    ///
    /// Non-class elements always apply. A side without any definition (no
    /// manifest, no header, not initialized) exports everything.
    pub fn applies<E: ApiElement + ?Sized>(&self, element: &E) -> bool {
        if element.as_type().is_none() {
            return true;
        }

        match self.exported.get(&element.api_side()) {
            Some(definitions) if !definitions.is_empty() => {
                definitions.iter().any(|d| d.exports(element))
            }
            _ => true,
        }
    }

    /// Children are always visited; only classes themselves are filtered.
    pub fn should_descend_into<E: ?Sized>(&self, _element: &E) -> bool {
        true
    }

    fn collect_exports(&self, api: &Api) -> FilterResult<FxHashSet<ExportDefinition>> {
        let mut definitions = FxHashSet::default();
        for archive in api.archives() {
            self.add_exported_packages(archive, &mut definitions)?;
        }
        Ok(definitions)
    }

    fn add_exported_packages(
        &self,
        archive: &dyn Archive,
        definitions: &mut FxHashSet<ExportDefinition>,
    ) -> FilterResult<()> {
        let manifest = match archive.read_manifest() {
            Ok(Some(manifest)) => manifest,
            Ok(None) => return Ok(()),
            Err(e) => {
                debug!(
                    archive = archive.name(),
                    error = %e,
                    "failed to read archive manifest, not filtering it"
                );
                return Ok(());
            }
        };

        let Some(header) = manifest.main_attribute(self.config.effective_header()) else {
            return Ok(());
        };

        // Parse into a scratch set: a failing header contributes nothing.
        let mut parsed = FxHashSet::default();
        match parser::parse(Some(header), &mut parsed) {
            Ok(()) => {
                definitions.extend(parsed);
                Ok(())
            }
            Err(source) => match self.config.on_parse_error {
                ParseErrorPolicy::Fail => Err(FilterError::Header {
                    archive: archive.name().to_string(),
                    source,
                }),
                ParseErrorPolicy::Skip => {
                    warn!(
                        archive = archive.name(),
                        index = source.index(),
                        "skipping unparseable Export-Package header"
                    );
                    Ok(())
                }
            },
        }
    }
}
