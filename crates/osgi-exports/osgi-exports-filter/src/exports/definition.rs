//! Export definitions: the structured result of one export clause.

use std::collections::BTreeSet;
use std::fmt;

use super::pattern::ClassPattern;
use crate::element::ApiElement;

/// Packages named by one export clause, narrowed by its include/exclude filters.
///
/// Immutable once built. Sets are ordered by text, so equality and hashing are
/// structural on package names and pattern source text regardless of the
/// order the parts were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportDefinition {
    package_names: BTreeSet<String>,
    includes: BTreeSet<ClassPattern>,
    excludes: BTreeSet<ClassPattern>,
}

impl ExportDefinition {
    pub fn new<P, S, I, E>(package_names: P, includes: I, excludes: E) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = ClassPattern>,
        E: IntoIterator<Item = ClassPattern>,
    {
        Self {
            package_names: package_names.into_iter().map(Into::into).collect(),
            includes: includes.into_iter().collect(),
            excludes: excludes.into_iter().collect(),
        }
    }

    pub fn package_names(&self) -> &BTreeSet<String> {
        &self.package_names
    }

    /// Empty means every class of the exported packages is included.
    pub fn includes(&self) -> &BTreeSet<ClassPattern> {
        &self.includes
    }

    pub fn excludes(&self) -> &BTreeSet<ClassPattern> {
        &self.excludes
    }

    /// Whether class `simple_name` in `package` is exported by this clause.
    ///
    /// The package must be listed exactly. The class must then match an
    /// include (if any are given) and no exclude; excludes win.
    pub fn matches(&self, package: &str, simple_name: &str) -> bool {
        if !self.package_names.contains(package) {
            return false;
        }

        let included =
            self.includes.is_empty() || self.includes.iter().any(|p| p.is_match(simple_name));
        let excluded = self.excludes.iter().any(|p| p.is_match(simple_name));

        included && !excluded
    }

    /// Elements that are not classes are always considered exported.
    pub fn exports<E: ApiElement + ?Sized>(&self, element: &E) -> bool {
        match element.as_type() {
            Some(ty) => self.matches(ty.package, ty.simple_name),
            None => true,
        }
    }
}

impl fmt::Display for ExportDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "packages={:?} include={:?} exclude={:?}",
            self.package_names,
            self.includes.iter().map(ClassPattern::as_str).collect::<Vec<_>>(),
            self.excludes.iter().map(ClassPattern::as_str).collect::<Vec<_>>(),
        )
    }
}
