#![allow(dead_code)]

use std::collections::BTreeMap;

use coursegraph::config::{CatalogFile, CatalogSection, RawCatalogFile};

/// Builder for `CatalogFile` to simplify test setup.
pub struct CatalogBuilder {
    catalog: RawCatalogFile,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            catalog: RawCatalogFile {
                config: CatalogSection::default(),
                course: BTreeMap::new(),
            },
        }
    }

    /// Declare a course with the given direct prerequisites.
    pub fn with_course(mut self, name: &str, requires: &[&str]) -> Self {
        let course = self.catalog.course.entry(name.to_string()).or_default();
        course
            .requires
            .extend(requires.iter().map(|pre| pre.to_string()));
        self
    }

    pub fn strict_references(mut self, val: bool) -> Self {
        self.catalog.config.strict_references = val;
        self
    }

    /// The unvalidated form, for exercising validation errors.
    pub fn build_raw(self) -> RawCatalogFile {
        self.catalog
    }

    pub fn build(self) -> CatalogFile {
        CatalogFile::try_from(self.catalog).expect("Failed to build valid catalog from builder")
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
