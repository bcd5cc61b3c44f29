// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Course catalog exactly as deserialized from TOML, before validation.
///
/// ```toml
/// [config]
/// strict_references = true
///
/// [course.CS101]
///
/// [course.CS201]
/// requires = ["CS101"]
/// ```
///
/// All sections are optional; an empty file is an empty catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalogFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: CatalogSection,

    /// All courses from `[course.<id>]`, keyed by course identifier.
    #[serde(default)]
    pub course: BTreeMap<String, CourseConfig>,
}

/// A catalog that passed validation. Build one with
/// `CatalogFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub config: CatalogSection,
    pub course: BTreeMap<String, CourseConfig>,
}

impl CatalogFile {
    pub(crate) fn new_unchecked(
        config: CatalogSection,
        course: BTreeMap<String, CourseConfig>,
    ) -> Self {
        Self { config, course }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    /// When `true` (default), every entry in `requires` must name a course
    /// that has its own `[course.<id>]` section. When `false`, unknown
    /// names are added to the graph as courses without prerequisites.
    #[serde(default = "default_strict_references")]
    pub strict_references: bool,
}

fn default_strict_references() -> bool {
    true
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            strict_references: default_strict_references(),
        }
    }
}

/// `[course.<id>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseConfig {
    /// Direct prerequisites of this course.
    #[serde(default)]
    pub requires: Vec<String>,
}
