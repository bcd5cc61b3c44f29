// src/config/validate.rs

use crate::config::model::{CatalogFile, RawCatalogFile};
use crate::errors::{CourseGraphError, Result};

impl TryFrom<RawCatalogFile> for CatalogFile {
    type Error = CourseGraphError;

    fn try_from(raw: RawCatalogFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_catalog(&raw)?;
        Ok(CatalogFile::new_unchecked(raw.config, raw.course))
    }
}

/// Semantic checks on a deserialized catalog.
///
/// Cycles and self-references are accepted here: the graph takes any edge,
/// and ordering queries report cycles when they run.
fn validate_raw_catalog(cfg: &RawCatalogFile) -> Result<()> {
    validate_course_ids(cfg)?;
    if cfg.config.strict_references {
        validate_references(cfg)?;
    }
    Ok(())
}

fn validate_course_ids(cfg: &RawCatalogFile) -> Result<()> {
    for (name, course) in cfg.course.iter() {
        if name.trim().is_empty() {
            return Err(CourseGraphError::ConfigError(
                "course identifiers must not be empty".to_string(),
            ));
        }
        if course.requires.iter().any(|pre| pre.trim().is_empty()) {
            return Err(CourseGraphError::ConfigError(format!(
                "course '{}' has an empty entry in `requires`",
                name
            )));
        }
    }
    Ok(())
}

fn validate_references(cfg: &RawCatalogFile) -> Result<()> {
    for (name, course) in cfg.course.iter() {
        for pre in course.requires.iter() {
            if !cfg.course.contains_key(pre) {
                return Err(CourseGraphError::ConfigError(format!(
                    "course '{}' has unknown prerequisite '{}' in `requires`",
                    name, pre
                )));
            }
        }
    }
    Ok(())
}
