// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{CatalogFile, RawCatalogFile};
use crate::errors::Result;

/// Read and deserialize a catalog without semantic validation.
///
/// Use [`load_and_validate`] unless you need the raw form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCatalogFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Deserialize a catalog from TOML text.
pub fn parse_str(contents: &str) -> Result<RawCatalogFile> {
    let catalog: RawCatalogFile = toml::from_str(contents)?;
    Ok(catalog)
}

/// Load a catalog from `path` and validate it.
///
/// This is the entry point the CLI uses:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Rejects empty identifiers and, in strict mode, unknown `requires`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CatalogFile> {
    let raw = load_from_path(&path)?;
    let catalog = CatalogFile::try_from(raw)?;
    debug!(
        path = %path.as_ref().display(),
        courses = catalog.course.len(),
        "loaded course catalog"
    );
    Ok(catalog)
}

/// Catalog path used when `--catalog` is not given.
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from("Courses.toml")
}
