// src/config/mod.rs

//! Course catalog loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a catalog file from disk (`loader.rs`).
//! - Validate identifiers and references (`validate.rs`).
//!
//! The catalog is input only; nothing in the crate writes it back.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_catalog_path, load_and_validate, load_from_path, parse_str};
pub use model::{CatalogFile, CatalogSection, CourseConfig, RawCatalogFile};
