// src/graph/mod.rs

//! Course prerequisite graph and the algorithms that run over it.
//!
//! - [`prerequisites`] holds the [`PrerequisiteGraph`] storage, its CRUD
//!   operations and the reachability queries.
//! - [`ordering`] implements Kahn's algorithm for the global topological
//!   order, study plans and level progressions.
//! - [`cycles`] reports the strongly connected components that form cycles.
//!
//! An edge `A -> B` means "A is a direct prerequisite of B".

pub mod cycles;
pub mod ordering;
pub mod prerequisites;

pub use prerequisites::PrerequisiteGraph;

/// Canonical course identifier type used throughout the crate.
pub type CourseId = String;
