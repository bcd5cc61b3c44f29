// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! Graph operations only ever produce [`CourseGraphError::UnknownCourse`] or
//! [`CourseGraphError::CycleDetected`]; the remaining variants come from the
//! catalog loader.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseGraphError {
    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Cycle detected among courses: {}", .courses.join(", "))]
    CycleDetected {
        /// Courses that could not be placed in a topological order, sorted.
        courses: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CourseGraphError {
    pub fn is_cycle(&self) -> bool {
        matches!(self, CourseGraphError::CycleDetected { .. })
    }
}

pub type Result<T> = std::result::Result<T, CourseGraphError>;
