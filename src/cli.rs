// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::default_catalog_path;

/// Command-line arguments for `coursegraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coursegraph",
    version,
    about = "Query course prerequisites: orderings, study plans and levels.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the course catalog (TOML).
    ///
    /// Default: `Courses.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_catalog_path())]
    pub catalog: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Queries exposed on the command line.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every course in the catalog.
    Courses,

    /// Show the prerequisites of a course.
    Prereqs {
        course: String,

        /// Include transitive prerequisites, not only direct ones.
        #[arg(long)]
        all: bool,
    },

    /// Print whether A is a (direct or transitive) prerequisite of B.
    DependsOn { a: String, b: String },

    /// Print a topological order of the whole catalog.
    Order,

    /// Report prerequisite cycles; exits non-zero if any exist.
    Check,

    /// Print the courses needed for TARGET, in order, ending with TARGET.
    Plan { target: String },

    /// Print the study plan for TARGET grouped into parallel levels.
    Levels { target: String },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
