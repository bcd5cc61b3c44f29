// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::{CliArgs, Command};
use crate::config::load_and_validate;

pub use crate::errors::CourseGraphError;
pub use crate::graph::{CourseId, PrerequisiteGraph};

/// How a command finished, for the binary's exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// `check` found at least one prerequisite cycle.
    CyclesFound,
}

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the catalog, builds the graph and answers the
/// requested query on stdout.
pub fn run(args: CliArgs) -> Result<RunStatus> {
    let catalog = load_and_validate(&args.catalog)?;
    let graph = PrerequisiteGraph::from_catalog(&catalog);
    info!(catalog = %args.catalog.display(), %graph, "catalog loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&graph, &args.command, &mut out)
}

/// Answer a single query against `graph`, writing the result to `out`.
pub fn execute(
    graph: &PrerequisiteGraph,
    command: &Command,
    out: &mut impl Write,
) -> Result<RunStatus> {
    debug!(?command, "executing command");

    match command {
        Command::Courses => {
            for course in graph.list_courses() {
                writeln!(out, "{course}")?;
            }
        }
        Command::Prereqs { course, all } => {
            let prereqs: Vec<CourseId> = if *all {
                graph.all_prerequisites(course)?.into_iter().collect()
            } else {
                graph.direct_prerequisites(course)?
            };
            for pre in prereqs {
                writeln!(out, "{pre}")?;
            }
        }
        Command::DependsOn { a, b } => {
            writeln!(out, "{}", graph.depends_on(a, b))?;
        }
        Command::Order => {
            for course in graph.topological_order()? {
                writeln!(out, "{course}")?;
            }
        }
        Command::Check => {
            let cycles = graph.cycles();
            if cycles.is_empty() {
                writeln!(out, "acyclic")?;
            } else {
                warn!(count = cycles.len(), "prerequisite cycles found");
                for cycle in &cycles {
                    writeln!(out, "cycle: {}", cycle.join(", "))?;
                }
                return Ok(RunStatus::CyclesFound);
            }
        }
        Command::Plan { target } => {
            for course in graph.study_plan(target)? {
                writeln!(out, "{course}")?;
            }
        }
        Command::Levels { target } => {
            for (idx, level) in graph.level_progression(target)?.iter().enumerate() {
                let courses: Vec<&str> = level.iter().map(String::as_str).collect();
                writeln!(out, "level {idx}: {}", courses.join(", "))?;
            }
        }
    }

    Ok(RunStatus::Success)
}
