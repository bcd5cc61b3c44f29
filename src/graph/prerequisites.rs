// src/graph/prerequisites.rs

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::{debug, trace};

use crate::config::model::CatalogFile;
use crate::errors::{CourseGraphError, Result};
use crate::graph::CourseId;

/// Mutable directed graph of courses and their direct prerequisites.
///
/// For every course we keep the set of its *immediate* prerequisites; this
/// map is the single source of truth. Reverse adjacency (which courses a
/// course unlocks) is derived on demand by the ordering algorithms.
///
/// Mutation is always accepted: adding an edge that closes a cycle (even a
/// self-loop) succeeds, and cycles are only reported when an ordering query
/// such as [`PrerequisiteGraph::topological_order`] runs.
///
/// Storage is ordered by identifier, so listings and tie-breaks are
/// deterministic. Queries hand out owned copies, never references into the
/// internal sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteGraph {
    /// course -> its direct prerequisites
    pub(super) direct_prereqs: BTreeMap<CourseId, BTreeSet<CourseId>>,
}

impl PrerequisiteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph holding the given courses, none of which have
    /// prerequisites yet. Duplicates are ignored.
    pub fn with_courses<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for course in courses {
            graph.add_course(course.as_ref());
        }
        graph
    }

    /// Create a graph from `(prerequisite, course)` pairs.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::new();
        for (pre, course) in edges {
            graph.add_prerequisite(pre.as_ref(), course.as_ref());
        }
        graph
    }

    /// Build a graph from a validated [`CatalogFile`].
    ///
    /// Every `[course.<id>]` becomes a node; every `requires` entry becomes
    /// an edge, auto-creating names the catalog never declared.
    pub fn from_catalog(catalog: &CatalogFile) -> Self {
        let mut graph = Self::new();
        for (name, course) in catalog.course.iter() {
            graph.add_course(name);
            for pre in course.requires.iter() {
                graph.add_prerequisite(pre, name);
            }
        }
        debug!(courses = graph.len(), "built prerequisite graph from catalog");
        graph
    }

    /// Number of known courses.
    pub fn len(&self) -> usize {
        self.direct_prereqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct_prereqs.is_empty()
    }

    pub fn contains(&self, course: &str) -> bool {
        self.direct_prereqs.contains_key(course)
    }

    // --- courses ---

    /// Add a course with no prerequisites. Does nothing if it already exists.
    pub fn add_course(&mut self, course: &str) {
        if !self.direct_prereqs.contains_key(course) {
            trace!(course, "adding course");
            self.direct_prereqs.insert(course.to_string(), BTreeSet::new());
        }
    }

    /// Remove a course together with every edge touching it.
    ///
    /// Unknown courses are ignored. Orders or plans computed earlier are
    /// not updated; callers must query again.
    pub fn remove_course(&mut self, course: &str) {
        if self.direct_prereqs.remove(course).is_none() {
            return;
        }
        for prereqs in self.direct_prereqs.values_mut() {
            prereqs.remove(course);
        }
        debug!(course, "removed course and its incident edges");
    }

    // --- edges ---

    /// Record `pre` as a direct prerequisite of `course`, creating either
    /// course if needed.
    ///
    /// No acyclicity check happens here: an edge that closes a cycle is
    /// stored like any other, and inserting an existing edge is a no-op.
    pub fn add_prerequisite(&mut self, pre: &str, course: &str) {
        self.add_course(pre);
        self.add_course(course);
        if let Some(prereqs) = self.direct_prereqs.get_mut(course) {
            if prereqs.insert(pre.to_string()) {
                trace!(pre, course, "added prerequisite edge");
            }
        }
    }

    /// Remove the edge `pre -> course` if present. Never fails.
    pub fn remove_prerequisite(&mut self, pre: &str, course: &str) {
        if let Some(prereqs) = self.direct_prereqs.get_mut(course) {
            if prereqs.remove(pre) {
                trace!(pre, course, "removed prerequisite edge");
            }
        }
    }

    // --- queries ---

    /// All known courses in identifier order.
    pub fn list_courses(&self) -> Vec<CourseId> {
        self.direct_prereqs.keys().cloned().collect()
    }

    /// Immediate prerequisites of `course`, in identifier order.
    pub fn direct_prerequisites(&self, course: &str) -> Result<Vec<CourseId>> {
        self.direct_prereqs
            .get(course)
            .map(|prereqs| prereqs.iter().cloned().collect())
            .ok_or_else(|| CourseGraphError::UnknownCourse(course.to_string()))
    }

    /// Every direct or transitive prerequisite of `course`.
    ///
    /// `course` itself is only included when it sits on a cycle.
    pub fn all_prerequisites(&self, course: &str) -> Result<BTreeSet<CourseId>> {
        let ancestors = self.ancestors_of(course)?;
        Ok(ancestors.into_iter().map(str::to_string).collect())
    }

    /// Whether `a` is a direct or transitive prerequisite of `b`.
    ///
    /// Unknown identifiers yield `false` rather than an error. `a == b` is
    /// only true when `a` lies on a cycle (a self-loop included).
    pub fn depends_on(&self, a: &str, b: &str) -> bool {
        if !self.contains(a) {
            return false;
        }
        let Some(start) = self.direct_prereqs.get(b) else {
            return false;
        };

        let mut stack: Vec<&str> = start.iter().map(String::as_str).collect();
        let mut visited: BTreeSet<&str> = BTreeSet::new();

        while let Some(current) = stack.pop() {
            if current == a {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(prereqs) = self.direct_prereqs.get(current) {
                stack.extend(prereqs.iter().map(String::as_str));
            }
        }
        false
    }

    /// Borrowed ancestor set of `course`; each node is expanded once.
    pub(super) fn ancestors_of(&self, course: &str) -> Result<BTreeSet<&str>> {
        let start = self
            .direct_prereqs
            .get(course)
            .ok_or_else(|| CourseGraphError::UnknownCourse(course.to_string()))?;

        let mut stack: Vec<&str> = start.iter().map(String::as_str).collect();
        let mut visited: BTreeSet<&str> = BTreeSet::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(prereqs) = self.direct_prereqs.get(current) {
                stack.extend(
                    prereqs
                        .iter()
                        .map(String::as_str)
                        .filter(|p| !visited.contains(p)),
                );
            }
        }

        trace!(course, count = visited.len(), "collected ancestors");
        Ok(visited)
    }
}

impl fmt::Display for PrerequisiteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrerequisiteGraph({} courses)", self.len())
    }
}
