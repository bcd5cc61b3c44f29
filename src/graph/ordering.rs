// src/graph/ordering.rs

//! Ordering algorithms over a [`PrerequisiteGraph`].
//!
//! Every operation here works on a borrowed *view*: a map from course to its
//! direct prerequisites, either covering the whole graph or restricted to the
//! courses a target needs (the induced sub-graph). Successor sets are
//! rebuilt from the view on each call rather than stored in the graph.
//!
//! Kahn's algorithm always takes the smallest ready identifier next, so
//! results are deterministic for a given graph.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::errors::{CourseGraphError, Result};
use crate::graph::{CourseId, PrerequisiteGraph};

/// course -> direct prerequisites, borrowed from the graph.
type View<'a> = BTreeMap<&'a str, BTreeSet<&'a str>>;

impl PrerequisiteGraph {
    /// A topological order of every course: each course appears after all
    /// of its prerequisites.
    ///
    /// Fails with [`CourseGraphError::CycleDetected`] if the graph contains
    /// a cycle anywhere.
    pub fn topological_order(&self) -> Result<Vec<CourseId>> {
        let view = self.full_view();
        let order = kahn(&view)?;
        debug!(courses = order.len(), "computed global topological order");
        Ok(order.into_iter().map(str::to_string).collect())
    }

    /// Whether the prerequisite relation contains a cycle.
    pub fn has_cycle(&self) -> bool {
        matches!(
            self.topological_order(),
            Err(CourseGraphError::CycleDetected { .. })
        )
    }

    /// The courses needed to take `target`, in a valid order ending with
    /// `target` itself.
    ///
    /// Only `target` and its ancestors are considered, so a cycle elsewhere
    /// in the graph does not matter; a cycle among those courses yields
    /// [`CourseGraphError::CycleDetected`].
    pub fn study_plan(&self, target: &str) -> Result<Vec<CourseId>> {
        let view = self.required_view(target)?;
        let order = kahn(&view)?;
        debug!(target, courses = order.len(), "computed study plan");
        Ok(order.into_iter().map(str::to_string).collect())
    }

    /// Partition the study plan for `target` into levels of courses that
    /// can be taken in parallel.
    ///
    /// Level 0 holds the courses with no prerequisite inside the plan; each
    /// later level holds the courses whose prerequisites all sit in earlier
    /// levels. The last level contains `target`.
    pub fn level_progression(&self, target: &str) -> Result<Vec<BTreeSet<CourseId>>> {
        // Surface UnknownCourse / CycleDetected exactly as study_plan does.
        self.study_plan(target)?;

        let view = self.required_view(target)?;
        let levels = partition_levels(&view);
        debug!(target, levels = levels.len(), "computed level progression");

        Ok(levels
            .into_iter()
            .map(|level| level.into_iter().map(str::to_string).collect())
            .collect())
    }

    fn full_view(&self) -> View<'_> {
        self.direct_prereqs
            .iter()
            .map(|(course, prereqs)| {
                let prereqs: BTreeSet<&str> = prereqs.iter().map(String::as_str).collect();
                (course.as_str(), prereqs)
            })
            .collect()
    }

    /// Sub-graph induced by `target` and its ancestors.
    fn required_view(&self, target: &str) -> Result<View<'_>> {
        let mut required = self.ancestors_of(target)?;
        if let Some((key, _)) = self.direct_prereqs.get_key_value(target) {
            required.insert(key.as_str());
        }

        Ok(required
            .iter()
            .map(|&course| {
                let prereqs: BTreeSet<&str> = self
                    .direct_prereqs
                    .get(course)
                    .map(|ps| {
                        ps.iter()
                            .map(String::as_str)
                            .filter(|p| required.contains(p))
                            .collect()
                    })
                    .unwrap_or_default();
                (course, prereqs)
            })
            .collect())
    }
}

/// Invert a view: course -> courses that list it as a direct prerequisite.
fn successors<'a>(view: &View<'a>) -> BTreeMap<&'a str, BTreeSet<&'a str>> {
    let mut succ: BTreeMap<&'a str, BTreeSet<&'a str>> =
        view.keys().map(|&course| (course, BTreeSet::new())).collect();
    for (&course, prereqs) in view {
        for &pre in prereqs {
            succ.entry(pre).or_default().insert(course);
        }
    }
    succ
}

fn in_degrees<'a>(view: &View<'a>) -> BTreeMap<&'a str, usize> {
    view.iter()
        .map(|(&course, prereqs)| (course, prereqs.len()))
        .collect()
}

/// Kahn's algorithm over `view`.
///
/// Fails with the courses that never became ready when the view is cyclic.
fn kahn<'a>(view: &View<'a>) -> Result<Vec<&'a str>> {
    let mut in_degree = in_degrees(view);
    let succ = successors(view);

    let mut ready: BTreeSet<&str> = in_degree
        .iter()
        .filter(|&(_, &deg)| deg == 0)
        .map(|(&course, _)| course)
        .collect();
    let mut order: Vec<&str> = Vec::with_capacity(view.len());

    while let Some(course) = ready.pop_first() {
        order.push(course);
        for &next in succ.get(course).into_iter().flatten() {
            if let Some(deg) = in_degree.get_mut(next) {
                *deg -= 1;
                if *deg == 0 {
                    ready.insert(next);
                }
            }
        }
    }

    if order.len() != view.len() {
        let placed: BTreeSet<&str> = order.iter().copied().collect();
        let courses: Vec<CourseId> = view
            .keys()
            .filter(|course| !placed.contains(*course))
            .map(|course| course.to_string())
            .collect();
        debug!(?courses, "cycle detected during topological sort");
        return Err(CourseGraphError::CycleDetected { courses });
    }

    Ok(order)
}

/// Layered Kahn's algorithm: each round consumes every ready course at once.
///
/// On a cyclic view the courses on (or behind) the cycle never appear.
fn partition_levels<'a>(view: &View<'a>) -> Vec<BTreeSet<&'a str>> {
    let mut in_degree = in_degrees(view);
    let succ = successors(view);

    let mut current: BTreeSet<&str> = in_degree
        .iter()
        .filter(|&(_, &deg)| deg == 0)
        .map(|(&course, _)| course)
        .collect();
    let mut levels = Vec::new();

    while !current.is_empty() {
        let mut next_level = BTreeSet::new();
        for &course in &current {
            for &next in succ.get(course).into_iter().flatten() {
                if let Some(deg) = in_degree.get_mut(next) {
                    *deg -= 1;
                    if *deg == 0 {
                        next_level.insert(next);
                    }
                }
            }
        }
        levels.push(current);
        current = next_level;
    }

    levels
}
