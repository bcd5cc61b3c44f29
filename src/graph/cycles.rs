// src/graph/cycles.rs

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::graph::{CourseId, PrerequisiteGraph};

impl PrerequisiteGraph {
    /// Every group of courses that requires itself, directly or transitively.
    ///
    /// Each group is a strongly connected component with more than one
    /// course, or a single course listed as its own prerequisite. Courses
    /// inside a group are sorted, and so are the groups.
    ///
    /// Diagnostic companion to [`PrerequisiteGraph::has_cycle`]; an acyclic
    /// graph yields an empty list.
    pub fn cycles(&self) -> Vec<Vec<CourseId>> {
        // Edge direction: pre -> course.
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for course in self.direct_prereqs.keys() {
            graph.add_node(course.as_str());
        }
        for (course, prereqs) in self.direct_prereqs.iter() {
            for pre in prereqs.iter() {
                graph.add_edge(pre.as_str(), course.as_str(), ());
            }
        }

        let mut cycles: Vec<Vec<CourseId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| match component.as_slice() {
                [single] => graph.contains_edge(*single, *single),
                _ => true,
            })
            .map(|component| {
                let mut courses: Vec<CourseId> =
                    component.into_iter().map(str::to_string).collect();
                courses.sort();
                courses
            })
            .collect();
        cycles.sort();

        debug!(count = cycles.len(), "found prerequisite cycles");
        cycles
    }
}
