//! Small graphs reused across the integration tests.

use coursegraph::PrerequisiteGraph;

/// A -> B, A -> C, B -> D, C -> D
pub fn diamond() -> PrerequisiteGraph {
    PrerequisiteGraph::from_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
}

/// A -> B -> C
pub fn chain() -> PrerequisiteGraph {
    PrerequisiteGraph::from_edges([("A", "B"), ("B", "C")])
}

/// A -> B -> C -> A
pub fn triangle_cycle() -> PrerequisiteGraph {
    PrerequisiteGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")])
}

/// A realistic computer-science track.
///
/// ```text
/// CALC1 -> CALC2 -> LINALG -> ML
/// CS101 -> CS201 -> ALGO  -> ML
/// CS101 -> DISCRETE -> ALGO
/// STATS -> ML
/// ```
pub fn cs_track() -> PrerequisiteGraph {
    PrerequisiteGraph::from_edges([
        ("CALC1", "CALC2"),
        ("CALC2", "LINALG"),
        ("LINALG", "ML"),
        ("CS101", "CS201"),
        ("CS201", "ALGO"),
        ("CS101", "DISCRETE"),
        ("DISCRETE", "ALGO"),
        ("ALGO", "ML"),
        ("STATS", "ML"),
    ])
}
