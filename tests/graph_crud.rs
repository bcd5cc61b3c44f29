// tests/graph_crud.rs

use std::error::Error;

use coursegraph::{CourseGraphError, PrerequisiteGraph};
use coursegraph_test_utils::fixtures::{chain, diamond};
use coursegraph_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn new_graph_is_empty() {
    init_tracing();

    let graph = PrerequisiteGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
    assert!(graph.list_courses().is_empty());
    assert_eq!(graph.to_string(), "PrerequisiteGraph(0 courses)");
}

#[test]
fn add_course_is_idempotent() -> TestResult {
    init_tracing();

    let mut graph = PrerequisiteGraph::new();
    graph.add_course("CS101");
    graph.add_prerequisite("MATH1", "CS101");
    graph.add_course("CS101");

    assert_eq!(graph.len(), 2);
    // Re-adding must not wipe existing prerequisites.
    assert_eq!(graph.direct_prerequisites("CS101")?, vec!["MATH1".to_string()]);
    Ok(())
}

#[test]
fn with_courses_creates_isolated_nodes() -> TestResult {
    init_tracing();

    let graph = PrerequisiteGraph::with_courses(["B", "A", "B"]);
    assert_eq!(graph.list_courses(), vec!["A".to_string(), "B".to_string()]);
    assert!(graph.direct_prerequisites("A")?.is_empty());
    assert!(graph.direct_prerequisites("B")?.is_empty());
    Ok(())
}

#[test]
fn add_prerequisite_auto_creates_both_endpoints() -> TestResult {
    init_tracing();

    let mut graph = PrerequisiteGraph::new();
    graph.add_prerequisite("A", "B");

    assert!(graph.contains("A"));
    assert!(graph.contains("B"));
    assert!(graph.direct_prerequisites("A")?.is_empty());
    assert_eq!(graph.direct_prerequisites("B")?, vec!["A".to_string()]);
    Ok(())
}

#[test]
fn adding_same_edge_twice_equals_single_insertion() {
    init_tracing();

    let mut once = PrerequisiteGraph::new();
    once.add_prerequisite("A", "B");

    let mut twice = PrerequisiteGraph::new();
    twice.add_prerequisite("A", "B");
    twice.add_prerequisite("A", "B");

    assert_eq!(once, twice);
}

#[test]
fn cycle_forming_edges_are_accepted() {
    init_tracing();

    let mut graph = chain();
    graph.add_prerequisite("C", "A");
    graph.add_prerequisite("B", "B");

    assert_eq!(graph.len(), 3);
    assert!(graph.depends_on("C", "A"));
    assert!(graph.depends_on("B", "B"));
}

#[test]
fn remove_course_cascades_edges() -> TestResult {
    init_tracing();

    let mut graph = diamond();
    graph.remove_course("B");

    assert!(!graph.contains("B"));
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.direct_prerequisites("D")?, vec!["C".to_string()]);
    for course in graph.list_courses() {
        assert!(!graph.direct_prerequisites(&course)?.contains(&"B".to_string()));
    }
    Ok(())
}

#[test]
fn removed_course_behaves_as_never_added() {
    init_tracing();

    let mut graph = diamond();
    graph.remove_course("A");

    assert!(matches!(
        graph.direct_prerequisites("A"),
        Err(CourseGraphError::UnknownCourse(ref c)) if c == "A"
    ));
    assert!(matches!(
        graph.all_prerequisites("A"),
        Err(CourseGraphError::UnknownCourse(_))
    ));
    assert!(matches!(
        graph.study_plan("A"),
        Err(CourseGraphError::UnknownCourse(_))
    ));
    assert!(!graph.depends_on("A", "D"));
    assert!(!graph.depends_on("D", "A"));
}

#[test]
fn remove_unknown_course_is_noop() {
    init_tracing();

    let mut graph = diamond();
    let before = graph.clone();
    graph.remove_course("Z");
    assert_eq!(graph, before);
}

#[test]
fn remove_prerequisite_drops_only_that_edge() -> TestResult {
    init_tracing();

    let mut graph = diamond();
    graph.remove_prerequisite("B", "D");

    assert_eq!(graph.direct_prerequisites("D")?, vec!["C".to_string()]);
    assert!(graph.contains("B"));
    assert!(graph.depends_on("A", "D"));
    Ok(())
}

#[test]
fn remove_prerequisite_tolerates_missing_edge_or_course() {
    init_tracing();

    let mut graph = diamond();
    let before = graph.clone();

    graph.remove_prerequisite("D", "A");
    graph.remove_prerequisite("X", "D");
    graph.remove_prerequisite("A", "Nope");

    assert_eq!(graph, before);
}

#[test]
fn queries_return_owned_copies() -> TestResult {
    init_tracing();

    let mut graph = diamond();
    let mut prereqs = graph.direct_prerequisites("D")?;
    prereqs.push("Z".to_string());

    assert_eq!(
        graph.direct_prerequisites("D")?,
        vec!["B".to_string(), "C".to_string()]
    );

    // Results computed earlier are untouched by later mutation.
    let order = graph.topological_order()?;
    graph.remove_course("A");
    assert_eq!(order.len(), 4);
    assert_eq!(graph.topological_order()?.len(), 3);
    Ok(())
}
