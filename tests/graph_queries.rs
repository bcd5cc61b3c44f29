// tests/graph_queries.rs

use std::collections::BTreeSet;
use std::error::Error;

use coursegraph::{CourseGraphError, PrerequisiteGraph};
use coursegraph_test_utils::fixtures::{cs_track, diamond, triangle_cycle};
use coursegraph_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn list_courses_is_in_identifier_order() {
    init_tracing();

    let mut graph = PrerequisiteGraph::new();
    graph.add_course("ML");
    graph.add_prerequisite("CALC1", "CALC2");
    graph.add_course("ALGO");

    assert_eq!(graph.list_courses(), vec!["ALGO", "CALC1", "CALC2", "ML"]);
}

#[test]
fn direct_prerequisites_of_unknown_course_fail() {
    init_tracing();

    let graph = diamond();
    match graph.direct_prerequisites("Z") {
        Err(CourseGraphError::UnknownCourse(course)) => assert_eq!(course, "Z"),
        other => panic!("Expected UnknownCourse, got: {:?}", other),
    }
}

#[test]
fn all_prerequisites_of_diamond_sink() -> TestResult {
    init_tracing();

    let graph = diamond();
    assert_eq!(graph.all_prerequisites("D")?, set(&["A", "B", "C"]));
    assert_eq!(graph.all_prerequisites("B")?, set(&["A"]));
    assert!(graph.all_prerequisites("A")?.is_empty());
    Ok(())
}

#[test]
fn all_prerequisites_unknown_course_fails() {
    init_tracing();

    let graph = diamond();
    assert!(matches!(
        graph.all_prerequisites("nope"),
        Err(CourseGraphError::UnknownCourse(_))
    ));
}

#[test]
fn all_prerequisites_terminates_on_cycles() -> TestResult {
    init_tracing();

    let mut graph = triangle_cycle();
    graph.add_prerequisite("X", "A");

    // The cycle makes A its own ancestor.
    assert_eq!(graph.all_prerequisites("A")?, set(&["A", "B", "C", "X"]));
    Ok(())
}

#[test]
fn depends_on_direct_and_transitive() {
    init_tracing();

    let graph = cs_track();
    assert!(graph.depends_on("CALC1", "CALC2"));
    assert!(graph.depends_on("CALC1", "ML"));
    assert!(graph.depends_on("CS101", "ML"));
    assert!(!graph.depends_on("ML", "CALC1"));
    assert!(!graph.depends_on("STATS", "ALGO"));
}

#[test]
fn depends_on_is_lenient_for_unknown_courses() {
    init_tracing();

    let graph = diamond();
    assert!(!graph.depends_on("Z", "D"));
    assert!(!graph.depends_on("A", "Z"));
    assert!(!graph.depends_on("Y", "Z"));
}

#[test]
fn depends_on_self_requires_a_loop() {
    init_tracing();

    let mut graph = diamond();
    assert!(!graph.depends_on("A", "A"));
    assert!(!graph.depends_on("D", "D"));

    graph.add_prerequisite("A", "A");
    assert!(graph.depends_on("A", "A"));
}

#[test]
fn depends_on_terminates_on_cycles() {
    init_tracing();

    let mut graph = triangle_cycle();
    graph.add_course("Lonely");
    assert!(!graph.depends_on("Lonely", "A"));
    assert!(graph.depends_on("A", "A"));
}

#[test]
fn depends_on_agrees_with_all_prerequisites() -> TestResult {
    init_tracing();

    let mut graph = cs_track();
    graph.add_prerequisite("ML", "CS101");

    for b in graph.list_courses() {
        let ancestors = graph.all_prerequisites(&b)?;
        for a in graph.list_courses() {
            assert_eq!(
                graph.depends_on(&a, &b),
                ancestors.contains(&a),
                "depends_on({a}, {b}) disagrees with all_prerequisites"
            );
        }
    }
    Ok(())
}
