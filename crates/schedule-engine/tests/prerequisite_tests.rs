//! Tests for prerequisite parsing and the course graph.

use schedule_engine::prerequisite::{
    common_prerequisites, prerequisites_for, unmet_prerequisites,
};
use schedule_engine::{
    parse_prerequisites, prerequisite_edges, CatalogCourse, ParsedPrerequisite,
};

fn course(subject: &str, number: &str, description: &str) -> CatalogCourse {
    CatalogCourse {
        subject: subject.to_string(),
        number: number.to_string(),
        title: String::new(),
        description: description.to_string(),
    }
}

fn codes(prerequisites: &[ParsedPrerequisite]) -> Vec<&str> {
    prerequisites.iter().map(|p| p.course_code.as_str()).collect()
}

fn completed(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// parse_prerequisites
// ---------------------------------------------------------------------------

#[test]
fn codes_in_order_with_alternative() {
    let parsed = parse_prerequisites("Prerequisite: MATH 2423 or 2924, and PHYS 2514.");

    assert_eq!(codes(&parsed), vec!["MATH 2423", "PHYS 2514"]);
    assert_eq!(parsed[0].one_of, vec!["MATH 2423".to_string(), "MATH 2924".to_string()]);
    assert!(parsed[1].one_of.is_empty());
    assert!(parsed.iter().all(|p| !p.is_corequisite));
}

#[test]
fn corequisite_phrase_applies_only_nearby() {
    let parsed = parse_prerequisites(
        "Prerequisites: ECE 2713 with a grade of C or better in every attempt on record; \
         PHYS 2524 may be taken concurrently.",
    );

    assert_eq!(codes(&parsed), vec!["ECE 2713", "PHYS 2524"]);
    assert!(!parsed[0].is_corequisite);
    assert!(parsed[1].is_corequisite);
}

#[test]
fn concurrent_enrollment_marks_corequisite() {
    let parsed =
        parse_prerequisites("Limits and derivatives. Prerequisite: MATH 1523 or concurrent enrollment.");

    assert_eq!(codes(&parsed), vec!["MATH 1523"]);
    assert!(parsed[0].is_corequisite);
}

#[test]
fn only_first_sentence_is_read() {
    let parsed = parse_prerequisites("Prerequisite: CS 1323. Recommended: CS 2334.");
    assert_eq!(codes(&parsed), vec!["CS 1323"]);
}

#[test]
fn missing_section_or_period_gives_nothing() {
    assert!(parse_prerequisites("").is_empty());
    assert!(parse_prerequisites("Introduction to programming in Java.").is_empty());
    assert!(parse_prerequisites("Prerequisite: MATH 1914").is_empty());
    assert!(parse_prerequisites("Prerequisite: permission of instructor.").is_empty());
}

#[test]
fn heading_is_case_insensitive_but_codes_are_not() {
    let parsed = parse_prerequisites("PREREQUISITE: CS 1323 and CS 1323, math 1914.");
    assert_eq!(codes(&parsed), vec!["CS 1323"]);
}

#[test]
fn serializes_camel_case_and_omits_empty_alternatives() {
    let parsed = parse_prerequisites("Prerequisite: MATH 1914 or 1823, CS 1323.");
    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(json[0]["courseCode"], "MATH 1914");
    assert_eq!(json[0]["isCorequisite"], false);
    assert_eq!(json[0]["oneOf"], serde_json::json!(["MATH 1914", "MATH 1823"]));
    assert!(json[1].get("oneOf").is_none());
}

// ---------------------------------------------------------------------------
// Satisfaction and fallbacks
// ---------------------------------------------------------------------------

#[test]
fn any_alternative_satisfies() {
    let parsed = parse_prerequisites("Prerequisite: MATH 2423 or 2924.");

    assert!(parsed[0].is_satisfied_by(&completed(&["MATH 2924"])));
    assert!(parsed[0].is_satisfied_by(&completed(&["MATH 2423"])));
    assert!(!parsed[0].is_satisfied_by(&completed(&["MATH 1914"])));
}

#[test]
fn description_without_prerequisites_falls_back_to_common_table() {
    let systems = course("CS", "3203", "Software engineering principles.");

    let prerequisites = prerequisites_for(&systems);

    assert_eq!(codes(&prerequisites), vec!["CS 2334", "CS 2413"]);
    assert!(common_prerequisites("HIST 1483").is_empty());
}

#[test]
fn description_wins_over_common_table() {
    let calc = course("MATH", "2924", "Prerequisite: MATH 1823.");
    assert_eq!(codes(&prerequisites_for(&calc)), vec!["MATH 1823"]);
}

#[test]
fn unmet_skips_completed_and_corequisites() {
    let systems = course("CS", "3203", "");
    let unmet = unmet_prerequisites(&systems, &completed(&["CS 2334"]));
    assert_eq!(codes(&unmet), vec!["CS 2413"]);

    let physics = course("PHYS", "2514", "Prerequisite: MATH 1914 or concurrent enrollment.");
    assert!(unmet_prerequisites(&physics, &[]).is_empty());
}

// ---------------------------------------------------------------------------
// prerequisite_edges
// ---------------------------------------------------------------------------

#[test]
fn edges_link_courses_in_the_list() {
    let courses = vec![
        course("MATH", "1914", ""),
        course("MATH", "2924", ""),
        course("PHYS", "2514", "Prerequisite: MATH 1914 or concurrent enrollment."),
        course("ECE", "2713", ""),
    ];

    let edges = prerequisite_edges(&courses, &completed(&["MATH 1914"]));

    let ids: Vec<&str> = edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["e-MATH1914-MATH2924", "e-MATH1914-PHYS2514", "e-MATH2924-ECE2713"]
    );
    assert_eq!(edges[0].source, "math1914");
    assert_eq!(edges[0].target, "math2924");
    assert!(edges[0].satisfied && !edges[0].corequisite);
    assert!(edges[1].corequisite);
    assert!(!edges[2].satisfied);
}

#[test]
fn prerequisite_outside_the_list_has_no_edge() {
    let courses = vec![course("CS", "2334", "")];
    assert!(prerequisite_edges(&courses, &[]).is_empty());
}

#[test]
fn catalog_course_accepts_course_number_field() {
    let parsed: CatalogCourse = serde_json::from_str(
        r#"{"subject":"ECE","courseNumber":"2713","description":"Prerequisite: MATH 2924."}"#,
    )
    .unwrap();

    assert_eq!(parsed.course_code(), "ECE 2713");
    assert!(parsed.title.is_empty());
}
