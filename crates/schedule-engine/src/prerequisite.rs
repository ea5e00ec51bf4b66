//! Prerequisite extraction from catalog descriptions and the course graph
//! built from it.
//!
//! Catalog text states requirements in prose, e.g.
//! `"Prerequisite: MATH 2423 or 2924, and PHYS 2514 (may be taken concurrently)."`.
//! Only the first `Prerequisite(s):` sentence is read. Parsing fails soft: a
//! description without one yields no prerequisites.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Prerequisites?:\s*([^.]+)\.").expect("section pattern is valid"));
static COURSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)\s+(\d{4})").expect("course pattern is valid"));
static ALTERNATIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]+)\s+(\d{4})\s+or\s+(\d{4})").expect("alternative pattern is valid")
});
static COREQUISITE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)concurrent\s+enrollment|may\s+be\s+taken\s+concurrently")
        .expect("corequisite pattern is valid")
});

/// How far (in bytes) on either side of a course code a corequisite phrase
/// still applies to it.
const COREQUISITE_WINDOW: usize = 50;

/// One requirement named in a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPrerequisite {
    /// `"<SUBJECT> <NUMBER>"`, e.g. `"ECE 2713"`.
    pub course_code: String,
    /// May be taken in the same semester.
    #[serde(default)]
    pub is_corequisite: bool,
    /// Interchangeable courses, `course_code` first. Empty when there is no
    /// alternative.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<String>,
}

impl ParsedPrerequisite {
    pub fn new(course_code: impl Into<String>) -> Self {
        ParsedPrerequisite {
            course_code: course_code.into(),
            is_corequisite: false,
            one_of: Vec::new(),
        }
    }

    /// Course codes any one of which satisfies this requirement.
    pub fn alternatives(&self) -> Vec<&str> {
        if self.one_of.is_empty() {
            vec![self.course_code.as_str()]
        } else {
            self.one_of.iter().map(String::as_str).collect()
        }
    }

    pub fn is_satisfied_by(&self, completed: &[String]) -> bool {
        self.alternatives()
            .iter()
            .any(|code| completed.iter().any(|done| done == code))
    }
}

/// A catalog entry: enough to name a course and read its requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCourse {
    pub subject: String,
    #[serde(alias = "courseNumber")]
    pub number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogCourse {
    pub fn course_code(&self) -> String {
        format!("{} {}", self.subject, self.number)
    }
}

/// A directed "take `source` before `target`" link for the degree flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteEdge {
    /// `e-<PREREQ>-<COURSE>`, e.g. `e-MATH1914-MATH2924`.
    pub id: String,
    /// Lowercase node id of the prerequisite, e.g. `math1914`.
    pub source: String,
    /// Lowercase node id of the course that requires it.
    pub target: String,
    pub corequisite: bool,
    /// The student has completed the prerequisite (or an alternative).
    pub satisfied: bool,
}

/// Extract the requirements from a course description.
///
/// Codes are reported in order of first appearance, once each. A code within
/// reach of "concurrent enrollment" or "may be taken concurrently" is a
/// corequisite. `"MATH 2423 or 2924"` records both numbers as alternatives on
/// the `MATH 2423` entry.
pub fn parse_prerequisites(description: &str) -> Vec<ParsedPrerequisite> {
    let Some(section) = SECTION_REGEX
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return Vec::new();
    };

    let corequisite_phrases: Vec<(usize, usize)> = COREQUISITE_REGEX
        .find_iter(section)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut prerequisites: Vec<ParsedPrerequisite> = Vec::new();
    for caps in COURSE_REGEX.captures_iter(section) {
        let code = format!("{} {}", &caps[1], &caps[2]);
        if prerequisites.iter().any(|p| p.course_code == code) {
            continue;
        }

        let start = caps.get(0).map_or(0, |m| m.start());
        let lo = start.saturating_sub(COREQUISITE_WINDOW);
        let hi = start + COREQUISITE_WINDOW;
        let mut prerequisite = ParsedPrerequisite::new(code);
        prerequisite.is_corequisite = corequisite_phrases
            .iter()
            .any(|&(s, e)| s >= lo && e <= hi);
        prerequisites.push(prerequisite);
    }

    for caps in ALTERNATIVE_REGEX.captures_iter(section) {
        let first = format!("{} {}", &caps[1], &caps[2]);
        let second = format!("{} {}", &caps[1], &caps[3]);
        if let Some(entry) = prerequisites.iter_mut().find(|p| p.course_code == first) {
            entry.one_of = vec![first, second];
        }
    }

    debug!(found = prerequisites.len(), "parsed prerequisites");
    prerequisites
}

/// Well-known requirements for the Computer Engineering sequence, used when a
/// catalog description states none.
pub fn common_prerequisites(course_code: &str) -> &'static [&'static str] {
    match course_code {
        "MATH 2924" => &["MATH 1914"],
        "MATH 2934" => &["MATH 2924"],
        "MATH 3113" => &["MATH 2924"],
        "PHYS 2514" => &["MATH 1914"],
        "PHYS 2524" => &["PHYS 2514", "MATH 2924"],
        "ECE 2723" => &["PHYS 2524", "MATH 2924"],
        "ECE 3723" => &["ECE 2723"],
        "ECE 2713" => &["MATH 2924"],
        "ECE 3793" => &["ECE 2713", "MATH 3113"],
        "ECE 4273" => &["ECE 3793"],
        "ECE 3613" => &["PHYS 2524", "MATH 2934"],
        "CS 2334" => &["CS 1323"],
        "CS 2413" => &["CS 1323"],
        "CS 3203" => &["CS 2334", "CS 2413"],
        _ => &[],
    }
}

/// Requirements from the description, falling back to [`common_prerequisites`].
pub fn prerequisites_for(course: &CatalogCourse) -> Vec<ParsedPrerequisite> {
    let parsed = parse_prerequisites(&course.description);
    if !parsed.is_empty() {
        return parsed;
    }
    common_prerequisites(&course.course_code())
        .iter()
        .map(|code| ParsedPrerequisite::new(*code))
        .collect()
}

/// Prerequisites of `course` not yet met by `completed`. Corequisites are
/// left out since they can be taken alongside the course.
pub fn unmet_prerequisites(course: &CatalogCourse, completed: &[String]) -> Vec<ParsedPrerequisite> {
    prerequisites_for(course)
        .into_iter()
        .filter(|p| !p.is_corequisite && !p.is_satisfied_by(completed))
        .collect()
}

/// Edges between courses in `courses`. A prerequisite that is not itself in
/// the list gets no edge.
pub fn prerequisite_edges(courses: &[CatalogCourse], completed: &[String]) -> Vec<PrerequisiteEdge> {
    let codes: Vec<String> = courses.iter().map(CatalogCourse::course_code).collect();

    let mut edges = Vec::new();
    for course in courses {
        let target = format!("{}{}", course.subject, course.number);
        for prerequisite in prerequisites_for(course) {
            if !codes.contains(&prerequisite.course_code) {
                continue;
            }
            let source = prerequisite.course_code.replace(' ', "");
            edges.push(PrerequisiteEdge {
                id: format!("e-{}-{}", source, target),
                source: source.to_lowercase(),
                target: target.to_lowercase(),
                corequisite: prerequisite.is_corequisite,
                satisfied: prerequisite.is_satisfied_by(completed),
            });
        }
    }
    edges
}
