//! WASM bindings for schedule-engine.
//!
//! Exposes time parsing, conflict checks, calendar projection, GPA and
//! prerequisite parsing to the web front end via `wasm-bindgen`. All complex
//! types are passed as JSON strings; errors come back as string `JsValue`s.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedule-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/schedule-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/schedule_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use schedule_engine::progress::{calculate_gpa, format_gpa, total_credits, GradedCourse};
use schedule_engine::{MeetingDay, ScheduledClass, TemplateWeek, TimeConflict};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConflictDto {
    conflicting_class_id: String,
    conflicting_course: String,
    conflicting_days: Vec<MeetingDay>,
    overlap_minutes: u32,
    message: String,
}

impl From<&TimeConflict<'_>> for ConflictDto {
    fn from(c: &TimeConflict<'_>) -> Self {
        Self {
            conflicting_class_id: c.conflicting_class.id.clone(),
            conflicting_course: c.conflicting_class.course_code(),
            conflicting_days: c.conflicting_days.clone(),
            overlap_minutes: c.overlap_minutes,
            message: c.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GpaDto {
    gpa: f64,
    formatted: String,
    total_credits: u32,
}

// ---------------------------------------------------------------------------
// JSON plumbing, kept free of JsValue so it runs under native tests
// ---------------------------------------------------------------------------

fn parse_class_json(json: &str) -> Result<ScheduledClass, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid class JSON: {}", e))
}

fn parse_classes_json(json: &str) -> Result<Vec<ScheduledClass>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid classes JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn parse_time_json(time: &str) -> Result<String, String> {
    to_json(&schedule_engine::parse_class_time(time))
}

fn check_conflict_json(
    candidate_json: &str,
    existing_json: &str,
    exclude_id: Option<&str>,
) -> Result<String, String> {
    let candidate = parse_class_json(candidate_json)?;
    let existing = parse_classes_json(existing_json)?;

    let conflict = schedule_engine::check_time_conflict_excluding(&candidate, &existing, exclude_id);
    to_json(&conflict.as_ref().map(ConflictDto::from))
}

fn has_conflict_json(candidate_json: &str, existing_json: &str) -> Result<bool, String> {
    let candidate = parse_class_json(candidate_json)?;
    let existing = parse_classes_json(existing_json)?;
    Ok(schedule_engine::has_time_conflict(&candidate, &existing))
}

fn calendar_events_json(classes_json: &str, template_monday: Option<&str>) -> Result<String, String> {
    let classes = parse_classes_json(classes_json)?;
    let week = match template_monday {
        Some(raw) => {
            let monday = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| format!("Invalid date '{}': {}", raw, e))?;
            TemplateWeek::new(monday).map_err(|e| e.to_string())?
        }
        None => TemplateWeek::default(),
    };

    to_json(&schedule_engine::process_calendar_events(&classes, &week))
}

fn gpa_json(courses_json: &str) -> Result<String, String> {
    let courses: Vec<GradedCourse> = serde_json::from_str(courses_json)
        .map_err(|e| format!("Invalid courses JSON: {}", e))?;
    let gpa = calculate_gpa(&courses);

    to_json(&GpaDto {
        gpa,
        formatted: format_gpa(gpa),
        total_credits: total_credits(&courses),
    })
}

fn prerequisites_json(description: &str) -> Result<String, String> {
    to_json(&schedule_engine::parse_prerequisites(description))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Parse a meeting time such as `"MWF 10:00 am-10:50 am"`.
///
/// Returns `{days, startTime, endTime}` as JSON, or `"null"` when the string
/// does not describe a meeting time (e.g. `"TBA"`).
#[wasm_bindgen(js_name = "parseClassTime")]
pub fn parse_class_time(time: &str) -> Result<String, JsValue> {
    parse_time_json(time).map_err(|e| JsValue::from_str(&e))
}

/// Check whether a candidate section overlaps any class on the schedule.
///
/// `candidate_json` is one class object, `existing_json` an array of them.
/// `exclude_id` names a section to ignore, such as the one being switched out.
/// Returns `null` or `{conflictingClassId, conflictingCourse, conflictingDays,
/// overlapMinutes, message}`.
#[wasm_bindgen(js_name = "checkTimeConflict")]
pub fn check_time_conflict(
    candidate_json: &str,
    existing_json: &str,
    exclude_id: Option<String>,
) -> Result<String, JsValue> {
    check_conflict_json(candidate_json, existing_json, exclude_id.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = "hasTimeConflict")]
pub fn has_time_conflict(candidate_json: &str, existing_json: &str) -> Result<bool, JsValue> {
    has_conflict_json(candidate_json, existing_json).map_err(|e| JsValue::from_str(&e))
}

/// Project classes onto the template week. `template_monday` (`YYYY-MM-DD`)
/// defaults to 2024-01-01.
#[wasm_bindgen(js_name = "processCalendarEvents")]
pub fn process_calendar_events(
    classes_json: &str,
    template_monday: Option<String>,
) -> Result<String, JsValue> {
    calendar_events_json(classes_json, template_monday.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// Credit-weighted GPA of a JSON array of `{credits, grade}` objects.
#[wasm_bindgen(js_name = "calculateGpa")]
pub fn calculate_gpa_wasm(courses_json: &str) -> Result<String, JsValue> {
    gpa_json(courses_json).map_err(|e| JsValue::from_str(&e))
}

/// Requirements named in a catalog description, as a JSON array of
/// `{courseCode, isCorequisite, oneOf?}`.
#[wasm_bindgen(js_name = "parsePrerequisites")]
pub fn parse_prerequisites(description: &str) -> Result<String, JsValue> {
    prerequisites_json(description).map_err(|e| JsValue::from_str(&e))
}
