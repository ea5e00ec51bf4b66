//! Detect overlapping sections in a weekly schedule.
//!
//! Two sections conflict when they share at least one meeting day and their
//! time ranges overlap. Ranges are half-open, so a class ending at 10:50 and
//! another starting at 10:50 do NOT conflict. A section whose time string does
//! not parse never conflicts with anything.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::class::ScheduledClass;
use crate::time::{parse_class_time, MeetingDay, ParsedSchedule};

/// The first scheduled class a candidate collides with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeConflict<'a> {
    pub conflicting_class: &'a ScheduledClass,
    /// Shared meeting days, in the candidate's day order.
    pub conflicting_days: Vec<MeetingDay>,
    pub overlap_minutes: u32,
}

impl fmt::Display for TimeConflict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time conflict with {} on {}",
            self.conflicting_class.course_code(),
            join_days(&self.conflicting_days)
        )
    }
}

/// A conflicting pair within one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassConflict<'a> {
    pub first: &'a ScheduledClass,
    pub second: &'a ScheduledClass,
    pub conflicting_days: Vec<MeetingDay>,
    pub overlap_minutes: u32,
}

impl fmt::Display for ClassConflict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} overlaps {} on {} ({} min)",
            self.first.course_code(),
            self.second.course_code(),
            join_days(&self.conflicting_days),
            self.overlap_minutes
        )
    }
}

/// Find the first class in `existing` whose meeting pattern overlaps `candidate`.
///
/// Classes are checked in iteration order and the first hit is returned; this is
/// not necessarily the largest overlap. Returns `None` when the candidate's time
/// does not parse, and skips existing classes whose time does not parse.
pub fn check_time_conflict<'a>(
    candidate: &ScheduledClass,
    existing: &'a [ScheduledClass],
) -> Option<TimeConflict<'a>> {
    first_conflict(candidate, existing.iter())
}

/// Like [`check_time_conflict`], but ignores the candidate itself and the section
/// identified by `exclude_id` (the one being replaced in a section switch).
pub fn check_time_conflict_excluding<'a>(
    candidate: &ScheduledClass,
    existing: &'a [ScheduledClass],
    exclude_id: Option<&str>,
) -> Option<TimeConflict<'a>> {
    let others = existing
        .iter()
        .filter(|c| c.id != candidate.id && Some(c.id.as_str()) != exclude_id);
    first_conflict(candidate, others)
}

/// Yes/no form of [`check_time_conflict`].
pub fn has_time_conflict(candidate: &ScheduledClass, existing: &[ScheduledClass]) -> bool {
    check_time_conflict(candidate, existing).is_some()
}

/// `"Time conflict with <subject> <number> on <days>"`, e.g.
/// `"Time conflict with MATH 1914 on MW"`.
pub fn format_conflict_message(conflict: &TimeConflict<'_>) -> String {
    conflict.to_string()
}

/// Every conflicting pair in a schedule, ordered by the position of the first
/// class and then the second.
pub fn find_all_conflicts(classes: &[ScheduledClass]) -> Vec<ClassConflict<'_>> {
    let parsed: Vec<(&ScheduledClass, ParsedSchedule)> = classes
        .iter()
        .filter_map(|c| parse_class_time(&c.time).map(|p| (c, p)))
        .collect();

    let mut conflicts = Vec::new();
    for (i, (first, a)) in parsed.iter().enumerate() {
        for (second, b) in &parsed[i + 1..] {
            if let Some((conflicting_days, overlap_minutes)) = overlap(a, b) {
                debug!(
                    first = %first.id,
                    second = %second.id,
                    overlap_minutes,
                    "schedule conflict"
                );
                conflicts.push(ClassConflict {
                    first,
                    second,
                    conflicting_days,
                    overlap_minutes,
                });
            }
        }
    }

    conflicts
}

fn first_conflict<'a>(
    candidate: &ScheduledClass,
    existing: impl Iterator<Item = &'a ScheduledClass>,
) -> Option<TimeConflict<'a>> {
    let Some(candidate_time) = parse_class_time(&candidate.time) else {
        debug!(class = %candidate.id, time = %candidate.time, "unparseable time, skipping conflict check");
        return None;
    };

    for other in existing {
        let Some(other_time) = parse_class_time(&other.time) else {
            continue;
        };
        if let Some((conflicting_days, overlap_minutes)) = overlap(&candidate_time, &other_time) {
            debug!(candidate = %candidate.id, existing = %other.id, "time conflict");
            return Some(TimeConflict {
                conflicting_class: other,
                conflicting_days,
                overlap_minutes,
            });
        }
    }

    None
}

/// Shared days (in `a`'s order) and overlap length, if the two patterns collide.
fn overlap(a: &ParsedSchedule, b: &ParsedSchedule) -> Option<(Vec<MeetingDay>, u32)> {
    let shared: Vec<MeetingDay> = a.days.iter().copied().filter(|d| b.meets_on(*d)).collect();
    if shared.is_empty() {
        return None;
    }

    let (s1, e1) = (a.start_minutes(), a.end_minutes());
    let (s2, e2) = (b.start_minutes(), b.end_minutes());

    // [s1, e1) and [s2, e2) overlap iff s1 < e2 AND s2 < e1.
    if s1 < e2 && s2 < e1 {
        // Saturating: a malformed range with end before start still collides.
        Some((shared, e1.min(e2).saturating_sub(s1.max(s2))))
    } else {
        None
    }
}

fn join_days(days: &[MeetingDay]) -> String {
    days.iter().map(|d| d.letter()).collect()
}
