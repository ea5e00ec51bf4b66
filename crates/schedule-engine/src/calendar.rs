//! Project scheduled classes onto a fixed template week for the weekly grid.
//!
//! Every class produces one event per meeting day. Events are anchored to a
//! canonical Monday rather than the real date, so the weekly view shows the
//! same representative week no matter which week the user is looking at.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::class::ScheduledClass;
use crate::error::{Result, ScheduleError};
use crate::time::parse_class_time;

/// Calendar palette understood by the event-calendar component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Sky,
    Amber,
    Violet,
    Rose,
    Emerald,
    Orange,
}

impl EventColor {
    /// Map a class color (Tailwind class or palette hex) onto the calendar
    /// palette. Unknown colors fall back to [`EventColor::Sky`].
    pub fn from_class_color(color: &str) -> Self {
        match color {
            "bg-blue-500" | "#3b82f6" => EventColor::Sky,
            "bg-green-500" | "#10b981" => EventColor::Emerald,
            "bg-purple-500" | "#8b5cf6" => EventColor::Violet,
            "bg-orange-500" | "#f97316" => EventColor::Orange,
            "bg-pink-500" | "#ec4899" => EventColor::Rose,
            _ => EventColor::Sky,
        }
    }
}

/// One occurrence of a class on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
    pub location: String,
}

impl CalendarEvent {
    /// Build an event for `class` on `date`, with start and end given in
    /// minutes since midnight.
    pub(crate) fn for_class(
        class: &ScheduledClass,
        id: String,
        date: NaiveDate,
        start_minutes: u32,
        end_minutes: u32,
    ) -> Self {
        CalendarEvent {
            id,
            title: class.course_code(),
            description: format!("{}\n{}\n{}", class.title, class.instructor, class.location),
            start: at_minutes(date, start_minutes),
            end: at_minutes(date, end_minutes),
            color: EventColor::from_class_color(&class.color),
            location: class.location.clone(),
        }
    }
}

/// The canonical week events are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateWeek {
    monday: NaiveDate,
}

impl TemplateWeek {
    /// # Errors
    /// Returns `ScheduleError::InvalidTemplateWeek` if `monday` is not a Monday.
    pub fn new(monday: NaiveDate) -> Result<Self> {
        if monday.weekday() != Weekday::Mon {
            return Err(ScheduleError::InvalidTemplateWeek(monday.to_string()));
        }
        Ok(TemplateWeek { monday })
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    /// Template date for a day letter. See [`template_day_offset`].
    pub fn date_for(&self, letter: char) -> NaiveDate {
        self.monday + Days::new(u64::from(template_day_offset(letter)))
    }
}

impl Default for TemplateWeek {
    /// Week of Monday 2024-01-01.
    fn default() -> Self {
        TemplateWeek {
            monday: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Days after the template Monday for a day letter.
///
/// Letters other than M, T, W, R, F land on Monday (offset 0). The parser drops
/// such letters instead, so they only reach this function from callers that
/// build day letters themselves.
pub fn template_day_offset(letter: char) -> u32 {
    match letter {
        'M' => 0,
        'T' => 1,
        'W' => 2,
        'R' => 3,
        'F' => 4,
        _ => 0,
    }
}

/// Expand every class into one event per meeting day on `week`.
///
/// Classes whose time string does not parse contribute nothing. Output order is
/// class order, then day order within the class.
pub fn process_calendar_events(classes: &[ScheduledClass], week: &TemplateWeek) -> Vec<CalendarEvent> {
    classes
        .iter()
        .flat_map(|class| {
            let Some(parsed) = parse_class_time(&class.time) else {
                debug!(class = %class.id, time = %class.time, "no calendar events for unparseable time");
                return Vec::new();
            };

            parsed
                .days
                .iter()
                .map(|day| {
                    let letter = day.letter();
                    CalendarEvent::for_class(
                        class,
                        format!("{}-{}", class.id, letter),
                        week.date_for(letter),
                        parsed.start_minutes(),
                        parsed.end_minutes(),
                    )
                })
                .collect()
        })
        .collect()
}

/// Recover the class id from an event id produced by [`process_calendar_events`].
///
/// Splits at the last `-`, so class ids that contain dashes survive.
pub fn class_id_from_event_id(event_id: &str) -> &str {
    event_id
        .rsplit_once('-')
        .map_or(event_id, |(class_id, _)| class_id)
}

/// Distinct subjects in order of first appearance.
pub fn group_classes_by_subject(classes: &[ScheduledClass]) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for class in classes {
        if !subjects.contains(&class.subject) {
            subjects.push(class.subject.clone());
        }
    }
    subjects
}

/// `date` at midnight plus `minutes`. Hours past 23 roll into the next day.
pub(crate) fn at_minutes(date: NaiveDate, minutes: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or(NaiveDateTime::MAX)
}
