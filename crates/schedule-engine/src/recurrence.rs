//! Semester-long expansion -- turns a section's weekly meeting pattern into
//! concrete dated events between two dates.
//!
//! Builds an RFC 5545 `FREQ=WEEKLY;BYDAY=..` rule from the parsed days and
//! expands it with the `rrule` crate in the student's timezone.

use chrono::{Datelike, Days, NaiveDate};
use rrule::RRuleSet;
use tracing::debug;

use crate::calendar::CalendarEvent;
use crate::class::ScheduledClass;
use crate::error::{Result, ScheduleError};
use crate::time::{parse_class_time, MeetingDay};

/// Upper bound on instances per class; a semester of MWF meetings is ~50.
/// Windows needing more are truncated.
const MAX_INSTANCES: u16 = 500;

/// Expand one class over every meeting between `window_start` and `window_end`
/// (both inclusive).
///
/// Event ids are `<classId>-<dayLetter>-<YYYY-MM-DD>`. Start and end are local
/// wall-clock times in `timezone`.
///
/// A class whose time string does not parse, that has no meeting days, or that
/// starts at or after midnight yields no events.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid IANA
/// identifier, and `ScheduleError::InvalidRule` if the generated rule is rejected.
pub fn expand_class_over_semester(
    class: &ScheduledClass,
    window_start: NaiveDate,
    window_end: NaiveDate,
    timezone: &str,
) -> Result<Vec<CalendarEvent>> {
    let _tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))?;

    let Some(parsed) = parse_class_time(&class.time) else {
        debug!(class = %class.id, time = %class.time, "unparseable time, nothing to expand");
        return Ok(Vec::new());
    };
    if parsed.days.is_empty() || window_start > window_end {
        return Ok(Vec::new());
    }

    let start_minutes = parsed.start_minutes();
    if start_minutes >= 24 * 60 {
        debug!(class = %class.id, start_minutes, "start time past midnight, nothing to expand");
        return Ok(Vec::new());
    }

    // DTSTART must itself be a meeting day, or the rule would emit it anyway.
    let Some(first_day) = (0..7u64)
        .filter_map(|offset| window_start.checked_add_days(Days::new(offset)))
        .find(|date| MeetingDay::from_weekday(date.weekday()).is_some_and(|d| parsed.meets_on(d)))
    else {
        return Ok(Vec::new());
    };
    if first_day > window_end {
        return Ok(Vec::new());
    }

    let mut byday: Vec<&str> = Vec::new();
    for day in MeetingDay::ALL {
        if parsed.meets_on(day) {
            byday.push(day.byday());
        }
    }

    let dtstart = format!(
        "{}T{:02}{:02}00",
        first_day.format("%Y%m%d"),
        start_minutes / 60,
        start_minutes % 60
    );
    // No UNTIL: instances past the window are cut off after expansion.
    let rrule_text = format!(
        "DTSTART;TZID={}:{}\nRRULE:FREQ=WEEKLY;BYDAY={}",
        timezone,
        dtstart,
        byday.join(",")
    );

    let rrule_set: RRuleSet = rrule_text
        .parse()
        .map_err(|e| ScheduleError::InvalidRule(format!("{}", e)))?;

    let instances = rrule_set.all(MAX_INSTANCES);

    let events = instances
        .dates
        .into_iter()
        .map(|dt| dt.naive_local().date())
        .take_while(|date| *date <= window_end)
        .filter_map(|date| {
            let day = MeetingDay::from_weekday(date.weekday())?;
            Some(CalendarEvent::for_class(
                class,
                format!("{}-{}-{}", class.id, day.letter(), date.format("%Y-%m-%d")),
                date,
                start_minutes,
                parsed.end_minutes(),
            ))
        })
        .collect();

    Ok(events)
}
