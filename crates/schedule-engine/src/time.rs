//! Meeting-time parsing -- converts compact section time strings into day letters
//! and clock times.
//!
//! Accepted shape is `"<days> <start>-<end>"`, for example `"TR 1:30pm-2:45pm"` or
//! `"MWF 9:00 am-9:50 am"`. Parsing fails soft: anything that does not fit that
//! shape yields `None` rather than an error.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A weekday a section can meet on. Thursday is always `R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeetingDay {
    M,
    T,
    W,
    R,
    F,
}

impl MeetingDay {
    pub const ALL: [MeetingDay; 5] = [
        MeetingDay::M,
        MeetingDay::T,
        MeetingDay::W,
        MeetingDay::R,
        MeetingDay::F,
    ];

    pub fn letter(self) -> char {
        match self {
            MeetingDay::M => 'M',
            MeetingDay::T => 'T',
            MeetingDay::W => 'W',
            MeetingDay::R => 'R',
            MeetingDay::F => 'F',
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            MeetingDay::M => Weekday::Mon,
            MeetingDay::T => Weekday::Tue,
            MeetingDay::W => Weekday::Wed,
            MeetingDay::R => Weekday::Thu,
            MeetingDay::F => Weekday::Fri,
        }
    }

    /// Weekend days have no meeting-day letter.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        MeetingDay::ALL.into_iter().find(|d| d.weekday() == weekday)
    }

    /// Two-letter RFC 5545 BYDAY code (`MO`, `TU`, ...).
    pub fn byday(self) -> &'static str {
        match self {
            MeetingDay::M => "MO",
            MeetingDay::T => "TU",
            MeetingDay::W => "WE",
            MeetingDay::R => "TH",
            MeetingDay::F => "FR",
        }
    }
}

/// Time of day. `hour` is not range-checked: `"13:00pm"` parses to hour 25.
/// Arithmetic on absurd values saturates instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTime {
    pub hour: u32,
    pub min: u32,
}

impl ParsedTime {
    /// Minutes since midnight, saturating at `u32::MAX`.
    pub fn to_minutes(self) -> u32 {
        self.hour.saturating_mul(60).saturating_add(self.min)
    }
}

/// Meeting days plus start and end time of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSchedule {
    pub days: Vec<MeetingDay>,
    pub start_time: ParsedTime,
    pub end_time: ParsedTime,
}

impl ParsedSchedule {
    pub fn start_minutes(&self) -> u32 {
        self.start_time.to_minutes()
    }

    pub fn end_minutes(&self) -> u32 {
        self.end_time.to_minutes()
    }

    pub fn meets_on(&self, day: MeetingDay) -> bool {
        self.days.contains(&day)
    }
}

/// Parse a section time string such as `"MWF 10:00am-10:50am"`.
///
/// Returns `None` for empty input, `"TBA"`, fewer than two whitespace-separated
/// tokens, a time range that does not split into exactly two parts on `-`, or an
/// hour that is not a number.
pub fn parse_class_time(raw: &str) -> Option<ParsedSchedule> {
    if raw.trim().is_empty() || raw == "TBA" {
        return None;
    }

    let mut tokens = raw.split_whitespace();
    let days_token = tokens.next()?;
    let range_tokens: Vec<&str> = tokens.collect();
    if range_tokens.is_empty() {
        return None;
    }

    // "9:00 am-9:50 am" arrives as several tokens.
    let range = range_tokens.join(" ");
    let mut parts = range.split('-');
    let (start, end) = match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => (start, end),
        _ => return None,
    };
    if start.trim().is_empty() || end.trim().is_empty() {
        return None;
    }

    let start_time = parse_time_string(start)?;
    let end_time = parse_time_string(end)?;

    Some(ParsedSchedule {
        days: parse_class_days(days_token),
        start_time,
        end_time,
    })
}

/// Decode a day token left to right. `"Th"` and `"R"` both mean Thursday;
/// characters that are not day letters are skipped.
pub fn parse_class_days(token: &str) -> Vec<MeetingDay> {
    let mut days = Vec::new();
    let mut chars = token.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'T' if chars.peek() == Some(&'h') => {
                chars.next();
                days.push(MeetingDay::R);
            }
            'R' => days.push(MeetingDay::R),
            'M' => days.push(MeetingDay::M),
            'T' => days.push(MeetingDay::T),
            'W' => days.push(MeetingDay::W),
            'F' => days.push(MeetingDay::F),
            _ => {}
        }
    }

    days
}

/// Parse one clock time like `"1:30pm"`, `"9:00 am"` or `"14"`.
///
/// Only lowercase `am`/`pm` are recognised. A missing or non-numeric minute
/// becomes 0; a non-numeric hour yields `None`.
pub fn parse_time_string(raw: &str) -> Option<ParsedTime> {
    let clean = raw.trim();
    let is_pm = clean.contains("pm");
    let is_am = clean.contains("am");

    let stripped = clean.replace("pm", "").replace("am", "");
    let time_only = stripped.trim();

    let (hour_str, min_str) = match time_only.split_once(':') {
        Some((hour, min)) => (hour, Some(min)),
        None => (time_only, None),
    };

    let mut hour = leading_number(hour_str)?;
    let min = min_str.and_then(leading_number).unwrap_or(0);

    if is_pm && hour != 12 {
        hour = hour.saturating_add(12);
    }
    if is_am && hour == 12 {
        hour = 0;
    }

    Some(ParsedTime { hour, min })
}

/// Digits at the start of `s` (after leading whitespace), if any.
fn leading_number(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}
