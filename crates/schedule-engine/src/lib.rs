//! # schedule-engine
//!
//! Weekly class-schedule logic for SoonerFlow.
//!
//! Section meeting times arrive as compact strings such as `"MWF 10:00am-10:50am"`.
//! This crate parses them, detects day/time overlaps between sections, and projects
//! a schedule onto calendar events, either on a fixed template week or expanded
//! over a full semester.
//!
//! Parsing fails soft: a time string that cannot be parsed (`""`, `"TBA"`, garbage)
//! yields `None`, and the class simply takes no part in conflict checks or the
//! calendar.
//!
//! ## Modules
//!
//! - [`time`] — time string → [`ParsedSchedule`]
//! - [`conflict`] — detect overlapping sections
//! - [`calendar`] — template-week calendar events
//! - [`recurrence`] — semester-long weekly expansion via RRULE
//! - [`schedule`] — add / drop / switch sections on a student schedule
//! - [`semester`] — terms, registrar codes, semester windows
//! - [`progress`] — GPA and degree credit progress
//! - [`prerequisite`] — prerequisites from catalog text, course graph edges
//! - [`config`] — planner configuration
//! - [`error`] — Error types

pub mod calendar;
pub mod class;
pub mod config;
pub mod conflict;
pub mod error;
pub mod prerequisite;
pub mod progress;
pub mod recurrence;
pub mod schedule;
pub mod semester;
pub mod time;

pub use calendar::{process_calendar_events, CalendarEvent, EventColor, TemplateWeek};
pub use class::ScheduledClass;
pub use config::PlannerConfig;
pub use conflict::{
    check_time_conflict, check_time_conflict_excluding, find_all_conflicts,
    format_conflict_message, has_time_conflict, ClassConflict, TimeConflict,
};
pub use error::ScheduleError;
pub use prerequisite::{
    parse_prerequisites, prerequisite_edges, CatalogCourse, ParsedPrerequisite, PrerequisiteEdge,
};
pub use recurrence::expand_class_over_semester;
pub use schedule::Schedule;
pub use semester::{Semester, Term};
pub use time::{parse_class_time, MeetingDay, ParsedSchedule, ParsedTime};
