//! Error types for schedule-engine operations.
//!
//! Time-string parsing, conflict checks and calendar projection never fail;
//! these errors cover the operations that take structured input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Template week must start on a Monday, got {0}")]
    InvalidTemplateWeek(String),

    #[error("Invalid semester: {0}")]
    InvalidSemester(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    #[error("Class {0} is already on the schedule")]
    DuplicateClass(String),

    #[error("Class {0} is not on the schedule")]
    ClassNotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
