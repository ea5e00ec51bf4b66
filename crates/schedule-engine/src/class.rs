//! The scheduled-class record shared by every module.

use serde::{Deserialize, Serialize};

/// Section kind used for labs that carry no credit of their own.
pub const LAB_NO_CREDIT: &str = "Lab with No Credit";

/// A course section a student has placed on their schedule.
///
/// Field names serialize in camelCase so records coming from the web front end
/// load without translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledClass {
    pub id: String,
    pub subject: String,
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub instructor: String,
    /// Compact meeting pattern, e.g. `"MWF 10:00 am-10:50 am"` or `"TBA"`.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub class_type: Option<String>,
}

impl ScheduledClass {
    /// `"<subject> <number>"`, e.g. `"MATH 1914"`.
    pub fn course_code(&self) -> String {
        format!("{} {}", self.subject, self.number)
    }

    pub fn is_no_credit_lab(&self) -> bool {
        self.class_type.as_deref() == Some(LAB_NO_CREDIT)
    }

    /// Whether `other` is another section of the same course.
    pub fn same_course(&self, other: &ScheduledClass) -> bool {
        self.subject == other.subject && self.number == other.number
    }
}
