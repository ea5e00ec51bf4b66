//! GPA and degree credit progress.

use serde::{Deserialize, Serialize};

/// Credits needed for a bachelor's degree unless the profile says otherwise.
pub const DEFAULT_REQUIRED_CREDITS: u32 = 120;

/// A completed (or planned) course with its letter grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedCourse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub credits: u32,
    pub grade: String,
}

impl GradedCourse {
    pub fn new(credits: u32, grade: impl Into<String>) -> Self {
        GradedCourse {
            code: None,
            credits,
            grade: grade.into(),
        }
    }
}

/// Points for a letter grade on the 4.0 scale. Unknown grades are worth 0.
pub fn grade_points(grade: &str) -> f64 {
    match grade {
        "A" => 4.0,
        "B" => 3.0,
        "C" => 2.0,
        "D" => 1.0,
        _ => 0.0,
    }
}

pub fn total_credits(courses: &[GradedCourse]) -> u32 {
    courses.iter().map(|c| c.credits).sum()
}

/// Credit-weighted GPA. 0.0 when there are no credits.
pub fn calculate_gpa(courses: &[GradedCourse]) -> f64 {
    let credits = total_credits(courses);
    if credits == 0 {
        return 0.0;
    }
    let points: f64 = courses
        .iter()
        .map(|c| grade_points(&c.grade) * f64::from(c.credits))
        .sum();
    points / f64::from(credits)
}

/// Two decimal places, e.g. `"3.50"`.
pub fn format_gpa(gpa: f64) -> String {
    format!("{:.2}", gpa)
}

/// GPA after adding `planned` courses to a record of `current_credits` at
/// `current_gpa`.
pub fn simulate_gpa(current_gpa: f64, current_credits: u32, planned: &[GradedCourse]) -> f64 {
    let planned_points: f64 = planned
        .iter()
        .map(|c| grade_points(&c.grade) * f64::from(c.credits))
        .sum();
    let credits = current_credits + total_credits(planned);
    if credits == 0 {
        return 0.0;
    }
    (current_gpa * f64::from(current_credits) + planned_points) / f64::from(credits)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeProgress {
    pub completed: u32,
    pub required: u32,
}

impl DegreeProgress {
    pub fn new(completed: u32, required: u32) -> Self {
        DegreeProgress { completed, required }
    }

    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.completed)
    }

    /// Whole percent complete. A degree requiring 0 credits is 100% complete.
    pub fn percent_complete(&self) -> u32 {
        if self.required == 0 {
            return 100;
        }
        (f64::from(self.completed) / f64::from(self.required) * 100.0).round() as u32
    }
}

impl Default for DegreeProgress {
    fn default() -> Self {
        DegreeProgress::new(0, DEFAULT_REQUIRED_CREDITS)
    }
}
