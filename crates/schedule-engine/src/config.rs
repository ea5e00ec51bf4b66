//! Planner configuration.
//!
//! Everything the engine would otherwise read from ambient state (which week
//! the calendar is drawn on, the student's timezone, the degree's credit
//! requirement) is carried in an explicit [`PlannerConfig`] value.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::TemplateWeek;
use crate::error::{Result, ScheduleError};
use crate::progress::DEFAULT_REQUIRED_CREDITS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Monday of the template week the weekly view is drawn on.
    pub template_monday: NaiveDate,
    /// IANA timezone used for semester expansion.
    pub timezone: String,
    pub required_credits: u32,
    pub include_summer: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            template_monday: TemplateWeek::default().monday(),
            timezone: "America/Chicago".to_string(),
            required_credits: DEFAULT_REQUIRED_CREDITS,
            include_summer: false,
        }
    }
}

impl PlannerConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.template_week()?;
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| ScheduleError::InvalidTimezone(self.timezone.clone()))?;
        Ok(())
    }

    pub fn template_week(&self) -> Result<TemplateWeek> {
        TemplateWeek::new(self.template_monday)
    }
}
