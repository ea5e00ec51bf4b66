//! A student's schedule for one semester: add, drop, and switch sections.
//!
//! Switching sections is always drop-then-add. A class is never edited in
//! place, so there is no state where half of the old section and half of the
//! new one are on the schedule.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::class::ScheduledClass;
use crate::conflict::{check_time_conflict, check_time_conflict_excluding};
use crate::error::{Result, ScheduleError};

/// Colors handed to newly added classes, in order.
pub const CLASS_COLORS: [&str; 8] = [
    "#3b82f6", "#10b981", "#8b5cf6", "#f97316", "#ec4899", "#14b8a6", "#6366f1", "#ef4444",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub name: String,
    /// Display name such as `"Fall 2026"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default)]
    pub classes: Vec<ScheduledClass>,
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Schedule {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn find(&self, id: &str) -> Option<&ScheduledClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn total_credits(&self) -> u32 {
        self.classes.iter().map(|c| c.credits).sum()
    }

    /// First palette color not already in use, cycling once all are taken.
    pub fn next_color(&self) -> &'static str {
        CLASS_COLORS
            .iter()
            .copied()
            .find(|color| !self.classes.iter().any(|c| c.color == *color))
            .unwrap_or(CLASS_COLORS[self.classes.len() % CLASS_COLORS.len()])
    }

    /// Add a section. A class without a color gets [`Schedule::next_color`].
    ///
    /// # Errors
    /// `DuplicateClass` if the id is already scheduled, `Conflict` (with the
    /// user-facing message) if it overlaps a scheduled class.
    pub fn add_class(&mut self, mut class: ScheduledClass) -> Result<()> {
        if self.find(&class.id).is_some() {
            return Err(ScheduleError::DuplicateClass(class.id));
        }
        if let Some(conflict) = check_time_conflict(&class, &self.classes) {
            return Err(ScheduleError::Conflict(conflict.to_string()));
        }
        if class.color.is_empty() {
            class.color = self.next_color().to_string();
        }
        debug!(class = %class.id, "added to schedule");
        self.classes.push(class);
        Ok(())
    }

    /// Drop a section and return everything removed.
    ///
    /// Dropping a lecture also drops its no-credit labs (same subject and
    /// number). Dropping a lab drops only the lab. Unknown ids remove nothing.
    pub fn remove_class(&mut self, id: &str) -> Vec<ScheduledClass> {
        let Some(target) = self.find(id).cloned() else {
            return Vec::new();
        };

        let drops_labs = !target.is_no_credit_lab();
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.classes)
            .into_iter()
            .partition(|c| c.id == id || (drops_labs && c.is_no_credit_lab() && c.same_course(&target)));
        self.classes = kept;

        debug!(class = %id, removed = removed.len(), "dropped from schedule");
        removed
    }

    /// Replace section `current_id` with `new_section`, keeping its color.
    ///
    /// The replaced section is ignored when checking for conflicts. If the new
    /// section conflicts with something else the old one is put back.
    ///
    /// # Errors
    /// `ClassNotFound` if `current_id` is not scheduled, `DuplicateClass` if the
    /// new section is already scheduled, `Conflict` on a time conflict.
    pub fn switch_section(&mut self, current_id: &str, mut new_section: ScheduledClass) -> Result<()> {
        let position = self
            .classes
            .iter()
            .position(|c| c.id == current_id)
            .ok_or_else(|| ScheduleError::ClassNotFound(current_id.to_string()))?;

        let old = self.classes.remove(position);
        new_section.color = old.color.clone();

        let rejection = if self.find(&new_section.id).is_some() {
            Some(ScheduleError::DuplicateClass(new_section.id.clone()))
        } else {
            check_time_conflict_excluding(&new_section, &self.classes, Some(&old.id))
                .map(|conflict| ScheduleError::Conflict(conflict.to_string()))
        };

        if let Some(err) = rejection {
            warn!(from = %old.id, to = %new_section.id, error = %err, "section switch rolled back");
            self.classes.insert(position, old);
            return Err(err);
        }

        debug!(from = %old.id, to = %new_section.id, "switched section");
        self.classes.push(new_section);
        Ok(())
    }
}
