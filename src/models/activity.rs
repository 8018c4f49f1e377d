// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Scheduled activity model for storage and API.

use crate::time_utils::time_of_day;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Activity category, fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Workout,
    Study,
    Sleep,
    Meal,
    Break,
}

impl Category {
    /// Icon shown next to alerts and list entries. Presentation only,
    /// kept as a static lookup so the domain model stays free of it.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Workout => "🏃",
            Category::Study => "📚",
            Category::Sleep => "😴",
            Category::Meal => "🍽️",
            Category::Break => "☕",
        }
    }
}

/// Completion status of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

/// Stored activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Server-assigned ID, immutable
    pub id: u64,
    /// Owning user; every query is scoped to this
    pub owner_id: u64,
    /// Title, never empty
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    pub category: Category,
    /// Local calendar date the activity occurs on
    pub date: NaiveDate,
    /// Local time of day, strictly before `end_time`
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
    pub status: Status,
    pub reminder_enabled: bool,
    /// Lead in minutes before `start_time`; present whenever the reminder
    /// is enabled
    pub reminder_lead_minutes: Option<u32>,
    /// Whether the reminder for the current schedule was already surfaced.
    /// Cleared whenever an edit changes the reminder schedule.
    pub reminder_acknowledged: bool,
    /// When this activity was created
    pub created_at: DateTime<Utc>,
}

/// Client-supplied activity fields for create and update.
///
/// Update has full-field replace semantics; callers merge before sending.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ActivityDraft {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub reminder_enabled: bool,
    #[validate(range(min = 1, message = "reminder lead must be at least one minute"))]
    pub reminder_lead_minutes: Option<u32>,
}

impl ActivityDraft {
    /// Validate the draft: derive-level field rules plus the cross-field
    /// rules that the derive cannot express. All failures land in one
    /// field-keyed map; nothing is written on failure.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.start_time >= self.end_time {
            let mut err = ValidationError::new("time_order");
            err.message = Some("end time must be after start time".into());
            errors.add("end_time".into(), err);
        }

        if self.reminder_enabled && self.reminder_lead_minutes.is_none() {
            let mut err = ValidationError::new("required");
            err.message = Some("lead minutes are required when the reminder is enabled".into());
            errors.add("reminder_lead_minutes".into(), err);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether applying this draft to `prior` changes the reminder
    /// schedule (start, lead, or enablement). A changed schedule
    /// invalidates any earlier acknowledgment.
    pub fn reschedules_reminder(&self, prior: &Activity) -> bool {
        self.start_time != prior.start_time
            || self.date != prior.date
            || self.reminder_lead_minutes != prior.reminder_lead_minutes
            || self.reminder_enabled != prior.reminder_enabled
    }
}

impl Activity {
    /// Replace all client-editable fields from a validated draft.
    /// Returns whether the reminder schedule changed, in which case the
    /// acknowledgment marker has been cleared.
    pub fn apply_draft(&mut self, draft: ActivityDraft) -> bool {
        let rescheduled = draft.reschedules_reminder(self);

        self.title = draft.title;
        self.description = draft.description;
        self.category = draft.category;
        self.date = draft.date;
        self.start_time = draft.start_time;
        self.end_time = draft.end_time;
        self.reminder_enabled = draft.reminder_enabled;
        self.reminder_lead_minutes = draft.reminder_lead_minutes;

        if rescheduled {
            self.reminder_acknowledged = false;
        }
        rescheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn draft() -> ActivityDraft {
        ActivityDraft {
            title: "Run".to_string(),
            description: None,
            category: Category::Workout,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            reminder_enabled: true,
            reminder_lead_minutes: Some(15),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().check().is_ok());
    }

    #[test]
    fn test_empty_title_is_keyed_to_title() {
        let mut d = draft();
        d.title = String::new();
        let errors = d.check().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_end_before_start_is_keyed_to_end_time() {
        let mut d = draft();
        d.end_time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        let errors = d.check().unwrap_err();
        assert!(errors.field_errors().contains_key("end_time"));
    }

    #[test]
    fn test_equal_start_and_end_rejected() {
        let mut d = draft();
        d.end_time = d.start_time;
        assert!(d.check().is_err());
    }

    #[test]
    fn test_enabled_reminder_requires_lead() {
        let mut d = draft();
        d.reminder_lead_minutes = None;
        let errors = d.check().unwrap_err();
        assert!(errors.field_errors().contains_key("reminder_lead_minutes"));
    }

    #[test]
    fn test_zero_lead_rejected() {
        let mut d = draft();
        d.reminder_lead_minutes = Some(0);
        assert!(d.check().is_err());
    }

    #[test]
    fn test_disabled_reminder_needs_no_lead() {
        let mut d = draft();
        d.reminder_enabled = false;
        d.reminder_lead_minutes = None;
        assert!(d.check().is_ok());
    }

    #[test]
    fn test_apply_draft_clears_acknowledgment_on_reschedule() {
        let mut activity = Activity {
            id: 1,
            owner_id: 10,
            title: "Run".to_string(),
            description: None,
            category: Category::Workout,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            status: Status::Pending,
            reminder_enabled: true,
            reminder_lead_minutes: Some(15),
            reminder_acknowledged: true,
            created_at: Utc::now(),
        };

        let mut d = draft();
        d.start_time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        d.end_time = NaiveTime::from_hms_opt(8, 30, 0).unwrap();

        assert!(activity.apply_draft(d));
        assert!(!activity.reminder_acknowledged);
    }

    #[test]
    fn test_apply_draft_keeps_acknowledgment_on_title_edit() {
        let mut activity = Activity {
            id: 1,
            owner_id: 10,
            title: "Run".to_string(),
            description: None,
            category: Category::Workout,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            status: Status::Pending,
            reminder_enabled: true,
            reminder_lead_minutes: Some(15),
            reminder_acknowledged: true,
            created_at: Utc::now(),
        };

        let mut d = draft();
        d.title = "Morning run".to_string();

        assert!(!activity.apply_draft(d));
        assert!(activity.reminder_acknowledged);
    }
}
