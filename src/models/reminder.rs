// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Derived reminder model.
//!
//! Reminders are never authored or stored on their own: each one is a
//! projection of its activity, recomputed on every read so an edited
//! schedule can never leave a stale trigger behind.

use crate::models::{Activity, Category};
use crate::time_utils::{time_of_day, trigger_time};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A reminder derived from an activity with reminders enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueReminder {
    /// The activity this reminder belongs to (also the acknowledgment key)
    pub activity_id: u64,
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    pub lead_minutes: u32,
    /// `date + start_time - lead_minutes`
    pub trigger_time: NaiveDateTime,
}

impl DueReminder {
    /// Derive the reminder for an activity, if it carries one.
    ///
    /// Returns `None` for activities without an enabled reminder; the
    /// acknowledgment filter is applied by the caller so upcoming previews
    /// can still include acknowledged entries if they want to.
    pub fn for_activity(activity: &Activity) -> Option<Self> {
        if !activity.reminder_enabled {
            return None;
        }
        let lead_minutes = activity.reminder_lead_minutes?;

        Some(Self {
            activity_id: activity.id,
            title: activity.title.clone(),
            category: activity.category,
            date: activity.date,
            start_time: activity.start_time,
            lead_minutes,
            trigger_time: trigger_time(activity.date, activity.start_time, lead_minutes),
        })
    }
}
