// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reminder derivation.
//!
//! Pure read-side logic: reminders are recomputed from activity fields on
//! every call, so the same snapshot and the same `as_of` always produce
//! the same result. There is no cache to fall out of sync after an edit.

use crate::models::{Activity, DueReminder};
use chrono::NaiveDateTime;

/// Reminders that are due at `as_of`: enabled, not yet acknowledged, and
/// triggered at or before `as_of`. Ascending trigger time, ties broken by
/// activity ID for determinism.
pub fn due_reminders(activities: &[Activity], as_of: NaiveDateTime) -> Vec<DueReminder> {
    collect(activities, |r| r.trigger_time <= as_of)
}

/// Reminders that will trigger after `as_of`, for UI previews. Same
/// filter and ordering as [`due_reminders`], opposite side of the cutoff.
pub fn upcoming_reminders(activities: &[Activity], as_of: NaiveDateTime) -> Vec<DueReminder> {
    collect(activities, |r| r.trigger_time > as_of)
}

fn collect<F>(activities: &[Activity], keep: F) -> Vec<DueReminder>
where
    F: Fn(&DueReminder) -> bool,
{
    let mut reminders: Vec<DueReminder> = activities
        .iter()
        .filter(|a| !a.reminder_acknowledged)
        .filter_map(DueReminder::for_activity)
        .filter(|r| keep(r))
        .collect();

    reminders.sort_by(|a, b| {
        a.trigger_time
            .cmp(&b.trigger_time)
            .then_with(|| a.activity_id.cmp(&b.activity_id))
    });
    reminders
}
