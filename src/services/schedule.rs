// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity lifecycle service.
//!
//! The single mutation surface for activities: create, full-field update,
//! status toggle, delete, and reminder acknowledgment. Every operation
//! validates before writing and is scoped to the calling owner; a foreign
//! activity is reported exactly like a missing one.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityDraft, Status};
use crate::store::MemoryStore;

#[derive(Clone)]
pub struct ScheduleService {
    store: MemoryStore,
}

impl ScheduleService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Create a new activity owned by `owner_id`.
    ///
    /// Status starts as Pending and the reminder as unacknowledged. On
    /// validation failure nothing is written.
    pub fn create(&self, owner_id: u64, draft: ActivityDraft) -> Result<Activity> {
        draft.check()?;

        let activity = Activity {
            id: 0, // assigned by the store
            owner_id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            status: Status::Pending,
            reminder_enabled: draft.reminder_enabled,
            reminder_lead_minutes: draft.reminder_lead_minutes,
            reminder_acknowledged: false,
            created_at: chrono::Utc::now(),
        };

        let created = self.store.insert(activity);
        tracing::info!(owner_id, activity_id = created.id, "Activity created");
        Ok(created)
    }

    /// Get one activity.
    pub fn get(&self, owner_id: u64, id: u64) -> Result<Activity> {
        self.store.get(owner_id, id).ok_or_else(|| not_found(id))
    }

    /// Snapshot of all activities for an owner, in creation order.
    pub fn list(&self, owner_id: u64) -> Vec<Activity> {
        self.store.list_for_owner(owner_id)
    }

    /// Replace all client-editable fields of an activity.
    ///
    /// Full-field replace semantics: the caller merges unchanged fields
    /// into the draft before calling. Edits that move the reminder
    /// schedule clear its acknowledgment so the new trigger fires.
    pub fn update(&self, owner_id: u64, id: u64, draft: ActivityDraft) -> Result<Activity> {
        draft.check()?;

        let mut rescheduled = false;
        let updated = self
            .store
            .update_with(owner_id, id, |activity| {
                rescheduled = activity.apply_draft(draft);
            })
            .ok_or_else(|| not_found(id))?;

        tracing::info!(owner_id, activity_id = id, rescheduled, "Activity updated");
        Ok(updated)
    }

    /// Status-only mutation. Setting the current status again is a no-op
    /// success, not an error.
    pub fn set_status(&self, owner_id: u64, id: u64, status: Status) -> Result<Activity> {
        let updated = self
            .store
            .update_with(owner_id, id, |activity| activity.status = status)
            .ok_or_else(|| not_found(id))?;

        tracing::info!(owner_id, activity_id = id, status = ?status, "Activity status set");
        Ok(updated)
    }

    /// Permanently delete an activity. Deleting a missing or foreign
    /// activity is NotFound, never a silent success.
    pub fn delete(&self, owner_id: u64, id: u64) -> Result<()> {
        if !self.store.delete(owner_id, id) {
            return Err(not_found(id));
        }
        tracing::info!(owner_id, activity_id = id, "Activity deleted");
        Ok(())
    }

    /// Mark an activity's reminder as surfaced. Idempotent: acknowledging
    /// twice is a success.
    pub fn acknowledge_reminder(&self, owner_id: u64, id: u64) -> Result<()> {
        self.store
            .update_with(owner_id, id, |activity| {
                activity.reminder_acknowledged = true;
            })
            .ok_or_else(|| not_found(id))?;

        tracing::debug!(owner_id, activity_id = id, "Reminder acknowledged");
        Ok(())
    }
}

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Activity {} not found", id))
}
