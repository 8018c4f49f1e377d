// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store with typed operations.
//!
//! One record per activity, keyed by server-assigned ID and scoped by
//! owner. Owner scoping is enforced here: a lookup with the wrong owner
//! behaves exactly like a lookup for a missing ID, so callers cannot
//! distinguish foreign records from absent ones.

use crate::models::Activity;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared activity store. Cloning is cheap and clones see the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    activities: Arc<DashMap<u64, Activity>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new activity, assigning its ID. Returns the stored record.
    pub fn insert(&self, mut activity: Activity) -> Activity {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        activity.id = id;
        self.activities.insert(id, activity.clone());
        activity
    }

    /// Get an activity by ID, scoped to its owner.
    pub fn get(&self, owner_id: u64, id: u64) -> Option<Activity> {
        self.activities
            .get(&id)
            .filter(|a| a.owner_id == owner_id)
            .map(|a| a.clone())
    }

    /// Mutate an activity in place under the entry lock, scoped to its
    /// owner. Returns the updated record, or `None` if no matching
    /// activity exists.
    pub fn update_with<F>(&self, owner_id: u64, id: u64, mutate: F) -> Option<Activity>
    where
        F: FnOnce(&mut Activity),
    {
        let mut entry = self
            .activities
            .get_mut(&id)
            .filter(|a| a.owner_id == owner_id)?;
        mutate(entry.value_mut());
        Some(entry.clone())
    }

    /// Permanently remove an activity, scoped to its owner.
    /// Returns whether a matching record was removed.
    pub fn delete(&self, owner_id: u64, id: u64) -> bool {
        self.activities
            .remove_if(&id, |_, a| a.owner_id == owner_id)
            .is_some()
    }

    /// Snapshot of one owner's activities in creation order.
    ///
    /// Creation order is the "input order" that the stable view sorts
    /// preserve, so it must be deterministic even though the map is not.
    pub fn list_for_owner(&self, owner_id: u64) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .activities
            .iter()
            .filter(|a| a.owner_id == owner_id)
            .map(|a| a.clone())
            .collect();
        activities.sort_by_key(|a| a.id);
        activities
    }
}
