// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-side view projections.
//!
//! The three schedule views are named pure functions over one immutable
//! snapshot of the store, so they cannot diverge from each other or lag
//! behind a mutation. None of them mutate status or touch reminders.

use crate::models::{Activity, Category, Status};
use crate::time_utils::week_of;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional equality filters for the flat list view.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListFilter {
    pub category: Option<Category>,
    pub status: Option<Status>,
}

/// One day of the weekly grid. Days without activities are present with
/// an empty list, never missing.
#[derive(Debug, Clone, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

/// Activities on one calendar date, ascending by start time.
///
/// The sort is stable: activities sharing a start time keep their input
/// (creation) order.
pub fn timeline(snapshot: &[Activity], date: NaiveDate) -> Vec<Activity> {
    let mut day: Vec<Activity> = snapshot.iter().filter(|a| a.date == date).cloned().collect();
    day.sort_by_key(|a| a.start_time);
    day
}

/// The 7 days of the week containing `anchor`, each bucketed with its
/// activities. Every activity in the window lands in exactly one bucket.
pub fn weekly_grid(snapshot: &[Activity], anchor: NaiveDate) -> Vec<DayBucket> {
    week_of(anchor)
        .into_iter()
        .map(|date| DayBucket {
            date,
            activities: timeline(snapshot, date),
        })
        .collect()
}

/// All activities matching the filters, ascending by `(date, start_time)`.
pub fn flat_list(snapshot: &[Activity], filter: ListFilter) -> Vec<Activity> {
    let mut list: Vec<Activity> = snapshot
        .iter()
        .filter(|a| filter.category.is_none_or(|c| a.category == c))
        .filter(|a| filter.status.is_none_or(|s| a.status == s))
        .cloned()
        .collect();
    list.sort_by_key(|a| (a.date, a.start_time));
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};

    fn activity(id: u64, date: (u32, u32), start: (u32, u32), category: Category) -> Activity {
        Activity {
            id,
            owner_id: 10,
            title: format!("activity {}", id),
            description: None,
            category,
            date: NaiveDate::from_ymd_opt(2024, date.0, date.1).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
            status: Status::Pending,
            reminder_enabled: false,
            reminder_lead_minutes: None,
            reminder_acknowledged: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_timeline_filters_and_sorts_by_start() {
        let snapshot = vec![
            activity(1, (6, 1), (9, 0), Category::Study),
            activity(2, (6, 2), (7, 0), Category::Study),
            activity(3, (6, 1), (7, 0), Category::Workout),
        ];

        let day = timeline(&snapshot, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let ids: Vec<u64> = day.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_timeline_equal_starts_keep_input_order() {
        let snapshot = vec![
            activity(5, (6, 1), (7, 0), Category::Study),
            activity(2, (6, 1), (7, 0), Category::Workout),
            activity(9, (6, 1), (7, 0), Category::Meal),
        ];

        let day = timeline(&snapshot, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let ids: Vec<u64> = day.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_weekly_grid_has_seven_buckets_including_empty() {
        // Week of 2024-06-05: Sun 06-02 .. Sat 06-08.
        let snapshot = vec![
            activity(1, (6, 3), (8, 0), Category::Study),
            activity(2, (6, 8), (9, 0), Category::Workout),
            activity(3, (6, 10), (9, 0), Category::Workout), // outside window
        ];

        let grid = weekly_grid(&snapshot, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        assert_eq!(grid.len(), 7);
        assert_eq!(grid[0].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert!(grid[0].activities.is_empty());

        let bucketed: usize = grid.iter().map(|d| d.activities.len()).sum();
        assert_eq!(bucketed, 2);
    }

    #[test]
    fn test_weekly_grid_buckets_each_activity_once() {
        let snapshot: Vec<Activity> = (0..7)
            .map(|i| activity(i + 1, (6, 2 + i as u32), (8, 0), Category::Study))
            .collect();

        let grid = weekly_grid(&snapshot, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        for day in &grid {
            assert_eq!(day.activities.len(), 1);
            assert_eq!(day.activities[0].date, day.date);
        }
    }

    #[test]
    fn test_flat_list_filters_by_category_and_status() {
        let mut done = activity(1, (6, 1), (7, 0), Category::Workout);
        done.status = Status::Completed;
        let snapshot = vec![
            done,
            activity(2, (6, 1), (8, 0), Category::Workout),
            activity(3, (6, 1), (9, 0), Category::Meal),
        ];

        let workouts = flat_list(
            &snapshot,
            ListFilter {
                category: Some(Category::Workout),
                status: None,
            },
        );
        assert_eq!(workouts.len(), 2);

        let pending_workouts = flat_list(
            &snapshot,
            ListFilter {
                category: Some(Category::Workout),
                status: Some(Status::Pending),
            },
        );
        assert_eq!(pending_workouts.len(), 1);
        assert_eq!(pending_workouts[0].id, 2);
    }

    #[test]
    fn test_flat_list_sorts_by_date_then_start() {
        let snapshot = vec![
            activity(1, (6, 2), (7, 0), Category::Study),
            activity(2, (6, 1), (9, 0), Category::Study),
            activity(3, (6, 1), (7, 0), Category::Study),
        ];

        let list = flat_list(&snapshot, ListFilter::default());
        let ids: Vec<u64> = list.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
