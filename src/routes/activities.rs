// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity routes for authenticated users.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Activity, ActivityDraft, Category, Status};
use crate::services::views::{self, DayBucket, ListFilter};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Activity routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/activities",
            get(list_activities).post(create_activity),
        )
        .route(
            "/api/activities/{id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
        .route("/api/activities/{id}/status", patch(patch_status))
}

// ─── Listing / Views ─────────────────────────────────────────

#[derive(Deserialize)]
struct ListQuery {
    /// Select the single-day timeline view
    date: Option<NaiveDate>,
    /// Select the weekly grid view; any date inside the target week
    week_anchor: Option<NaiveDate>,
    /// Flat list filter
    category: Option<Category>,
    /// Flat list filter
    status: Option<Status>,
}

/// The three view shapes behind one listing endpoint.
#[derive(Serialize)]
#[serde(untagged)]
enum ActivitiesResponse {
    Day {
        date: NaiveDate,
        activities: Vec<Activity>,
    },
    Week {
        days: Vec<DayBucket>,
    },
    List {
        activities: Vec<Activity>,
    },
}

/// List activities: per-day timeline (`date`), weekly grid
/// (`week_anchor`), or flat filtered list (default).
///
/// All three project the same freshly read snapshot, so a view can never
/// lag a committed mutation.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ActivitiesResponse>> {
    if params.date.is_some() && params.week_anchor.is_some() {
        return Err(crate::error::AppError::BadRequest(
            "Specify at most one of 'date' and 'week_anchor'".to_string(),
        ));
    }

    tracing::debug!(
        user_id = user.user_id,
        date = ?params.date,
        week_anchor = ?params.week_anchor,
        "Fetching activities"
    );

    let snapshot = state.schedule.list(user.user_id);

    let response = if let Some(date) = params.date {
        ActivitiesResponse::Day {
            date,
            activities: views::timeline(&snapshot, date),
        }
    } else if let Some(anchor) = params.week_anchor {
        ActivitiesResponse::Week {
            days: views::weekly_grid(&snapshot, anchor),
        }
    } else {
        let filter = ListFilter {
            category: params.category,
            status: params.status,
        };
        ActivitiesResponse::List {
            activities: views::flat_list(&snapshot, filter),
        }
    };

    Ok(Json(response))
}

// ─── CRUD ────────────────────────────────────────────────────

/// Get one activity.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<u64>,
) -> Result<Json<Activity>> {
    Ok(Json(state.schedule.get(user.user_id, id)?))
}

/// Create an activity. Invalid drafts come back as a 422 with a
/// field-keyed error map and write nothing.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(draft): Json<ActivityDraft>,
) -> Result<(StatusCode, Json<Activity>)> {
    let created = state.schedule.create(user.user_id, draft)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an activity's fields (full-field semantics; the client merges).
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<u64>,
    Json(draft): Json<ActivityDraft>,
) -> Result<Json<Activity>> {
    Ok(Json(state.schedule.update(user.user_id, id, draft)?))
}

#[derive(Deserialize)]
struct StatusPatch {
    status: Status,
}

/// Status-only shortcut used by the checkbox toggle in the views.
async fn patch_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<u64>,
    Json(patch): Json<StatusPatch>,
) -> Result<Json<Activity>> {
    Ok(Json(state.schedule.set_status(user.user_id, id, patch.status)?))
}

#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
}

/// Permanently delete an activity.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    state.schedule.delete(user.user_id, id)?;
    Ok(Json(DeleteResponse { success: true }))
}
