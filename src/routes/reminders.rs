// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reminder routes for authenticated users.
//!
//! Reminders are derived from activities at request time; these routes
//! never read cached trigger times.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::DueReminder;
use crate::services::reminders;
use crate::time_utils::local_now;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Reminder routes (require authentication via JWT).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reminders", get(list_reminders))
        .route("/api/reminders/{id}/ack", post(acknowledge_reminder))
}

#[derive(Deserialize)]
struct RemindersQuery {
    /// Evaluation instant; defaults to the host's local now
    as_of: Option<NaiveDateTime>,
    /// Return reminders triggering after `as_of` instead of due ones
    #[serde(default)]
    upcoming: bool,
}

#[derive(Serialize)]
pub struct RemindersResponse {
    pub as_of: NaiveDateTime,
    pub reminders: Vec<DueReminder>,
}

/// List due (default) or upcoming reminders, ascending by trigger time.
async fn list_reminders(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<RemindersQuery>,
) -> Result<Json<RemindersResponse>> {
    let as_of = params.as_of.unwrap_or_else(local_now);
    let snapshot = state.schedule.list(user.user_id);

    let reminders = if params.upcoming {
        reminders::upcoming_reminders(&snapshot, as_of)
    } else {
        reminders::due_reminders(&snapshot, as_of)
    };

    tracing::debug!(
        user_id = user.user_id,
        %as_of,
        upcoming = params.upcoming,
        count = reminders.len(),
        "Derived reminders"
    );

    Ok(Json(RemindersResponse { as_of, reminders }))
}

#[derive(Serialize)]
struct AckResponse {
    acknowledged: bool,
}

/// Mark a reminder as surfaced. Idempotent: acknowledging twice succeeds.
async fn acknowledge_reminder(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<u64>,
) -> Result<Json<AckResponse>> {
    state.schedule.acknowledge_reminder(user.user_id, id)?;
    Ok(Json(AckResponse { acknowledged: true }))
}
