// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Dayplan: activity scheduling and reminders for the student health
//! tracker.
//!
//! This crate provides the backend API for time-boxed daily activities
//! and their derived reminders, plus the polling client component that
//! surfaces each due reminder exactly once.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod poller;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::ScheduleService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub schedule: ScheduleService,
}
