// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod reminder;

pub use activity::{Activity, ActivityDraft, Category, Status};
pub use reminder::DueReminder;
