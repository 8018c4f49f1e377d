// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod reminders;
pub mod schedule;
pub mod views;

pub use schedule::ScheduleService;
