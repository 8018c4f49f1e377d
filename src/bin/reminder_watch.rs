// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reminder watcher
//!
//! Stand-in for the scheduling view's polling loop: polls a running
//! Dayplan server for due reminders and prints each alert once. Useful
//! for watching the reminder surface without the frontend.
//!
//! Configuration via environment: `DAYPLAN_URL` (default
//! `http://localhost:8080`), `DAYPLAN_TOKEN` (required),
//! `POLL_INTERVAL_SECS` (default 60).

use dayplan::poller::{HttpReminderSource, ReminderPoller};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reminder_watch=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .init();

    dotenvy::dotenv().ok();
    let base_url =
        std::env::var("DAYPLAN_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let token = std::env::var("DAYPLAN_TOKEN")?;
    let period: u64 = std::env::var("POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| "60".to_string())
        .parse()?;

    let source = HttpReminderSource::new(base_url.clone(), token)?;
    let (alerts_tx, mut alerts) = mpsc::channel(16);
    let handle = ReminderPoller::new(source, alerts_tx, Duration::from_secs(period)).spawn();

    tracing::info!(%base_url, period, "Watching for due reminders, Ctrl-C to stop");

    loop {
        tokio::select! {
            alert = alerts.recv() => {
                match alert {
                    Some(reminder) => {
                        println!(
                            "{} {} at {} (starts {} {})",
                            reminder.category.icon(),
                            reminder.title,
                            reminder.trigger_time,
                            reminder.date,
                            reminder.start_time,
                        );
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    handle.stop().await;
    Ok(())
}
