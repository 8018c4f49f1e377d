// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side reminder polling loop.
//!
//! Asks a [`ReminderSource`] for due reminders on a fixed period and
//! surfaces each one exactly once per session. The "already surfaced" set
//! is an explicit `HashSet` owned by the poller with the lifetime of the
//! loop, so the dedupe logic is unit-testable on its own.
//!
//! Each occurrence moves Unseen -> Surfaced -> Acknowledged. The local
//! set is authoritative for suppressing repeats within the session; the
//! server acknowledgment is best-effort on top of it.

pub mod http_source;

pub use http_source::HttpReminderSource;

use crate::models::DueReminder;
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Transient failure while talking to the reminder source. Never fatal:
/// the tick that hit it is abandoned and the next tick retries.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FetchError(pub String);

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError(err.to_string())
    }
}

/// Where the poller gets due reminders and reports acknowledgments.
pub trait ReminderSource: Send + 'static {
    fn fetch_due(&self) -> impl Future<Output = Result<Vec<DueReminder>, FetchError>> + Send;
    fn acknowledge(
        &self,
        activity_id: u64,
    ) -> impl Future<Output = Result<(), FetchError>> + Send;
}

/// The polling loop state. Construct, then [`spawn`](Self::spawn).
pub struct ReminderPoller<S> {
    source: S,
    alerts: mpsc::Sender<DueReminder>,
    period: Duration,
    /// Activity IDs already surfaced this session.
    surfaced: HashSet<u64>,
}

impl<S: ReminderSource> ReminderPoller<S> {
    pub fn new(source: S, alerts: mpsc::Sender<DueReminder>, period: Duration) -> Self {
        Self {
            source,
            alerts,
            period,
            surfaced: HashSet::new(),
        }
    }

    /// Run one poll cycle. Returns `false` once the alert receiver is
    /// gone, which means the owning view was torn down.
    async fn tick(&mut self) -> bool {
        let due = match self.source.fetch_due().await {
            Ok(due) => due,
            Err(err) => {
                tracing::debug!(error = %err, "Reminder fetch failed, retrying next tick");
                return true;
            }
        };

        for reminder in due {
            let activity_id = reminder.activity_id;
            if !self.surfaced.insert(activity_id) {
                continue; // already surfaced this session
            }

            tracing::info!(activity_id, trigger = %reminder.trigger_time, "Surfacing reminder");
            if self.alerts.send(reminder).await.is_err() {
                return false;
            }

            // Best-effort server acknowledgment. The local set already
            // suppresses repeats for this session, so a failure here must
            // not block the tick or re-emit the alert.
            if let Err(err) = self.source.acknowledge(activity_id).await {
                tracing::warn!(activity_id, error = %err, "Reminder acknowledgment failed");
            }
        }

        true
    }

    /// Start the loop. The first tick fires immediately; later ticks wait
    /// out the full period and never overlap, because each cycle is
    /// awaited before the next interval tick is polled.
    pub fn spawn(mut self) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if !self.tick().await {
                            break;
                        }
                    }
                    _ = shutdown_rx.recv() => break,
                }
            }
        });

        PollerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Handle for stopping a spawned poller.
pub struct PollerHandle {
    shutdown: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the loop and wait for it to finish. After this returns there
    /// are no further ticks and no further alerts.
    pub async fn stop(self) {
        let _ = self.shutdown.send(()).await;
        let _ = self.task.await;
    }
}
