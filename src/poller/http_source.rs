// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP-backed reminder source.
//!
//! Talks to the reminder routes with a bounded request timeout so a slow
//! server costs at most one tick. Any transport or status failure maps to
//! [`FetchError`]; the poller decides what to do with it.

use crate::models::DueReminder;
use crate::poller::{FetchError, ReminderSource};
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpReminderSource {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct RemindersBody {
    reminders: Vec<DueReminder>,
}

impl HttpReminderSource {
    /// `base_url` without a trailing slash, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }
}

impl ReminderSource for HttpReminderSource {
    async fn fetch_due(&self) -> Result<Vec<DueReminder>, FetchError> {
        let body: RemindersBody = self
            .client
            .get(format!("{}/api/reminders", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body.reminders)
    }

    async fn acknowledge(&self, activity_id: u64) -> Result<(), FetchError> {
        self.client
            .post(format!(
                "{}/api/reminders/{}/ack",
                self.base_url, activity_id
            ))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
