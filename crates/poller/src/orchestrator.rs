//! The polling loop.
//!
//! One cycle = fetch → validate → dispatch every item → advance the cursor,
//! or route the failure to the error handler. Exactly one logical worker:
//! the cursor and the last-error memo are plain fields, mutated only after
//! the network calls of a cycle have returned.

use std::time::Duration;

use chrono::Utc;

use reviewbot_common::error::BotError;
use reviewbot_notifier::TelegramNotifier;

use crate::fetcher::StatusFetcher;
use crate::{translator, validator};

/// Drives the fetch → validate → translate → notify cycle at a fixed interval.
pub struct Orchestrator {
    fetcher: StatusFetcher,
    notifier: TelegramNotifier,
    poll_interval: Duration,
    /// End the process after a successful cycle with zero work items.
    exit_on_empty: bool,
    /// Skip items that fail translation instead of aborting the cycle.
    skip_bad_items: bool,
    /// Start of the next query window (Unix seconds). Never rewound.
    cursor: i64,
    /// Signature of the last error forwarded to the chat. Repeats of the same
    /// signature are suppressed until a cycle succeeds or the error changes.
    last_error: Option<String>,
}

/// What a single cycle did, for the loop's exit decision and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Cycle succeeded; carries the number of work items retrieved.
    Completed(usize),
    /// Cycle failed and the error went through the suppression gate.
    Failed,
}

impl Orchestrator {
    pub fn new(fetcher: StatusFetcher, notifier: TelegramNotifier, poll_interval_secs: u64) -> Self {
        Self {
            fetcher,
            notifier,
            poll_interval: Duration::from_secs(poll_interval_secs),
            exit_on_empty: false,
            skip_bad_items: false,
            cursor: Utc::now().timestamp(),
            last_error: None,
        }
    }

    /// End the loop once a successful cycle returns zero work items.
    pub fn with_exit_on_empty(mut self, exit_on_empty: bool) -> Self {
        self.exit_on_empty = exit_on_empty;
        self
    }

    /// Skip work items that fail translation instead of aborting the cycle.
    pub fn with_skip_bad_items(mut self, skip_bad_items: bool) -> Self {
        self.skip_bad_items = skip_bad_items;
        self
    }

    /// Start of the next query window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Signature of the last error forwarded to the chat, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start the polling loop. Runs until the task is cancelled, or — with
    /// `exit_on_empty` — until a successful cycle comes back empty.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        tracing::info!(
            cursor = self.cursor,
            poll_interval_secs = self.poll_interval.as_secs(),
            "Review-status poller started"
        );

        loop {
            let outcome = self.tick().await;

            if self.exit_on_empty && outcome == CycleOutcome::Completed(0) {
                tracing::info!("No work items retrieved and exit_on_empty is set, stopping");
                return Ok(());
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Run one full cycle: dispatch on success advances the cursor and clears
    /// the error memo; a failure goes through the duplicate-suppression gate.
    pub async fn tick(&mut self) -> CycleOutcome {
        match self.run_cycle().await {
            Ok(retrieved) => {
                // Clock slew must not rewind the query window.
                self.cursor = self.cursor.max(Utc::now().timestamp());
                self.last_error = None;
                CycleOutcome::Completed(retrieved)
            }
            Err(e) => {
                self.handle_error(e).await;
                CycleOutcome::Failed
            }
        }
    }

    /// Fetch, validate and dispatch all retrieved work items.
    ///
    /// Returns the number of items retrieved. Delivery failures are logged
    /// and do not fail the cycle; translation failures abort it unless
    /// `skip_bad_items` is set.
    async fn run_cycle(&self) -> Result<usize, BotError> {
        let body = self.fetcher.fetch(self.cursor).await?;
        let items = validator::validate(&body)?;

        if items.is_empty() {
            tracing::debug!("No reviewed work items since last cycle");
            return Ok(0);
        }

        for item in items {
            let message = match translator::translate(item) {
                Ok(message) => message,
                Err(e) if self.skip_bad_items => {
                    tracing::warn!(error = %e, "Skipping work item that failed translation");
                    continue;
                }
                Err(e) => return Err(e),
            };

            match self.notifier.notify(&message).await {
                Ok(()) => tracing::info!(message = %message, "Status change delivered"),
                // Delivery is retried implicitly by the next cycle; a failed
                // send must not abort the remaining items.
                Err(e) => tracing::error!(error = %e, "Failed to deliver status change"),
            }
        }

        Ok(items.len())
    }

    /// Forward the error to the chat unless it repeats the previous one.
    async fn handle_error(&mut self, error: BotError) {
        let signature = error.signature();
        tracing::error!(error = %signature, "Polling cycle failed");

        if self.last_error.as_deref() == Some(signature.as_str()) {
            tracing::debug!("Same error as last cycle, notification suppressed");
            return;
        }

        if let Err(e) = self.notifier.notify(&signature).await {
            tracing::error!(error = %e, "Failed to deliver error notification");
        }
        self.last_error = Some(signature);
    }
}
