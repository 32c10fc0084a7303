use std::time::Duration;

use crate::error::WatchError;
use crate::models::parse_status;
use crate::practicum::{check_response, latest_homework, PracticumClient};
use crate::telegram::TelegramClient;

/// The polling loop: owns the cursor timestamp and the last message sent,
/// and drives fetch, validate, interpret and notify once per cycle.
pub struct Watcher {
    practicum: PracticumClient,
    telegram: TelegramClient,
    cursor: i64,
    last_message: String,
}

impl Watcher {
    pub fn new(practicum: PracticumClient, telegram: TelegramClient, cursor: i64) -> Self {
        Self {
            practicum,
            telegram,
            cursor,
            last_message: String::new(),
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// One fetch-validate-interpret-notify pass.
    ///
    /// The cursor advances only after Telegram confirms delivery, so a
    /// failed send leaves the same window to be retried next cycle. A
    /// repeat of the previous message is suppressed without touching the
    /// cursor.
    pub async fn run_cycle(&mut self) -> Result<(), WatchError> {
        tracing::debug!(from_date = self.cursor, "Fetching homework statuses");
        let response = self.practicum.fetch(self.cursor).await?;

        let (homeworks, next_cursor) = check_response(&response)?;
        let Some(latest) = latest_homework(homeworks)? else {
            tracing::debug!("No homework updates in this window");
            return Ok(());
        };

        let message = parse_status(&latest)?;
        if message == self.last_message {
            tracing::debug!("Status unchanged, not notifying");
            return Ok(());
        }

        self.telegram.send_message(&message).await?;
        tracing::info!(cursor = next_cursor, "Notification sent");
        self.last_message = message;
        self.cursor = next_cursor;
        Ok(())
    }

    /// Runs cycles forever, sleeping `interval` between them.
    ///
    /// Per-cycle errors are logged and swallowed; the next tick starts
    /// fresh with the cursor and last message left as they were.
    pub async fn run(mut self, interval: Duration) {
        loop {
            if let Err(err) = self.run_cycle().await {
                tracing::error!(error = %err, "Polling cycle failed");
            }
            tokio::time::sleep(interval).await;
        }
    }
}
