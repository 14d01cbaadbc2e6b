//! Telegram delivery adapter.
//!
//! Wraps the Bot API `sendMessage` call for one fixed chat. No retries here:
//! if delivery fails the orchestrator reports it and the next cycle is the
//! retry. The Bot API answers 200 with `{"ok": false}` for API-level
//! failures, so both transport errors and `ok != true` map to
//! [`BotError::Delivery`].

use serde::Deserialize;
use serde_json::json;

use reviewbot_common::error::BotError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Subset of the Bot API response envelope we care about.
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends plaintext notifications to a single Telegram chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: TELEGRAM_API_BASE.to_string(),
            bot_token,
            chat_id,
        }
    }

    /// Point the notifier at a different Bot API host (used by tests).
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base;
        self
    }

    /// Deliver one message to the configured chat.
    pub async fn notify(&self, text: &str) -> Result<(), BotError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Delivery(format!(
                "Telegram ответил кодом {status}"
            )));
        }

        let body: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;

        if !body.ok {
            return Err(BotError::Delivery(
                body.description
                    .unwrap_or_else(|| "Telegram ответил ok=false".to_string()),
            ));
        }

        tracing::debug!(chat_id = %self.chat_id, "Message delivered to Telegram chat");
        Ok(())
    }
}
