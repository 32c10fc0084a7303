use serde::{Deserialize, Serialize};

use crate::error::WatchError;

/// Thin client for the Telegram Bot API, used only to send text messages
/// to a fixed chat.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(api_url: String, token: String, chat_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            token,
            chat_id,
        }
    }

    /// Delivers one text message to the configured chat.
    ///
    /// Any failure, transport, HTTP, or an `ok: false` API reply, is
    /// reported as a delivery error so the caller keeps its cursor and
    /// retries the same window next cycle.
    pub async fn send_message(&self, text: &str) -> Result<(), WatchError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| WatchError::Telegram {
                details: err.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|err| WatchError::Telegram {
            details: err.to_string(),
        })?;

        if !status.is_success() {
            return Err(WatchError::Telegram {
                details: format!("HTTP {}: {}", status, body),
            });
        }

        let parsed: SendMessageResponse =
            serde_json::from_str(&body).map_err(|err| WatchError::Telegram {
                details: format!("unreadable API reply: {}", err),
            })?;
        if !parsed.ok {
            return Err(WatchError::Telegram {
                details: parsed
                    .description
                    .unwrap_or_else(|| "API replied ok=false".to_string()),
            });
        }

        tracing::debug!("Telegram message delivered");
        Ok(())
    }
}
