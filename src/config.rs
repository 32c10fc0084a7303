use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Immutable runtime configuration, built once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Reads the configuration, failing on any missing required secret.
    ///
    /// All missing secrets are reported together so one startup attempt is
    /// enough to see the whole problem.
    pub fn from_env() -> Result<Self> {
        let mut missing = Vec::new();
        let practicum_token = require("PRACTICUM_TOKEN", &mut missing);
        let telegram_token = require("TELEGRAM_TOKEN", &mut missing);
        let telegram_chat_id = require("TELEGRAM_CHAT_ID", &mut missing);

        if !missing.is_empty() {
            return Err(anyhow!(
                "missing required environment variables: {}",
                missing.join(", ")
            ));
        }

        let poll_interval_secs = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            telegram_chat_id: telegram_chat_id.unwrap_or_default(),
            practicum_endpoint: env::var("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_URL.to_string()),
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }
}

fn require(name: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the process environment is mutated from a single place.
    #[test]
    fn from_env_reports_missing_secrets_and_applies_defaults() {
        for name in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
            env::remove_var(name);
        }
        let err = Config::from_env().unwrap_err().to_string();
        assert!(err.contains("PRACTICUM_TOKEN"));
        assert!(err.contains("TELEGRAM_TOKEN"));
        assert!(err.contains("TELEGRAM_CHAT_ID"));

        env::set_var("PRACTICUM_TOKEN", "p");
        env::set_var("TELEGRAM_TOKEN", "t");
        env::set_var("TELEGRAM_CHAT_ID", "c");
        env::remove_var("PRACTICUM_ENDPOINT");
        env::remove_var("TELEGRAM_API_URL");
        env::set_var("POLL_INTERVAL_SECS", "not-a-number");

        let config = Config::from_env().unwrap();
        assert_eq!(config.practicum_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(
            config.poll_interval,
            Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
        );

        env::set_var("POLL_INTERVAL_SECS", "30");
        let config = Config::from_env().unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }
}
