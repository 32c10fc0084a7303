use thiserror::Error;

/// Everything that can go wrong during one polling cycle.
///
/// Each variant corresponds to a stage of the cycle, so the loop boundary
/// can log a precise failure reason. A fetch that comes back with an
/// unexpected HTTP status is deliberately distinct from a transport failure.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API responded with unexpected status {status}")]
    BadStatus { status: u16 },

    #[error("API response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API response is not a JSON object")]
    ResponseNotObject,

    #[error("API response is missing the `{key}` key")]
    MissingKey { key: &'static str },

    #[error("`homeworks` in the API response is not a list")]
    HomeworksNotList,

    #[error("`current_date` in the API response is not an integer")]
    CursorNotInteger,

    #[error("homework record has no name")]
    MissingName,

    #[error("homework record has no status")]
    MissingStatus,

    #[error("unknown homework status `{status}`")]
    UnknownStatus { status: String },

    #[error("Telegram delivery failed: {details}")]
    Telegram { details: String },
}
