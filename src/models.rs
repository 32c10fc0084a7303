use serde::Deserialize;

use crate::error::WatchError;

/// One homework record as returned by the API.
///
/// Every field is optional: the API contract is enforced by
/// [`parse_status`], not by deserialization, so a record missing its name
/// or status produces a precise error instead of a generic decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub homework_name: Option<String>,
    pub reviewer_comment: Option<String>,
    pub date_updated: Option<String>,
    pub lesson_name: Option<String>,
}

/// The closed set of review states the API may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Reviewing,
    Approved,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "reviewing" => Some(Self::Reviewing),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict sentence for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Turns a homework record into the notification text.
///
/// Fails if the record has no name, no status, or a status outside the
/// closed [`HomeworkStatus`] set.
pub fn parse_status(homework: &Homework) -> Result<String, WatchError> {
    let name = homework
        .homework_name
        .as_deref()
        .ok_or(WatchError::MissingName)?;
    let code = homework.status.as_deref().ok_or(WatchError::MissingStatus)?;
    let status = HomeworkStatus::from_code(code).ok_or_else(|| WatchError::UnknownStatus {
        status: code.to_string(),
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
