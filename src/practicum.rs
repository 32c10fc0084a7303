use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::WatchError;
use crate::models::Homework;

/// Client for the Practicum homework-status endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            token,
        }
    }

    /// Fetches all homeworks whose status changed since `timestamp`.
    ///
    /// Anything but HTTP 200 is its own error, distinct from transport
    /// failures, so an unreachable endpoint and a misbehaving one are told
    /// apart in the logs.
    pub async fn fetch(&self, timestamp: i64) -> Result<Value, WatchError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(WatchError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

/// Checks the fetched payload against the documented shape.
///
/// Returns the homework sequence untouched together with the server's
/// cursor timestamp. Each clause of the contract fails with its own error
/// so the log says exactly what the server got wrong. Individual records
/// are not inspected here; only the one picked for interpretation is ever
/// decoded, via [`latest_homework`].
pub fn check_response(response: &Value) -> Result<(&[Value], i64), WatchError> {
    let object = response
        .as_object()
        .ok_or(WatchError::ResponseNotObject)?;

    for key in ["homeworks", "current_date"] {
        if !object.contains_key(key) {
            return Err(WatchError::MissingKey { key });
        }
    }

    let homeworks = object["homeworks"]
        .as_array()
        .ok_or(WatchError::HomeworksNotList)?;
    let cursor = object["current_date"]
        .as_i64()
        .ok_or(WatchError::CursorNotInteger)?;

    Ok((homeworks.as_slice(), cursor))
}

/// Decodes the first (most recent) record of a validated sequence, if any.
pub fn latest_homework(homeworks: &[Value]) -> Result<Option<Homework>, WatchError> {
    homeworks
        .first()
        .map(|record| serde_json::from_value(record.clone()))
        .transpose()
        .map_err(WatchError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_response_passes() {
        let response = json!({
            "homeworks": [{"homework_name": "X", "status": "approved"}],
            "current_date": 1000,
        });
        let (homeworks, cursor) = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["homework_name"], "X");
        assert_eq!(cursor, 1000);
    }

    #[test]
    fn empty_homework_list_is_valid() {
        let response = json!({"homeworks": [], "current_date": 0});
        let (homeworks, cursor) = check_response(&response).unwrap();
        assert!(homeworks.is_empty());
        assert_eq!(cursor, 0);
    }

    #[test]
    fn non_object_response_is_rejected() {
        let err = check_response(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, WatchError::ResponseNotObject));
    }

    #[test]
    fn missing_keys_are_named() {
        let err = check_response(&json!({"current_date": 1000})).unwrap_err();
        assert!(matches!(err, WatchError::MissingKey { key: "homeworks" }));

        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, WatchError::MissingKey { key: "current_date" }));
    }

    #[test]
    fn homeworks_must_be_a_list() {
        let response = json!({"homeworks": {"oops": 1}, "current_date": 1000});
        let err = check_response(&response).unwrap_err();
        assert!(matches!(err, WatchError::HomeworksNotList));
    }

    #[test]
    fn cursor_must_be_an_integer() {
        let response = json!({"homeworks": [], "current_date": "1000"});
        let err = check_response(&response).unwrap_err();
        assert!(matches!(err, WatchError::CursorNotInteger));
    }

    #[test]
    fn records_keep_documented_fields() {
        let response = json!({
            "homeworks": [{
                "id": 124,
                "homework_name": "X",
                "status": "rejected",
                "reviewer_comment": "needs work",
                "date_updated": "2026-08-25T10:00:00Z",
                "lesson_name": "Lesson 5",
            }],
            "current_date": 1000,
        });
        let (homeworks, _) = check_response(&response).unwrap();
        let hw = latest_homework(homeworks).unwrap().unwrap();
        assert_eq!(hw.id, Some(124));
        assert_eq!(hw.reviewer_comment.as_deref(), Some("needs work"));
        assert_eq!(hw.lesson_name.as_deref(), Some("Lesson 5"));
    }

    #[test]
    fn validation_leaves_records_uninspected() {
        let response = json!({
            "homeworks": [
                {"homework_name": "X", "status": "approved"},
                {"id": "not-an-int"},
            ],
            "current_date": 1000,
        });
        let (homeworks, cursor) = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(cursor, 1000);

        // Only the most recent record is decoded; the broken trailer is
        // never looked at.
        let hw = latest_homework(homeworks).unwrap().unwrap();
        assert_eq!(hw.homework_name.as_deref(), Some("X"));
    }

    #[test]
    fn latest_homework_of_empty_sequence_is_none() {
        assert!(latest_homework(&[]).unwrap().is_none());
    }
}
