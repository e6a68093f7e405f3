use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug)]
pub enum BlogApiError {
    InvalidHeader(String),
    Request(reqwest::Error),
    Status(StatusCode, String),
    Unknown(String),
}

impl BlogApiError {
    /// Raw response body carried by a non-success status, when that is what
    /// this error is.
    #[must_use]
    pub fn status_body(&self) -> Option<&str> {
        match self {
            Self::Status(_, body) => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for BlogApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeader(message) => write!(f, "invalid header: {message}"),
            Self::Request(error) => write!(f, "request error: {error}"),
            Self::Status(status, body) => {
                if body.trim().is_empty() {
                    write!(
                        f,
                        "HTTP {status} {}",
                        status.canonical_reason().unwrap_or("request failed")
                    )
                } else {
                    write!(f, "HTTP {status} {body}")
                }
            }
            Self::Unknown(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for BlogApiError {}

impl From<reqwest::Error> for BlogApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

/// Structured validation failure body some endpoints return alongside a 4xx
/// status: `{ message, details: [{ path, msg }] }`.
///
/// The transport never parses this itself; callers that care about
/// field-level messages (the login flow does) feed the raw body text from
/// [`BlogApiError::Status`] through [`parse_validation_body`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationBody {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Vec<ValidationDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationDetail {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub msg: String,
}

impl ValidationBody {
    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }

    /// Top-level message, when the body carried a non-empty one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

/// Best-effort parse of a raw error body. `None` when the body is not the
/// structured validation shape.
pub fn parse_validation_body(body: &str) -> Option<ValidationBody> {
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::parse_validation_body;

    #[test]
    fn parses_field_level_details() {
        let body = r#"{"success":false,"message":"Validation failed","details":[{"type":"field","value":"x","msg":"Invalid email","path":"email","location":"body"}]}"#;

        let parsed = parse_validation_body(body).expect("structured body should parse");
        assert!(parsed.has_details());
        assert_eq!(parsed.details[0].path, "email");
        assert_eq!(parsed.details[0].msg, "Invalid email");
        assert_eq!(parsed.message(), Some("Validation failed"));
    }

    #[test]
    fn parses_message_only_bodies() {
        let parsed =
            parse_validation_body(r#"{"message":"Invalid credentials"}"#).expect("should parse");
        assert!(!parsed.has_details());
        assert_eq!(parsed.message(), Some("Invalid credentials"));
    }

    #[test]
    fn rejects_non_json_bodies() {
        assert!(parse_validation_body("Internal Server Error").is_none());
    }

    #[test]
    fn blank_messages_read_as_absent() {
        let parsed = parse_validation_body(r#"{"message":"  "}"#).expect("should parse");
        assert_eq!(parsed.message(), None);
    }
}
