use super::common::ErrorResponse;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status}: {message}")]
    Remote {
        status: u16,
        message: String,
        correlation_id: Option<String>,
    },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Builds the error of a non 2xx response from its status and raw body
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
        let correlation_id = parsed.as_ref().and_then(|e| e.correlation_id.clone());

        let message = match parsed.and_then(|e| e.error_message) {
            Some(serde_json::Value::String(message)) => message,
            Some(serde_json::Value::Null) | None => fallback_message(status, body),
            Some(other) => other.to_string(),
        };

        ApiError::Remote {
            status: status.as_u16(),
            message,
            correlation_id,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");
    let body = body.trim();
    if body.is_empty() {
        reason.to_string()
    } else {
        format!("{} {}", reason, body)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::InvalidUrl(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_error_message_is_used() {
        let error = ApiError::from_response(
            StatusCode::NOT_FOUND,
            r#"{"correlationId":"abc","errorCode":"404","errorMessage":"Resource not found"}"#,
        );

        assert_eq!(error.to_string(), "404: Resource not found");
        assert!(error.is_not_found());
        match error {
            ApiError::Remote { correlation_id, .. } => {
                assert_eq!(correlation_id.as_deref(), Some("abc"))
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn object_error_message_is_rendered_as_json() {
        let error = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"errorMessage":{"reference":["too long"]}}"#,
        );

        assert_eq!(error.to_string(), r#"400: {"reference":["too long"]}"#);
    }

    #[test]
    fn unparsable_body_falls_back_to_status_and_body() {
        let error = ApiError::from_response(StatusCode::BAD_GATEWAY, "upstream down");

        assert_eq!(error.to_string(), "502: Bad Gateway upstream down");
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn empty_body_uses_reason() {
        let error = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "");

        assert_eq!(error.to_string(), "500: Internal Server Error");
    }
}
