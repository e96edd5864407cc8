//! API error types

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::models::Problem;

pub type Result<T> = std::result::Result<T, GtmError>;

#[derive(Debug, Error)]
pub enum GtmError {
    /// Non-success response from the GTM API
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API host '{0}'")]
    InvalidHost(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GtmError {
    /// Build an API error from a failed response body, preferring the problem detail
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<Problem>(body)
            .ok()
            .and_then(|p| match (p.title, p.detail) {
                (Some(title), Some(detail)) => Some(format!("{title}: {detail}")),
                (title, detail) => detail.or(title),
            })
            .unwrap_or_else(|| body.trim().to_string());

        GtmError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_detail_becomes_message() {
        let body = r#"{"type":"x","title":"Not Found","detail":"Property 'www' not found","status":404}"#;
        let err = GtmError::from_response(StatusCode::NOT_FOUND, body);
        assert_eq!(
            err.to_string(),
            "API error (404 Not Found): Not Found: Property 'www' not found"
        );
    }

    #[test]
    fn raw_body_used_when_not_a_problem() {
        let err = GtmError::from_response(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert!(err.to_string().ends_with(": upstream down"));
    }
}
