//! Backend endpoint protocol
//!
//! Paths, failure classification, and user-facing failure messages for the
//! two recipe backend endpoints. Classification is shared by both clients;
//! the alert wording differs per endpoint, so each gets its own message
//! function.

use thiserror::Error;

use crate::models::ErrorBody;

/// Backend host used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Recipe generation endpoint.
pub const GENERATE_MEAL_PATH: &str = "/generate-meal";

/// Pantry image analysis endpoint.
pub const ANALYZE_PANTRY_PATH: &str = "/analyze-pantry";

/// A failed request to the recipe backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 404: the endpoint is missing or the server is not running
    #[error("endpoint not found (status 404)")]
    NotFound {
        /// Detail message from the response body, when the backend sent one
        detail: Option<String>,
    },

    /// Any other non-success HTTP status
    #[error("server error (status {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Server {
        /// HTTP status code of the response
        status: u16,
        /// Detail message from the response body, when it parsed
        detail: Option<String>,
    },

    /// The request produced no HTTP response: network failure, CORS,
    /// or an undecodable success body
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status of the failure, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }

    /// Detail message extracted from the response body, when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::NotFound { detail } | Self::Server { detail, .. } => detail.as_deref(),
            Self::Transport(_) => None,
        }
    }
}

/// Classify a non-success HTTP response.
///
/// The body is parsed as the backend's `{ "detail": ... }` convention on a
/// best-effort basis; an unparsable body is treated as carrying no detail.
pub fn classify_http_failure(status: u16, raw_body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(raw_body)
        .ok()
        .and_then(|body| body.detail);

    if status == 404 {
        ApiError::NotFound { detail }
    } else {
        ApiError::Server { status, detail }
    }
}

/// Alert text for a failed recipe generation.
///
/// A 404 gets its own message so a missing backend is distinguishable from
/// one that rejected the request.
pub fn recipe_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound { .. } => {
            "Backend endpoint not found. Please check if the server is running.".to_string()
        }
        ApiError::Server {
            detail: Some(detail),
            ..
        } => format!("Error: {detail}"),
        ApiError::Server { detail: None, .. } | ApiError::Transport(_) => {
            "Error: An unknown error occurred".to_string()
        }
    }
}

/// Alert text for a failed pantry image analysis.
///
/// Any HTTP failure surfaces the backend's detail when it sent one; a
/// transport failure gets upload-specific wording since the image may never
/// have left the browser.
pub fn pantry_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound {
            detail: Some(detail),
        }
        | ApiError::Server {
            detail: Some(detail),
            ..
        } => detail.clone(),
        ApiError::NotFound { detail: None } | ApiError::Server { detail: None, .. } => {
            "Failed to analyze pantry image".to_string()
        }
        ApiError::Transport(_) => "Failed to upload image. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Classification
    // ========================================================================

    #[test]
    fn test_classify_404_without_body() {
        let error = classify_http_failure(404, "");
        assert_eq!(error, ApiError::NotFound { detail: None });
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_classify_404_keeps_detail() {
        let error = classify_http_failure(404, r#"{"detail":"no such route"}"#);
        assert_eq!(
            error,
            ApiError::NotFound {
                detail: Some("no such route".to_string())
            }
        );
    }

    #[test]
    fn test_classify_other_status_with_detail() {
        let error = classify_http_failure(422, r#"{"detail":"Invalid input"}"#);
        assert_eq!(
            error,
            ApiError::Server {
                status: 422,
                detail: Some("Invalid input".to_string())
            }
        );
        assert_eq!(error.detail(), Some("Invalid input"));
    }

    #[test]
    fn test_classify_unparsable_body_has_no_detail() {
        let error = classify_http_failure(500, "<html>Internal Server Error</html>");
        assert_eq!(
            error,
            ApiError::Server {
                status: 500,
                detail: None
            }
        );
    }

    // ========================================================================
    // Recipe generation messages
    // ========================================================================

    #[test]
    fn test_recipe_message_for_404() {
        let error = classify_http_failure(404, "");
        assert_eq!(
            recipe_failure_message(&error),
            "Backend endpoint not found. Please check if the server is running."
        );
    }

    #[test]
    fn test_recipe_message_uses_server_detail() {
        let error = classify_http_failure(422, r#"{"detail":"Invalid input"}"#);
        assert_eq!(recipe_failure_message(&error), "Error: Invalid input");
    }

    #[test]
    fn test_recipe_message_without_detail_is_generic() {
        let error = classify_http_failure(500, "");
        assert_eq!(
            recipe_failure_message(&error),
            "Error: An unknown error occurred"
        );
    }

    #[test]
    fn test_recipe_message_for_transport_failure() {
        let error = ApiError::Transport("connection refused".to_string());
        assert_eq!(
            recipe_failure_message(&error),
            "Error: An unknown error occurred"
        );
    }

    // ========================================================================
    // Pantry analysis messages
    // ========================================================================

    #[test]
    fn test_pantry_message_prefers_detail() {
        let error = classify_http_failure(400, r#"{"detail":"Unsupported image type"}"#);
        assert_eq!(pantry_failure_message(&error), "Unsupported image type");
    }

    #[test]
    fn test_pantry_message_uses_detail_even_for_404() {
        let error = classify_http_failure(404, r#"{"detail":"no such route"}"#);
        assert_eq!(pantry_failure_message(&error), "no such route");
    }

    #[test]
    fn test_pantry_message_without_detail() {
        let error = classify_http_failure(500, "");
        assert_eq!(pantry_failure_message(&error), "Failed to analyze pantry image");
    }

    #[test]
    fn test_pantry_message_for_transport_failure() {
        let error = ApiError::Transport("connection refused".to_string());
        assert_eq!(
            pantry_failure_message(&error),
            "Failed to upload image. Please try again."
        );
    }
}
