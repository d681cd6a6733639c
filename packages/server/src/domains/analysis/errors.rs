use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::kernel::NewsSourceError;

/// Failures surfaced by the analyze endpoint. The scoring pipeline itself never fails.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Topic is required")]
    TopicRequired,

    #[error(transparent)]
    NewsSource(#[from] NewsSourceError),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::TopicRequired => StatusCode::BAD_REQUEST,
            AnalysisError::NewsSource(NewsSourceError::Unreachable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AnalysisError::NewsSource(NewsSourceError::Http { status, .. }) => {
                StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AnalysisError::NewsSource(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing message for the `detail` field.
    pub fn detail(&self) -> String {
        match self {
            AnalysisError::TopicRequired => "Topic is required".to_string(),
            AnalysisError::NewsSource(NewsSourceError::Unreachable(_)) => {
                "Failed to reach NewsAPI".to_string()
            }
            AnalysisError::NewsSource(NewsSourceError::Http {
                message: Some(message),
                ..
            }) => format!("NewsAPI error: {}", message),
            AnalysisError::NewsSource(NewsSourceError::Http {
                status,
                message: None,
            }) => format!("NewsAPI error: HTTP {}", status),
            AnalysisError::NewsSource(NewsSourceError::Provider(message)) => {
                format!("NewsAPI error: {}", message)
            }
            AnalysisError::NewsSource(NewsSourceError::Malformed(_)) => {
                "NewsAPI error: malformed response".to_string()
            }
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, status = status.as_u16(), "Analysis request failed");
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
