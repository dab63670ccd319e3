use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use truthpulse_core::{Page, Tone, TruthScore, Verdict};
use utoipa::ToSchema;
use uuid::Uuid;

// ============= API Request/Response Types =============

/// Claim submitted for a (mock) truth check.
///
/// Older front-ends send the text under `claim`, `news`, `content` or
/// `message`. The handler picks the first non-empty one, with `text` first.
/// A missing field reads as empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VerifyRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    pub id: Uuid,
    pub claim: String,
    /// Integer in `[0, 100)`, drawn at random
    #[schema(value_type = u32, minimum = 0, maximum = 99)]
    pub truth_score: TruthScore,
    #[schema(value_type = String, example = "partially_true")]
    pub verdict: Verdict,
    /// Display label, e.g. "Partially True"
    pub label: String,
    #[schema(value_type = String, example = "yellow")]
    pub tone: Tone,
    pub checked_at: DateTime<Utc>,
}

impl VerifyResponse {
    pub fn new(claim: String, truth_score: TruthScore) -> Self {
        let verdict = truth_score.verdict();
        Self {
            id: Uuid::new_v4(),
            claim,
            truth_score,
            verdict,
            label: verdict.label().to_string(),
            tone: verdict.tone(),
            checked_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub app: String,
    pub status: String,
    pub docs: String,
    pub health: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    pub path: String,
    pub title: String,
    pub in_nav: bool,
}

impl From<Page> for PageInfo {
    fn from(page: Page) -> Self {
        Self {
            path: page.path().to_string(),
            title: page.title().to_string(),
            in_nav: page.in_nav(),
        }
    }
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::PayloadTooLarge(msg) => (axum::http::StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<truthpulse_core::Error> for AppError {
    fn from(err: truthpulse_core::Error) -> Self {
        match err {
            truthpulse_core::Error::UnknownPage(path) => AppError::NotFound(path),
            other => AppError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
