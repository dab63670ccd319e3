//! Mock claim verification
//!
//! The truth score is a uniform random draw; the claim text is echoed back
//! but never inspected.

use crate::{
    AppState,
    types::{AppError, Result, VerifyRequest, VerifyResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;

/// Score a claim
#[utoipa::path(
    post,
    path = "/api/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Truth score for the claim", body = VerifyResponse),
        (status = 400, description = "Body is not a JSON object"),
        (status = 413, description = "Body exceeds server.body_limit_bytes")
    ),
    tag = "verify"
)]
pub async fn verify_claim(
    State(state): State<AppState>,
    body: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<VerifyResponse>> {
    let Json(raw) = body.map_err(rejection_to_error)?;
    let payload = normalize_payload(raw)?;

    let score = state.scorer.draw();
    let response = VerifyResponse::new(payload.text, score);

    info!(
        id = %response.id,
        truth_score = score.value(),
        verdict = %response.verdict,
        "Claim verified"
    );

    Ok(Json(response))
}

/// Compatibility route for front-ends that post to `/verify-claim`
#[utoipa::path(
    post,
    path = "/verify-claim",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Truth score for the claim", body = VerifyResponse),
        (status = 400, description = "Body is not a JSON object"),
        (status = 413, description = "Body exceeds server.body_limit_bytes")
    ),
    tag = "verify"
)]
pub async fn legacy_verify_claim(
    state: State<AppState>,
    body: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<VerifyResponse>> {
    verify_claim(state, body).await
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::InvalidInput(rejection.body_text())
    }
}

/// Keys that may carry the claim text, in lookup order
const TEXT_KEYS: [&str; 5] = ["text", "claim", "news", "content", "message"];

/// The first key holding a non-empty value wins. `null`, `""` and other
/// empty values fall through to the next key; no key at all reads as empty text.
fn normalize_payload(raw: serde_json::Value) -> Result<VerifyRequest> {
    let serde_json::Value::Object(fields) = raw else {
        return Err(AppError::InvalidInput(
            "Request body must be a JSON object.".to_string(),
        ));
    };

    let Some((key, value)) = TEXT_KEYS
        .iter()
        .filter_map(|key| fields.get(*key).map(|value| (*key, value)))
        .find(|(_, value)| !is_empty_value(value))
    else {
        return Ok(VerifyRequest::default());
    };

    match value {
        serde_json::Value::String(text) => Ok(VerifyRequest { text: text.clone() }),
        _ => Err(AppError::InvalidInput(format!("`{key}` must be a string"))),
    }
}

fn is_empty_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_rejects_non_objects() {
        for raw in [json!("text"), json!([1, 2]), json!(null), json!(42)] {
            assert!(matches!(
                normalize_payload(raw),
                Err(AppError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_normalize_accepts_alias() {
        let req = normalize_payload(json!({ "news": "Breaking" })).unwrap();
        assert_eq!(req.text, "Breaking");
    }

    #[test]
    fn test_normalize_rejects_non_string_text() {
        assert!(normalize_payload(json!({ "text": 5 })).is_err());
        assert!(normalize_payload(json!({ "text": "", "claim": [1] })).is_err());
    }

    #[test]
    fn test_normalize_skips_empty_keys() {
        for raw in [
            json!({ "text": "", "claim": "Real claim" }),
            json!({ "text": null, "claim": "Real claim" }),
            json!({ "text": null, "claim": "", "news": null, "message": "Real claim" }),
        ] {
            let req = normalize_payload(raw).unwrap();
            assert_eq!(req.text, "Real claim");
        }
    }

    #[test]
    fn test_normalize_prefers_earlier_keys() {
        let req = normalize_payload(json!({
            "message": "last",
            "content": "fourth",
            "claim": "second",
            "text": "first"
        }))
        .unwrap();
        assert_eq!(req.text, "first");

        let req = normalize_payload(json!({ "news": "third", "content": "fourth" })).unwrap();
        assert_eq!(req.text, "third");
    }

    #[test]
    fn test_normalize_all_empty_is_empty_claim() {
        let req = normalize_payload(json!({ "text": null, "claim": "" })).unwrap();
        assert_eq!(req.text, "");

        let req = normalize_payload(json!({ "severity": "high" })).unwrap();
        assert_eq!(req.text, "");
    }
}
