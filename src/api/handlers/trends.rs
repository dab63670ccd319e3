use axum::Json;
use truthpulse_core::TrendsSnapshot;

/// Static trend datasets shown on the Trends page
#[utoipa::path(
    get,
    path = "/api/trends",
    responses(
        (status = 200, description = "Weekly alert, claims timeline and category breakdown")
    ),
    tag = "trends"
)]
pub async fn trends() -> Json<TrendsSnapshot> {
    Json(TrendsSnapshot::current())
}
