use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(crate::api::handlers::health::health))
        .route("/verify", post(crate::api::handlers::verify::verify_claim))
        .route("/trends", get(crate::api::handlers::trends::trends))
        .route("/pages", get(crate::api::handlers::pages::list_pages))
        .route("/pages/{name}", get(crate::api::handlers::pages::get_page))
}
