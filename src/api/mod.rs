//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for TruthPulse, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Verify
//! - `POST /api/verify` - Draw a truth score for a claim
//! - `POST /verify-claim` - Same, for older front-ends
//!
//! ## Trends
//! - `GET /api/trends` - Static alert, timeline and category datasets
//!
//! ## Pages
//! - `GET /api/pages` - Client-side route table
//! - `GET /api/pages/{name}` - One entry of the route table
//!
//! ## Health
//! - `GET /api/health` - Health check endpoint
//! - `GET /` - Service banner (when the front-end is not embedded)
//!
//! # OpenAPI Documentation
//!
//! The OpenAPI document is served at `/api-docs/openapi.json`. When the
//! `swagger-ui` feature is enabled, interactive documentation is available at
//! `/swagger-ui/`.

use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

/// OpenAPI description of the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TruthPulse AI",
        description = "Claim-verification demo API: mock truth scores and static trend analytics"
    ),
    paths(
        handlers::health::health,
        handlers::health::service_info,
        handlers::verify::verify_claim,
        handlers::verify::legacy_verify_claim,
        handlers::trends::trends,
        handlers::pages::list_pages,
        handlers::pages::get_page,
    ),
    components(schemas(
        crate::types::VerifyRequest,
        crate::types::VerifyResponse,
        crate::types::HealthResponse,
        crate::types::ServiceInfo,
        crate::types::PageInfo,
    )),
    tags(
        (name = "verify", description = "Mock claim verification"),
        (name = "trends", description = "Static trend analytics"),
        (name = "pages", description = "Client-side route table"),
        (name = "health", description = "Liveness and service information"),
    )
)]
pub struct ApiDoc;
