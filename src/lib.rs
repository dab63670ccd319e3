//! # TruthPulse AI
//!
//! Server for the TruthPulse claim-verification demo site. It exposes the
//! same mock behaviour as the Leptos front-end over HTTP: a truth score drawn
//! uniformly from `[0, 100)` and a set of static trend datasets.
//!
//! ## Overview
//!
//! TruthPulse can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `truthpulse-server` binary
//! 2. **As a library** - Mount [`create_app`] inside another axum application
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use truthpulse::{AppState, create_app, utils::toml_config::TruthPulseConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let state = AppState::new(TruthPulseConfig::default());
//!     let app = create_app(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ui` | Embed the front-end from `ui/dist/` and serve it with SPA fallback |
//! | `swagger-ui` | Interactive API documentation at `/swagger-ui/` |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Command-line parsing and subcommands
//! - [`types`] - Request/response types and error handling
//! - [`utils`] - Configuration loading

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Core types (requests, responses, errors).
pub mod types;
/// Embedded front-end assets.
#[cfg(feature = "ui")]
pub mod ui;
/// Configuration utilities (TOML).
pub mod utils;

pub use types::{AppError, Result};
pub use utils::toml_config::{ConfigError, TruthPulseConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use truthpulse_core::{RandomScoreSource, ScoreSource};
use utils::toml_config::{CorsConfig, LogFormat, ServerConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<TruthPulseConfig>,
    /// Where truth scores come from
    pub scorer: Arc<dyn ScoreSource + Send + Sync>,
}

impl AppState {
    /// State drawing scores from the thread-local RNG.
    pub fn new(config: TruthPulseConfig) -> Self {
        Self::with_scorer(config, RandomScoreSource)
    }

    /// State with a caller-supplied score source (tests use a fixed one).
    pub fn with_scorer<S>(config: TruthPulseConfig, scorer: S) -> Self
    where
        S: ScoreSource + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            scorer: Arc::new(scorer),
        }
    }
}

/// Build the full application router: API, legacy routes, OpenAPI document,
/// optional embedded UI, and the tower-http middleware stack.
pub fn create_app(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let mut app = Router::new()
        .nest("/api", api::routes::create_router())
        .route(
            "/verify-claim",
            post(api::handlers::verify::legacy_verify_claim),
        );

    app = with_api_docs(app);
    app = with_front_end(app, &config);

    // `server.body_limit_bytes` replaces axum's built-in 2 MiB extractor cap
    app.layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(feature = "swagger-ui")]
fn with_api_docs(app: Router<AppState>) -> Router<AppState> {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::ApiDoc::openapi()))
}

#[cfg(not(feature = "swagger-ui"))]
fn with_api_docs(app: Router<AppState>) -> Router<AppState> {
    use axum::Json;
    use utoipa::OpenApi;

    app.route(
        "/api-docs/openapi.json",
        get(|| async { Json(api::ApiDoc::openapi()) }),
    )
}

#[cfg(feature = "ui")]
fn with_front_end(app: Router<AppState>, config: &TruthPulseConfig) -> Router<AppState> {
    if config.ui.embed {
        app.fallback(ui::serve_ui)
    } else {
        app.route("/", get(api::handlers::health::service_info))
    }
}

#[cfg(not(feature = "ui"))]
fn with_front_end(app: Router<AppState>, config: &TruthPulseConfig) -> Router<AppState> {
    if config.ui.embed {
        tracing::debug!("ui.embed is set but this binary was built without the `ui` feature");
    }
    app.route("/", get(api::handlers::health::service_info))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allow_any_origin {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `server.log_level`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    if result.is_err() {
        warn!("tracing subscriber already installed");
    }
}
