//! Embedded front-end
//!
//! Serves the trunk build in `ui/dist/` from the binary. Paths that do not name
//! an asset fall back to `index.html` so the client-side router can resolve
//! them; unknown `/api/*` paths still get a JSON 404.

use crate::types::AppError;
use axum::{
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "ui/dist/"]
struct UiAssets;

const INDEX: &str = "index.html";

/// Fallback handler: embedded asset, or the SPA shell.
pub async fn serve_ui(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if path.starts_with("api/") {
        return AppError::NotFound(format!("/{}", path)).into_response();
    }

    if !path.is_empty() {
        if let Some(response) = asset(path) {
            return response;
        }
        if has_extension(path) {
            debug!(path, "Missing UI asset");
            return StatusCode::NOT_FOUND.into_response();
        }
    }

    asset(INDEX).unwrap_or_else(|| {
        AppError::Internal("UI was not built into this binary".to_string()).into_response()
    })
}

fn asset(path: &str) -> Option<Response> {
    let file = UiAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(([(header::CONTENT_TYPE, mime.as_ref().to_string())], file.data).into_response())
}

fn has_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|last| last.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension("assets/app.wasm"));
        assert!(has_extension("favicon.ico"));
        assert!(!has_extension("verify"));
        assert!(!has_extension("nested/route"));
    }
}
