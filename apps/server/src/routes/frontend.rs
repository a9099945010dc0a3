//! Static serving for the packaged desktop build.
//!
//! The prebuilt frontend bundle is served byte-for-byte from disk. Paths that
//! match no file fall back to `index.html` (status 200) so client-side routes
//! still resolve after a full page load. Unknown `/api/` paths are refused
//! with a plain 404 instead of the index page. Development builds never
//! attach these routes; the Vite dev server owns the frontend there.

use std::path::Path;

use axum::http::StatusCode;
use axum::routing::any;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::state::AppState;

/// Registers `assets_dir` as the fallback for every non-API path no route
/// claims. A missing directory is only a warning; the routes still attach and
/// serve 404s until the bundle shows up.
pub fn attach_static_routes(router: Router<AppState>, assets_dir: &Path) -> Router<AppState> {
    if assets_dir.is_dir() {
        info!("Serving frontend assets from {}", assets_dir.display());
    } else {
        warn!(
            "Frontend assets directory {} not found; static files will not be served",
            assets_dir.display()
        );
    }

    // `not_found_service` would force status 404 onto the index fallback
    let index = assets_dir.join("index.html");
    let assets = ServeDir::new(assets_dir).fallback(ServeFile::new(index));
    router
        .route("/api/*rest", any(api_not_found))
        .fallback_service(assets)
}

/// Keeps API misses out of the static fallback; a JSON client asking for an
/// unknown endpoint gets a 404, never the SPA index.
async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
