//! Defines routes for the photo booth API.
//!
//! ## Structure
//! - **Photo endpoints** (nested under `/api/photos`)
//!   - `POST /api/photos/upload` — encode a photo and return a QR download link
//!   - `GET  /api/photos/download/{file_name}` — download stub, always empty 200
//!
//! - **Health**
//!   - `GET /healthz` — liveness
//!
//! Anything else falls through to the static frontend directory when one is
//! configured. CORS is open to every origin.

use crate::{
    handlers::{
        health_handlers::healthz,
        photo_handlers::{download_photo, upload_photo},
    },
    services::photo_service::PhotoService,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

/// Build the router for the photo endpoints.
///
/// The router carries shared state (`PhotoService`) to all handlers.
pub fn routes() -> Router<PhotoService> {
    let photos = Router::new()
        .route("/upload", post(upload_photo))
        .route("/download/{file_name}", get(download_photo));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api/photos", photos)
}

/// Compose the full application: routes, state, static fallback and layers.
pub fn app(service: PhotoService, max_upload_bytes: usize, static_dir: Option<&str>) -> Router {
    let mut router = routes().with_state(service);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
