use anyhow::Result;
use axum::Router;
use std::io::ErrorKind;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    tracing::info!("Starting photo-booth with config: {:?}", cfg);

    if let Some(dir) = cfg.static_dir.as_deref() {
        if !std::path::Path::new(dir).is_dir() {
            tracing::warn!("Static directory {} does not exist; frontend requests will 404", dir);
        }
    }

    // --- Initialize core service ---
    let photos = services::photo_service::PhotoService::new(&cfg.public_url, cfg.qr_size);

    // --- Build router ---
    let app: Router = routes::routes::app(photos, cfg.max_upload_bytes, cfg.static_dir.as_deref());

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
