//! HTTP handlers for photo uploads and the download link stub.
//! Buffers the uploaded part in memory and delegates the pipeline to
//! `PhotoService`.

use crate::{
    errors::AppError,
    models::photo::PhotoResponse,
    services::photo_service::{PhotoError, PhotoResult, PhotoService},
};
use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::StatusCode,
};
use bytes::Bytes;

/// Multipart field carrying the image.
pub const PHOTO_FIELD: &str = "photo";

/// POST `/api/photos/upload` — encode the `photo` part and attach a QR link.
pub async fn upload_photo(
    State(service): State<PhotoService>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PhotoResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|rejection| PhotoError::Multipart(rejection.body_text()))?;
    let photo = read_photo_field(&mut multipart).await?;

    let response = service.process_upload(&photo)?;
    tracing::info!(
        "Processed photo upload ({} bytes) -> {}",
        photo.len(),
        response.download_url
    );

    Ok(Json(response))
}

/// GET `/api/photos/download/{file_name}` — not backed by storage yet.
pub async fn download_photo(Path(file_name): Path<String>) -> StatusCode {
    tracing::debug!("Download requested for {}", file_name);
    StatusCode::OK
}

/// Return the first `photo` part; other parts are skipped.
async fn read_photo_field(multipart: &mut Multipart) -> PhotoResult<Bytes> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| PhotoError::Multipart(err.body_text()))?
    {
        if field.name() == Some(PHOTO_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|err| PhotoError::Multipart(err.body_text()));
        }
    }

    Err(PhotoError::MissingPhoto)
}
