//! src/services/photo_service.rs
//!
//! PhotoService: the upload pipeline. Names the upload, encodes it, builds
//! its download link and renders that link as a QR code. Nothing is written
//! to disk; the generated file name is never stored.

use crate::{
    models::photo::{PhotoResponse, generate_file_name},
    services::qr_service::{QrRenderError, QrRenderer},
};
use base64::{Engine as _, engine::general_purpose};
use image::ImageError;
use qrcode::types::QrError;
use thiserror::Error;

/// Route prefix the download links point at.
pub const DOWNLOAD_PATH: &str = "/api/photos/download";

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("required multipart field `photo` is missing")]
    MissingPhoto,
    #[error("{0}")]
    Multipart(String),
    #[error("could not encode QR code: {0}")]
    QrEncode(#[from] QrError),
    #[error("could not write QR code PNG: {0}")]
    PngEncode(#[from] ImageError),
}

impl From<QrRenderError> for PhotoError {
    fn from(err: QrRenderError) -> Self {
        match err {
            QrRenderError::Encode(e) => PhotoError::QrEncode(e),
            QrRenderError::Png(e) => PhotoError::PngEncode(e),
        }
    }
}

pub type PhotoResult<T> = Result<T, PhotoError>;

/// Stateless service shared by the photo handlers.
#[derive(Clone, Debug)]
pub struct PhotoService {
    /// Absolute URL prefix for download links, without a trailing slash.
    download_base: String,

    qr: QrRenderer,
}

impl PhotoService {
    /// Create a PhotoService issuing links under `public_url` and rendering
    /// QR codes `qr_size` pixels wide.
    pub fn new(public_url: &str, qr_size: u32) -> Self {
        Self {
            download_base: format!("{}{}", public_url.trim_end_matches('/'), DOWNLOAD_PATH),
            qr: QrRenderer::new(qr_size),
        }
    }

    /// Download link for a generated file name.
    pub fn download_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.download_base, file_name)
    }

    /// Run the upload pipeline over the raw photo bytes.
    pub fn process_upload(&self, photo: &[u8]) -> PhotoResult<PhotoResponse> {
        let file_name = generate_file_name();
        let photo_base64 = general_purpose::STANDARD.encode(photo);

        let download_url = self.download_url(&file_name);
        let qr_png = self.qr.render_png(&download_url)?;
        let qr_code_base64 = general_purpose::STANDARD.encode(&qr_png);

        Ok(PhotoResponse {
            photo_base64,
            qr_code_base64,
            download_url,
        })
    }
}
