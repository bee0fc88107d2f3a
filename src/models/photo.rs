//! Represents the result of a processed photo upload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Extension appended to every generated file name, whatever the upload holds.
pub const PHOTO_EXTENSION: &str = "jpg";

/// JSON payload returned by `POST /api/photos/upload`.
///
/// Built per request and never stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    /// Uploaded bytes, base64 encoded.
    pub photo_base64: String,

    /// PNG of a QR code pointing at `download_url`, base64 encoded.
    pub qr_code_base64: String,

    /// Link embedding the generated file name.
    pub download_url: String,
}

/// Generate a fresh `<uuid>.jpg` file name.
pub fn generate_file_name() -> String {
    format!("{}.{}", Uuid::new_v4(), PHOTO_EXTENSION)
}
