//! src/services/qr_service.rs
//!
//! Renders text payloads as square, grayscale QR code PNGs.

use image::{GrayImage, ImageError, ImageFormat, Luma, imageops};
use qrcode::{EcLevel, QrCode, types::QrError};
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

const WHITE: Luma<u8> = Luma([255]);

#[derive(Debug, Error)]
pub enum QrRenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] QrError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] ImageError),
}

/// Renders QR codes at a fixed target size.
///
/// The code (quiet zone included) is scaled by the largest whole-pixel module
/// size that fits `size`, then centred on a white `size`×`size` canvas. A code
/// that cannot fit at one pixel per module is emitted at its natural size.
#[derive(Clone, Copy, Debug)]
pub struct QrRenderer {
    size: u32,
}

impl QrRenderer {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Encode `data` into a QR matrix and rasterize it.
    pub fn render(&self, data: &str) -> Result<GrayImage, QrRenderError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)?;
        let matrix = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .max_dimensions(self.size, self.size)
            .build();

        let side = self.size.max(matrix.width()).max(matrix.height());
        let mut canvas = GrayImage::from_pixel(side, side, WHITE);
        let x = (side - matrix.width()) / 2;
        let y = (side - matrix.height()) / 2;
        imageops::overlay(&mut canvas, &matrix, i64::from(x), i64::from(y));

        debug!(
            "Rendered QR version {:?} ({} modules) onto {}x{} canvas",
            code.version(),
            code.width(),
            side,
            side
        );
        Ok(canvas)
    }

    /// Render `data` and serialize the result as PNG bytes.
    pub fn render_png(&self, data: &str) -> Result<Vec<u8>, QrRenderError> {
        let image = self.render(data)?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(image: &GrayImage) -> String {
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            image.width() as usize,
            image.height() as usize,
            |x, y| image.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR grid");
        let (_, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn renders_requested_square_size() {
        let image = QrRenderer::new(200)
            .render("http://localhost:8080/api/photos/download/a.jpg")
            .unwrap();
        assert_eq!(image.dimensions(), (200, 200));
    }

    #[test]
    fn rendered_code_decodes_to_input() {
        let url = "http://localhost:8080/api/photos/download/0b8f8c1e-3c61-4c7e-9a51-2f1b5a4d9e77.jpg";
        let image = QrRenderer::new(200).render(url).unwrap();
        assert_eq!(decode(&image), url);
    }

    #[test]
    fn corners_stay_white() {
        let image = QrRenderer::new(200).render("corner check").unwrap();
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert_eq!(*image.get_pixel(199, 199), WHITE);
    }

    #[test]
    fn grows_canvas_when_size_too_small() {
        let image = QrRenderer::new(10).render("tiny canvas").unwrap();
        assert!(image.width() > 10);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn png_output_round_trips_through_decoder() {
        let png = QrRenderer::new(200).render_png("png payload").unwrap();
        let image = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .to_luma8();
        assert_eq!(image.dimensions(), (200, 200));
        assert_eq!(decode(&image), "png payload");
    }

    #[test]
    fn oversized_payload_fails_to_encode() {
        let payload = "x".repeat(8000);
        let err = QrRenderer::new(200).render_png(&payload).unwrap_err();
        assert!(matches!(err, QrRenderError::Encode(QrError::DataTooLong)));
    }
}
