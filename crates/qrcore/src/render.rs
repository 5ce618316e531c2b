//! QR code rendering
//!
//! Turns a link plus a fill/background color pair into PNG bytes. The fixed
//! configuration is error correction level L, the smallest version that fits
//! the data, 10 px per module and a 4-module quiet zone.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

use crate::color::HexColor;
use crate::config::qr::BOX_SIZE;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The data cannot be encoded (too long for any QR version, ...)
    #[error("cannot encode data: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// PNG encoding failed
    #[error("cannot write PNG: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders QR codes. Implementations must be pure: same input, same bytes.
pub trait QrRenderer: Send + Sync {
    fn render(&self, text: &str, fill: &HexColor, back: &HexColor) -> Result<Vec<u8>, RenderError>;
}

/// PNG renderer built on the `qrcode` and `image` crates
#[derive(Debug, Default, Clone, Copy)]
pub struct PngRenderer;

fn rgba(color: &HexColor) -> Rgba<u8> {
    let [r, g, b] = color.rgb();
    Rgba([r, g, b, u8::MAX])
}

impl QrRenderer for PngRenderer {
    fn render(&self, text: &str, fill: &HexColor, back: &HexColor) -> Result<Vec<u8>, RenderError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)?;

        let image = code
            .render::<Rgba<u8>>()
            .dark_color(rgba(fill))
            .light_color(rgba(back))
            .quiet_zone(true)
            .module_dimensions(BOX_SIZE, BOX_SIZE)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        log::debug!("Rendered QR code: {} bytes for {} chars", png.len(), text.len());
        Ok(png)
    }
}
