// webpdrop/src/processors/encoder.rs
use image::RgbaImage;

use crate::core::{ConvertError, EncodeQuality, Result};

/// Lossy WebP encoding of a finished RGBA surface.
pub struct WebpEncoder {
    quality: EncodeQuality,
}

impl WebpEncoder {
    pub fn new(quality: EncodeQuality) -> Self {
        Self { quality }
    }

    pub fn encode(&self, surface: &RgbaImage) -> Result<Vec<u8>> {
        let encoder =
            webp::Encoder::from_rgba(surface.as_raw(), surface.width(), surface.height());
        let memory = encoder
            .encode_simple(false, self.quality.value())
            .map_err(|e| ConvertError::Encode(format!("webp encoder failed: {:?}", e)))?;

        log::debug!(
            "encoded {}x{} surface at quality {} ({} bytes)",
            surface.width(),
            surface.height(),
            self.quality.value(),
            memory.len()
        );

        Ok(memory.to_vec())
    }
}
