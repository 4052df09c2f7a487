//! Image codec capability used by the transform stage.
//!
//! The transform only needs four operations from a codec: decode bytes,
//! report dimensions, crop to a rectangle and encode to a target format.
//! [`ImageCodec`] captures exactly that so the transform can run against a
//! fake codec in tests, while [`RustCodec`] does the real work with the
//! `image` and `webp` crates.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

use crate::config::TargetFormat;
use crate::error::CodecError;

use super::geometry::CropGeometry;

/// Decode / crop / encode capability.
pub trait ImageCodec {
    /// In-memory image representation.
    type Image;

    /// Decode an image from raw file bytes.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, CodecError>;

    /// Width and height in pixels.
    fn dimensions(&self, image: &Self::Image) -> (u32, u32);

    /// Copy out the pixels inside `geometry`.
    fn crop(&self, image: &Self::Image, geometry: &CropGeometry) -> Self::Image;

    /// Encode into `format`. `quality` is on a 0-100 scale.
    fn encode(
        &self,
        image: &Self::Image,
        format: TargetFormat,
        quality: u8,
    ) -> Result<Vec<u8>, CodecError>;
}

/// Production codec backed by the `image` crate, with lossy WebP from `webp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCodec;

impl ImageCodec for RustCodec {
    type Image = DynamicImage;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| CodecError::new(format!("Cannot detect image format: {e}")))?;
        if reader.format().is_none() {
            return Err(CodecError::new("Unrecognized image format"));
        }
        reader.decode().map_err(|e| CodecError::new(e.to_string()))
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        image.dimensions()
    }

    fn crop(&self, image: &DynamicImage, geometry: &CropGeometry) -> DynamicImage {
        image.crop_imm(geometry.x, geometry.y, geometry.width, geometry.height)
    }

    fn encode(
        &self,
        image: &DynamicImage,
        format: TargetFormat,
        quality: u8,
    ) -> Result<Vec<u8>, CodecError> {
        match format {
            TargetFormat::WebP => encode_webp(image, quality),
            TargetFormat::Jpeg => {
                let mut buffer = Cursor::new(Vec::new());
                let encoder =
                    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
                // JPEG has no alpha channel
                DynamicImage::ImageRgb8(image.to_rgb8())
                    .write_with_encoder(encoder)
                    .map_err(|e| CodecError::new(e.to_string()))?;
                Ok(buffer.into_inner())
            }
            TargetFormat::Png => {
                let mut buffer = Cursor::new(Vec::new());
                image
                    .write_to(&mut buffer, ImageFormat::Png)
                    .map_err(|e| CodecError::new(e.to_string()))?;
                Ok(buffer.into_inner())
            }
        }
    }
}

/// Lossy WebP encode. libwebp only takes 8-bit RGB or RGBA buffers.
fn encode_webp(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
    let (width, height) = image.dimensions();
    let quality = f32::from(quality.min(100));

    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
    } else {
        let rgb = image.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
    };
    let memory =
        encoded.map_err(|e| CodecError::new(format!("WebP encoding failed: {e:?}")))?;

    Ok(memory.to_vec())
}
