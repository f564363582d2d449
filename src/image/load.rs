//! Image loading utilities.

use std::path::Path;

use image::{ColorType, DynamicImage, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// The decoded source logo, converted to RGBA8.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
    mode: &'static str,
}

impl SourceImage {
    /// Wrap an already decoded image, converting it to RGBA8.
    #[must_use]
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let mode = color_mode_name(img.color());
        let pixels = match img {
            DynamicImage::ImageRgba8(buf) => buf,
            other => other.to_rgba8(),
        };

        Self { pixels, mode }
    }

    /// Pixel width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Pixel height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Color mode of the file as decoded, before RGBA conversion.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        self.mode
    }

    /// RGBA8 pixel data.
    #[must_use]
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Load the source logo from disk.
///
/// The format is sniffed from the file contents, so a misnamed file still
/// decodes as long as the codec is compiled in.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file is missing, unreadable, or cannot
/// be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    let load_error = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)?;

    let source = SourceImage::from_dynamic(img);
    tracing::debug!(
        "Decoded {} as {}x{} {}",
        path.display(),
        source.width(),
        source.height(),
        source.mode()
    );

    Ok(source)
}

/// Short human-readable name for a decoded color layout.
#[must_use]
pub const fn color_mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;32F",
        ColorType::Rgba32F => "RGBA;32F",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{Rgb, RgbImage};

    #[test]
    fn test_rgb_source_becomes_opaque_rgba() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([10, 20, 30])));
        let source = SourceImage::from_dynamic(img);

        assert_eq!(source.dimensions(), (4, 2));
        assert_eq!(source.mode(), "RGB");
        assert!(source.pixels().pixels().all(|p| p.0 == [10, 20, 30, 255]));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(color_mode_name(ColorType::L8), "L");
        assert_eq!(color_mode_name(ColorType::La8), "LA");
        assert_eq!(color_mode_name(ColorType::Rgba8), "RGBA");
        assert_eq!(color_mode_name(ColorType::L16), "I;16");
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = load_image("definitely/not/here.png");

        assert!(matches!(result, Err(Error::ImageLoad { .. })));
    }
}
