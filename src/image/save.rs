//! Image saving utilities.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{imageops, imageops::FilterType, ImageFormat, RgbaImage};

use crate::error::{Error, Result};

use super::{OutputFormat, ICO_SIZE};

/// Save a rendered canvas in the given format.
///
/// # Errors
///
/// Returns an error if the file cannot be created, encoded, or written.
pub fn save_image<P: AsRef<Path>>(
    canvas: &RgbaImage,
    path: P,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Ico => save_ico(canvas, path),
        OutputFormat::Png => save_png(canvas, path),
    }
}

/// Save a canvas as an RGBA PNG.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if the file cannot be written.
pub fn save_png<P: AsRef<Path>>(canvas: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}

/// Save a canvas as a single-frame ICO.
///
/// The frame is always `ICO_SIZE` x `ICO_SIZE`; other canvas sizes are
/// resampled with Lanczos3 first.
///
/// # Errors
///
/// Returns [`Error::IconWrite`] if the icon cannot be encoded or written.
pub fn save_ico<P: AsRef<Path>>(canvas: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::IconWrite {
        path: path.to_path_buf(),
        source,
    };

    let frame = if canvas.dimensions() == (ICO_SIZE, ICO_SIZE) {
        canvas.clone()
    } else {
        tracing::debug!(
            "Resampling {}x{} canvas to {ICO_SIZE}x{ICO_SIZE} for {}",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        imageops::resize(canvas, ICO_SIZE, ICO_SIZE, FilterType::Lanczos3)
    };

    let icon_image = IconImage::from_rgba_data(ICO_SIZE, ICO_SIZE, frame.into_raw());
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    icon_dir.add_entry(IconDirEntry::encode(&icon_image).map_err(write_error)?);

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    icon_dir.write(&mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::Rgba;

    #[test]
    fn test_save_png_into_missing_directory_fails() {
        let canvas = RgbaImage::new(4, 4);
        let result = save_png(&canvas, "missing-dir-for-test/out.png");

        assert!(matches!(result, Err(Error::ImageSave { .. })));
    }

    #[test]
    fn test_save_ico_into_missing_directory_fails() {
        let canvas = RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 255]));
        let result = save_ico(&canvas, "missing-dir-for-test/favicon.ico");

        assert!(matches!(result, Err(Error::IconWrite { .. })));
    }
}
