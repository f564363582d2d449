//! Bounding-box scaling and centering onto a transparent square canvas.

use image::{imageops, imageops::FilterType, Rgba, RgbaImage};

/// Where a fitted logo lands on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Scaled logo width.
    pub width: u32,
    /// Scaled logo height.
    pub height: u32,
    /// Left padding.
    pub x: u32,
    /// Top padding.
    pub y: u32,
}

impl Placement {
    /// Compute the placement of a `src_w` x `src_h` logo on a `target` square.
    ///
    /// Padding is floor-divided, so an odd remainder leaves the extra pixel on
    /// the right or bottom edge. `target` must be non-zero.
    #[must_use]
    pub fn new(src_w: u32, src_h: u32, target: u32) -> Self {
        let (width, height) = fit_within(src_w, src_h, target);

        Self {
            width,
            height,
            x: (target - width) / 2,
            y: (target - height) / 2,
        }
    }
}

/// Scale `src_w` x `src_h` to fit inside a `target` square, keeping the aspect
/// ratio and never enlarging.
///
/// Each side is at least one pixel.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_within(src_w: u32, src_h: u32, target: u32) -> (u32, u32) {
    let scale_w = f64::from(target) / f64::from(src_w);
    let scale_h = f64::from(target) / f64::from(src_h);
    let scale = scale_w.min(scale_h).min(1.0);

    // Safe: scale <= target / side, so the rounded result is at most target
    let width = (f64::from(src_w) * scale).round() as u32;
    let height = (f64::from(src_h) * scale).round() as u32;

    (width.clamp(1, target), height.clamp(1, target))
}

/// Render `logo` centered on a fully transparent `target` x `target` canvas.
///
/// The logo is resampled with Lanczos3 when it has to shrink and composited
/// with source-over blending, so its own transparent areas stay transparent.
#[must_use]
pub fn compose(logo: &RgbaImage, target: u32) -> RgbaImage {
    let (src_w, src_h) = logo.dimensions();
    let placement = Placement::new(src_w, src_h, target);

    tracing::debug!(
        "Fitting {src_w}x{src_h} into {target}x{target}: {}x{} at ({}, {})",
        placement.width,
        placement.height,
        placement.x,
        placement.y
    );

    let mut canvas = RgbaImage::from_pixel(target, target, Rgba([0, 0, 0, 0]));

    let (x, y) = (i64::from(placement.x), i64::from(placement.y));

    if (placement.width, placement.height) == (src_w, src_h) {
        imageops::overlay(&mut canvas, logo, x, y);
    } else {
        let scaled = imageops::resize(
            logo,
            placement.width,
            placement.height,
            FilterType::Lanczos3,
        );
        imageops::overlay(&mut canvas, &scaled, x, y);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([200, 30, 60, 255]))
    }

    #[test]
    fn test_wide_logo_fits_width() {
        let placement = Placement::new(1000, 500, 192);

        assert_eq!(
            placement,
            Placement {
                width: 192,
                height: 96,
                x: 0,
                y: 48,
            }
        );
    }

    #[test]
    fn test_tall_logo_fits_height() {
        let placement = Placement::new(500, 1000, 16);

        assert_eq!((placement.width, placement.height), (8, 16));
        assert_eq!((placement.x, placement.y), (4, 0));
    }

    #[test]
    fn test_no_upscaling() {
        assert_eq!(fit_within(20, 10, 512), (20, 10));
    }

    #[test]
    fn test_extreme_aspect_keeps_one_pixel() {
        assert_eq!(fit_within(10_000, 3, 16), (16, 1));
    }

    #[test]
    fn test_odd_padding_goes_right_and_bottom() {
        let placement = Placement::new(3, 2, 4);

        assert_eq!((placement.x, placement.y), (0, 1));
        // One column right, one row bottom remain.
        assert_eq!(4 - placement.width - placement.x, 1);
        assert_eq!(4 - placement.height - placement.y, 1);
    }

    #[test]
    fn test_compose_is_square_and_padded() {
        let canvas = compose(&opaque(1000, 500), 192);

        assert_eq!(canvas.dimensions(), (192, 192));
        for x in 0..192 {
            assert_eq!(canvas.get_pixel(x, 0)[3], 0);
            assert_eq!(canvas.get_pixel(x, 47)[3], 0);
            assert_eq!(canvas.get_pixel(x, 48)[3], 255);
            assert_eq!(canvas.get_pixel(x, 143)[3], 255);
            assert_eq!(canvas.get_pixel(x, 144)[3], 0);
            assert_eq!(canvas.get_pixel(x, 191)[3], 0);
        }
    }

    #[test]
    fn test_compose_keeps_logo_transparency() {
        let mut logo = opaque(4, 4);
        logo.put_pixel(1, 1, Rgba([255, 255, 255, 0]));

        let canvas = compose(&logo, 8);

        // Logo is not resampled (4 <= 8), so it sits at (2, 2).
        assert_eq!(canvas.get_pixel(3, 3)[3], 0);
        assert_eq!(*canvas.get_pixel(2, 2), Rgba([200, 30, 60, 255]));
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
    }
}
