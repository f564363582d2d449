//! Image loading, fitting, and saving utilities.

mod fit;
mod load;
mod save;

pub use fit::{compose, fit_within, Placement};
pub use load::{color_mode_name, load_image, SourceImage};
pub use save::{save_ico, save_image, save_png};

use std::path::Path;

/// Side length of the single frame written into ICO files.
pub const ICO_SIZE: u32 = 32;

/// Container format of a generated favicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-frame Windows icon, always [`ICO_SIZE`] square.
    Ico,
    /// RGBA PNG.
    Png,
}

impl OutputFormat {
    /// Pick the format implied by a file name's extension.
    ///
    /// `.ico` (any case) selects [`OutputFormat::Ico`]; everything else is PNG.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let is_ico = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("ico"));

        if is_ico {
            Self::Ico
        } else {
            Self::Png
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path("favicon.ico"), OutputFormat::Ico);
        assert_eq!(OutputFormat::from_path("FAVICON.ICO"), OutputFormat::Ico);
        assert_eq!(OutputFormat::from_path("favicon-16x16.png"), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path("no_extension"), OutputFormat::Png);
    }
}
