//! The fixed favicon size table.

use crate::error::{Error, Result};
use crate::image::OutputFormat;

/// One favicon to produce: output file name and square side in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// File name inside the output directory.
    pub filename: &'static str,
    /// Canvas side length in pixels.
    pub size: u32,
}

impl SizeSpec {
    /// Format implied by the file extension.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_path(self.filename)
    }

    /// Validate the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the file name is empty or the size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.filename.is_empty() {
            return Err(Error::InvalidParameter {
                name: "filename".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.size == 0 {
            return Err(Error::InvalidParameter {
                name: format!("size of {}", self.filename),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Every favicon written by a run, in generation order.
pub const FAVICONS: &[SizeSpec] = &[
    SizeSpec {
        filename: "favicon.ico",
        size: 32,
    },
    SizeSpec {
        filename: "favicon-16x16.png",
        size: 16,
    },
    SizeSpec {
        filename: "favicon-32x32.png",
        size: 32,
    },
    SizeSpec {
        filename: "apple-touch-icon.png",
        size: 180,
    },
    SizeSpec {
        filename: "android-chrome-192x192.png",
        size: 192,
    },
    SizeSpec {
        filename: "android-chrome-512x512.png",
        size: 512,
    },
];
