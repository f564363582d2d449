//! # favicon-forge
//!
//! Generates the standard web favicon set from a single logo image.
//!
//! Each entry of [`FAVICONS`] gets a square, transparent canvas with the logo
//! scaled to fit (aspect ratio preserved, never upscaled) and centered on it.
//! PNG entries keep full alpha; the ICO entry is always a single 32x32 frame.
//!
//! ## Example
//!
//! ```no_run
//! use favicon_forge::{Config, Generator};
//!
//! # fn main() -> favicon_forge::Result<()> {
//! let generator = Generator::new(Config::default())?;
//!
//! let report = generator.generate()?;
//! report.ensure_complete()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{
    write_favicon, Config, GeneratedIcon, Generator, IconFailure, OutputFormat, Report, SizeSpec,
    FAVICONS,
};
