//! Favicon generation pipeline.

mod generator;
mod report;
mod sizes;

pub use crate::image::OutputFormat;
pub use generator::{write_favicon, Config, Generator, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE};
pub use report::{GeneratedIcon, IconFailure, Report};
pub use sizes::{SizeSpec, FAVICONS};
