//! Favicon set generation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::image::{self, SourceImage};

use super::report::{GeneratedIcon, IconFailure, Report};
use super::sizes::{SizeSpec, FAVICONS};

/// Logo read when no other source is configured.
pub const DEFAULT_SOURCE: &str = "public/images/logos/LOGO 1 SEM FUNDO.png";

/// Directory favicons are written to when no other is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source logo path.
    pub source: PathBuf,

    /// Output directory. Created if missing.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(Error::InvalidParameter {
                name: "source".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::InvalidParameter {
                name: "output_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Writes the [`FAVICONS`] set from one source logo.
#[derive(Debug)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a new generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing generator with config: {config:?}");

        Ok(Self { config })
    }

    /// The configuration this generator runs with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Load the source logo and write every favicon in [`FAVICONS`].
    ///
    /// A failing entry does not stop the run; it is recorded in the returned
    /// [`Report`] and the remaining entries are still attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageLoad`] if the source cannot be opened, and
    /// [`Error::OutputDir`] if the output directory cannot be created. In both
    /// cases nothing is written.
    pub fn generate(&self) -> Result<Report> {
        let source_path = &self.config.source;
        let output_dir = &self.config.output_dir;

        tracing::info!("Loading logo: {}", source_path.display());
        let source = match image::load_image(source_path) {
            Ok(source) => source,
            Err(err) => {
                println!("❌ Failed to open logo: {err}");
                return Err(err);
            }
        };

        println!("✅ Logo loaded: {}", source_path.display());
        println!("   Original size: ({}, {})", source.width(), source.height());
        println!("   Mode: {}", source.mode());

        fs::create_dir_all(output_dir).map_err(|source| Error::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        let mut report = Report::new(output_dir.clone());

        for spec in FAVICONS {
            match write_favicon(&source, spec, output_dir) {
                Ok(icon) => {
                    println!("✅ Generated: {} ({}x{})", icon.filename, icon.size, icon.size);
                    report.push_generated(icon);
                }
                Err(error) => {
                    tracing::warn!("Skipping {}: {error}", spec.filename);
                    println!("❌ Failed: {} ({error})", spec.filename);
                    report.push_failure(IconFailure {
                        filename: spec.filename,
                        error,
                    });
                }
            }
        }

        if report.is_complete() {
            let shown = fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.clone());
            println!();
            println!("🎉 All favicons generated successfully!");
            println!("📁 Saved to: {}", shown.display());
        } else {
            println!();
            println!(
                "❌ {} of {} favicons failed",
                report.failures().len(),
                report.total()
            );
        }

        tracing::info!(
            "Generated {} of {} favicons",
            report.generated().len(),
            report.total()
        );

        Ok(report)
    }
}

/// Render one favicon from `source` and write it into `output_dir`.
///
/// ICO entries always produce a single 32x32 frame regardless of
/// `spec.size`; PNG entries are exactly `spec.size` square.
///
/// # Errors
///
/// Returns an error if the entry is invalid or the file cannot be written.
pub fn write_favicon(
    source: &SourceImage,
    spec: &SizeSpec,
    output_dir: &Path,
) -> Result<GeneratedIcon> {
    spec.validate()?;

    let path = output_dir.join(spec.filename);
    let canvas = image::compose(source.pixels(), spec.size);

    image::save_image(&canvas, &path, spec.format())?;
    tracing::debug!("Wrote {}", path.display());

    Ok(GeneratedIcon {
        filename: spec.filename,
        size: spec.size,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_paths() {
        let config = Config::default();

        assert_eq!(config.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_paths_rejected() {
        let config = Config {
            source: PathBuf::new(),
            ..Config::default()
        };
        assert!(Generator::new(config).is_err());

        let config = Config {
            output_dir: PathBuf::new(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name, .. }) if name == "output_dir"
        ));
    }
}
