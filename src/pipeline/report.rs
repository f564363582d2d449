//! Outcome of a generation run.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A favicon that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// File name from the size table.
    pub filename: &'static str,
    /// Nominal side length from the size table.
    pub size: u32,
    /// Full path of the written file.
    pub path: PathBuf,
}

/// A favicon that could not be rendered or written.
#[derive(Debug)]
pub struct IconFailure {
    /// File name from the size table.
    pub filename: &'static str,
    /// What went wrong.
    pub error: Error,
}

/// Per-entry results of [`Generator::generate`](super::Generator::generate).
#[derive(Debug)]
pub struct Report {
    output_dir: PathBuf,
    generated: Vec<GeneratedIcon>,
    failures: Vec<IconFailure>,
}

impl Report {
    pub(crate) const fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            generated: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn push_generated(&mut self, icon: GeneratedIcon) {
        self.generated.push(icon);
    }

    pub(crate) fn push_failure(&mut self, failure: IconFailure) {
        self.failures.push(failure);
    }

    /// Directory the favicons were written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Successfully written favicons, in table order.
    #[must_use]
    pub fn generated(&self) -> &[GeneratedIcon] {
        &self.generated
    }

    /// Entries that failed, in table order.
    #[must_use]
    pub fn failures(&self) -> &[IconFailure] {
        &self.failures
    }

    /// Number of entries attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    /// Whether every entry was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn any recorded failure into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteSet`] if at least one entry failed.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(Error::IncompleteSet {
                failed: self.failures.len(),
                total: self.total(),
            })
        }
    }
}
