//! Font resolution for report rendering
//!
//! The report builder takes an injected font source instead of a fixed
//! filesystem path, so rendering carries no environment-specific dependency.
//! A font that cannot be loaded fails the whole export with a distinct
//! error kind; no partial document is produced.

use crate::{Result, WayfarerError};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the TTF font used for all report text
pub trait FontSource: Send + Sync {
    /// Short description of the source, used in error messages
    fn describe(&self) -> String;

    /// Load the raw font bytes
    fn load(&self) -> Result<Vec<u8>>;
}

/// Font loaded from a TTF file on disk
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FontSource for FontFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<u8>> {
        fs::read(&self.path)
            .map_err(|e| WayfarerError::font_unavailable(self.describe(), e.to_string()))
    }
}

/// Font embedded in the binary at compile time
#[derive(Debug, Clone)]
pub struct EmbeddedFont {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

impl FontSource for EmbeddedFont {
    fn describe(&self) -> String {
        format!("embedded:{}", self.name)
    }

    fn load(&self) -> Result<Vec<u8>> {
        if self.bytes.is_empty() {
            return Err(WayfarerError::font_unavailable(
                self.describe(),
                "embedded font is empty",
            ));
        }
        Ok(self.bytes.to_vec())
    }
}
