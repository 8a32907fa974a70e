// ABOUTME: Photo upload policy: accepted extensions and maximum size
// ABOUTME: Rejects uploads before any decoding work is spent on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use crate::config::AnalyzerSettings;
use skincast_core::errors::{AnalysisError, AppError, AppResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A photo received for analysis, not yet decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    filename: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap an uploaded file
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read a photo from disk
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if the file cannot be read
    pub fn read(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read image {}: {e}", path.display()))
        })?;
        let filename = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        Ok(Self::new(filename, bytes))
    }

    /// Original file name
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Lowercase extension, if the file name has one
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the upload carries no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check the upload against the policy
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ImageRejected` for an empty file, a disallowed
    /// extension, or a file larger than the configured maximum
    pub fn validate(&self, settings: &AnalyzerSettings) -> Result<(), AnalysisError> {
        if self.is_empty() {
            return Err(AnalysisError::ImageRejected {
                reason: format!("{} is empty", self.filename),
            });
        }

        let allowed = self
            .extension()
            .is_some_and(|ext| settings.allowed_extensions.iter().any(|a| *a == ext));
        if !allowed {
            return Err(AnalysisError::ImageRejected {
                reason: format!(
                    "{} is not an allowed image type ({})",
                    self.filename,
                    settings.allowed_extensions.join(", ")
                ),
            });
        }

        let size = self.len() as u64;
        if size > settings.max_upload_bytes {
            return Err(AnalysisError::ImageRejected {
                reason: format!(
                    "{} is {size} bytes, limit is {} bytes",
                    self.filename, settings.max_upload_bytes
                ),
            });
        }

        debug!(filename = %self.filename, size, "Image upload accepted");
        Ok(())
    }

    /// Validate and hand over the bytes
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ImageRejected` when the upload breaks the policy
    pub fn into_validated_bytes(self, settings: &AnalyzerSettings) -> Result<Vec<u8>, AnalysisError> {
        self.validate(settings)?;
        Ok(self.bytes)
    }
}
