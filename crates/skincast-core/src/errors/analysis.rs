// ABOUTME: Error taxonomy for the skin-risk analysis pipeline
// ABOUTME: Separates precondition violations, invalid readings, and image failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use super::{AppError, ErrorCode};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors raised by the analysis pipeline.
///
/// Scoring itself never fails once inputs are valid; every variant here is an
/// input problem reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No weather reading was supplied with the request
    #[error("weather reading is required")]
    MissingWeather,

    /// A reading field is not finite or lies outside its domain
    #[error("invalid {field}: {reason}")]
    InvalidReading {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Image bytes could not be decoded into a pixel grid
    #[error("unable to analyze image: {0}")]
    ImageDecode(String),

    /// Image upload was refused before decoding
    #[error("image rejected: {reason}")]
    ImageRejected {
        /// Why the upload was refused
        reason: String,
    },
}

impl AnalysisError {
    /// Create an invalid-reading error
    pub fn invalid_reading(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidReading {
            field,
            reason: reason.into(),
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        let code = match &error {
            AnalysisError::MissingWeather => ErrorCode::MissingRequiredField,
            AnalysisError::InvalidReading { .. } => ErrorCode::ValueOutOfRange,
            AnalysisError::ImageDecode(_) => ErrorCode::ImageUnreadable,
            AnalysisError::ImageRejected { .. } => ErrorCode::ImageRejected,
        };
        let details = match &error {
            AnalysisError::InvalidReading { field, .. } => json!({ "field": field }),
            _ => Value::Null,
        };
        Self::new(code, error.to_string()).with_details(details)
    }
}
