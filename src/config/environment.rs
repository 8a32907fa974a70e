// ABOUTME: Environment-driven settings for the analyzer: upload policy and scoring rules
// ABOUTME: Loads an optional .env file, a JSON rules file, and SKINCAST_* overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use skincast_core::constants::upload_limits;
use skincast_core::errors::{AppError, AppResult};
use skincast_intelligence::config::{ConfigError, SkinIntelligenceConfig};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Upload size limit override
pub const MAX_UPLOAD_BYTES_VAR: &str = "SKINCAST_MAX_UPLOAD_BYTES";
/// Comma-separated extension allow-list override
pub const ALLOWED_EXTENSIONS_VAR: &str = "SKINCAST_ALLOWED_EXTENSIONS";
/// Path of a JSON file holding a full `SkinIntelligenceConfig`
pub const RULES_FILE_VAR: &str = "SKINCAST_RULES_FILE";

/// Settings for one analyzer instance
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Largest accepted photo upload in bytes
    pub max_upload_bytes: u64,
    /// Accepted photo extensions, lowercase, without the dot
    pub allowed_extensions: Vec<String>,
    /// Validated scoring rules
    pub intelligence: SkinIntelligenceConfig,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: upload_limits::MAX_BYTES,
            allowed_extensions: upload_limits::ALLOWED_EXTENSIONS
                .iter()
                .map(|&ext| ext.to_owned())
                .collect(),
            intelligence: SkinIntelligenceConfig::default(),
        }
    }
}

impl AnalyzerSettings {
    /// Load settings from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable does not parse, the rules
    /// file cannot be read, or the resulting rules fail validation
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let max_upload_bytes = match env::var(MAX_UPLOAD_BYTES_VAR) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("Invalid {MAX_UPLOAD_BYTES_VAR} '{raw}': {e}"))
            })?,
            Err(_) => upload_limits::MAX_BYTES,
        };

        let allowed_extensions = env::var(ALLOWED_EXTENSIONS_VAR).map_or_else(
            |_| Self::default().allowed_extensions,
            |raw| parse_extensions(&raw),
        );
        if allowed_extensions.is_empty() {
            return Err(AppError::config(format!(
                "{ALLOWED_EXTENSIONS_VAR} must name at least one extension"
            )));
        }

        let intelligence = match env::var(RULES_FILE_VAR) {
            Ok(path) => load_rules_file(Path::new(&path))?,
            Err(_) => SkinIntelligenceConfig::load().map_err(config_error)?,
        };

        info!(
            max_upload_bytes,
            allowed_extensions = ?allowed_extensions,
            "Analyzer settings loaded"
        );

        Ok(Self {
            max_upload_bytes,
            allowed_extensions,
            intelligence,
        })
    }
}

/// Read a JSON rules file, then apply environment overrides and validate
///
/// # Errors
///
/// Returns a configuration error if the file is unreadable or invalid
pub fn load_rules_file(path: &Path) -> AppResult<SkinIntelligenceConfig> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Cannot read rules file {}: {e}", path.display()))
    })?;
    let config = SkinIntelligenceConfig::from_json_str(&json)
        .and_then(SkinIntelligenceConfig::apply_env_overrides)
        .map_err(config_error)?;
    config.validate().map_err(config_error)?;
    debug!(path = %path.display(), "Loaded scoring rules file");
    Ok(config)
}

fn config_error(error: ConfigError) -> AppError {
    AppError::config(error.to_string()).with_source(error)
}

/// Parse a comma-separated extension list
fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extensions_normalizes() {
        assert_eq!(
            parse_extensions(" PNG, .jpg ,,webp"),
            vec!["png".to_owned(), "jpg".to_owned(), "webp".to_owned()]
        );
    }

    #[test]
    fn test_defaults_match_upload_limits() {
        let settings = AnalyzerSettings::default();
        assert_eq!(settings.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(settings.allowed_extensions, vec!["png", "jpg", "jpeg"]);
    }
}
