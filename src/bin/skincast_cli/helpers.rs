// ABOUTME: Input and output helpers for skincast-cli
// ABOUTME: Loads photos under the upload policy, parses request files, prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use serde::Deserialize;
use serde_json::Value;
use skincast::errors::{AppError, AppResult};
use skincast::models::WeatherReading;
use skincast::{AnalyzerSettings, ImageUpload};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON request file accepted by the `request` command
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    /// Weather reading; absent readings are refused by the analyzer
    #[serde(default)]
    pub weather: Option<WeatherReading>,
    /// Photo path, relative to the request file
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

/// Read a photo and apply the upload policy
///
/// # Errors
///
/// Returns an error if the file cannot be read or breaks the upload policy
pub fn load_image(settings: &AnalyzerSettings, path: &Path) -> AppResult<Vec<u8>> {
    let upload = ImageUpload::read(path)?;
    Ok(upload.into_validated_bytes(settings)?)
}

/// Parse a request file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON
pub fn read_request_file(path: &Path) -> AppResult<RequestFile> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read request file {}: {e}", path.display()))
    })?;
    serde_json::from_str(&json).map_err(|e| {
        AppError::invalid_input(format!("Invalid request file {}: {e}", path.display()))
    })
}

/// Resolve a path relative to the directory of another file
pub fn resolve_relative(base_file: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    base_file
        .parent()
        .map_or_else(|| path.to_path_buf(), |dir| dir.join(path))
}

/// Print JSON to stdout
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn print_json(value: &Value, compact: bool) -> AppResult<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use skincast::errors::ErrorCode;
    use tempfile::TempDir;

    const REQUEST_JSON: &str = r#"{
        "weather": {"temperature_celsius": 22.0, "humidity_percent": 40.0, "uv_index": 2.0},
        "image_path": "photos/face.png"
    }"#;

    #[test]
    fn test_request_file_names_photo_relative_to_itself() {
        let dir = TempDir::new().unwrap();
        let request_path = dir.path().join("request.json");
        fs::write(&request_path, REQUEST_JSON).unwrap();

        let request = read_request_file(&request_path).unwrap();
        let weather = request.weather.unwrap();
        assert!((weather.temperature_celsius - 22.0).abs() < f64::EPSILON);

        let image_path = request.image_path.unwrap();
        assert_eq!(
            resolve_relative(&request_path, &image_path),
            dir.path().join("photos").join("face.png")
        );
    }

    #[test]
    fn test_absolute_photo_path_is_kept() {
        let dir = TempDir::new().unwrap();
        let photo = dir.path().join("face.png");
        assert_eq!(resolve_relative(Path::new("request.json"), &photo), photo);
        assert_eq!(
            resolve_relative(Path::new("request.json"), Path::new("face.png")),
            PathBuf::from("face.png")
        );
    }

    #[test]
    fn test_unreadable_request_files_are_invalid_input() {
        let dir = TempDir::new().unwrap();
        let missing = read_request_file(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(missing.code, ErrorCode::InvalidInput);

        let malformed_path = dir.path().join("request.json");
        fs::write(&malformed_path, "{ weather").unwrap();
        let malformed = read_request_file(&malformed_path).unwrap_err();
        assert_eq!(malformed.code, ErrorCode::InvalidInput);
    }
}
