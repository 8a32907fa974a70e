// ABOUTME: Command implementations for skincast-cli
// ABOUTME: Each command resolves its inputs, runs the analyzer, and returns JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use crate::helpers;
use crate::AnalyzeArgs;
use serde_json::{json, Value};
use skincast::errors::AppResult;
use skincast::models::{AnalysisRequest, AqiCategory, WeatherReading};
use skincast::{AnalyzerSettings, SkinAnalyzer};
use std::path::Path;
use tracing::info;

/// Report from weather flags and an optional photo
///
/// # Errors
///
/// Returns an error for an invalid reading, a rejected photo, or bad rules
pub fn analyze(settings: &AnalyzerSettings, args: AnalyzeArgs) -> AppResult<Value> {
    let aqi = match (args.aqi, args.aqi_raw) {
        (_, Some(raw)) => AqiCategory::from_raw_index(raw),
        (Some(ordinal), None) => AqiCategory::from_ordinal(ordinal)?,
        (None, None) => AqiCategory::default(),
    };

    let mut reading = WeatherReading::new(args.temperature, args.humidity)
        .with_wind(args.wind)
        .with_condition(args.condition)
        .with_uv(args.uv)
        .with_aqi(aqi);
    reading.pm2_5 = args.pm2_5;
    reading.pm10 = args.pm10;
    if let Some(location) = args.location {
        reading = reading.with_location(location);
    }

    let mut request = AnalysisRequest::weather_only(reading);
    if let Some(path) = args.image {
        request = request.with_image(helpers::load_image(settings, &path)?);
    }

    let analyzer = SkinAnalyzer::new(settings.intelligence.clone())?;
    let report = analyzer.assemble(&request)?;
    Ok(serde_json::to_value(report)?)
}

/// Conditions and recommendations from a photo alone
///
/// # Errors
///
/// Returns an error if the photo is rejected or cannot be decoded
pub fn image(settings: &AnalyzerSettings, path: &Path) -> AppResult<Value> {
    let bytes = helpers::load_image(settings, path)?;
    let analyzer = SkinAnalyzer::new(settings.intelligence.clone())?;

    let analysis = analyzer.analyze_image(&bytes)?;
    let recommendations = analyzer.recommend(&analysis.conditions);
    info!(
        image = %path.display(),
        conditions = analysis.conditions.len(),
        overall_severity = %recommendations.overall_severity,
        "Image analyzed"
    );

    Ok(json!({
        "skin_analysis": analysis,
        "recommendations": recommendations,
    }))
}

/// Report from a JSON request file
///
/// # Errors
///
/// Returns an error if the file is unreadable, lacks a weather reading, or names a rejected photo
pub fn request(settings: &AnalyzerSettings, path: &Path) -> AppResult<Value> {
    let request_file = helpers::read_request_file(path)?;

    let mut request = AnalysisRequest {
        weather: request_file.weather,
        image: None,
    };
    if let Some(image_path) = request_file.image_path {
        let image_path = helpers::resolve_relative(path, &image_path);
        request = request.with_image(helpers::load_image(settings, &image_path)?);
    }

    let analyzer = SkinAnalyzer::new(settings.intelligence.clone())?;
    let report = analyzer.assemble(&request)?;
    Ok(serde_json::to_value(report)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_request_command_loads_photo_next_to_request_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("photos")).unwrap();
        RgbImage::from_pixel(32, 24, Rgb([200, 120, 100]))
            .save_with_format(dir.path().join("photos").join("face.png"), ImageFormat::Png)
            .unwrap();

        let request_path = dir.path().join("request.json");
        fs::write(
            &request_path,
            r#"{
                "weather": {"temperature_celsius": 22.0, "humidity_percent": 40.0, "uv_index": 2.0},
                "image_path": "photos/face.png"
            }"#,
        )
        .unwrap();

        let report = request(&AnalyzerSettings::default(), &request_path).unwrap();
        assert_eq!(report["skin_analysis"]["status"], "analyzed");
        assert_eq!(report["skin_analysis"]["conditions"][0]["kind"], "sunburn");
        assert_eq!(report["weather_analysis"]["temperature"]["kind"], "temperature_mild");
    }

    #[test]
    fn test_request_command_rejects_missing_photo() {
        let dir = TempDir::new().unwrap();
        let request_path = dir.path().join("request.json");
        fs::write(
            &request_path,
            r#"{"weather": {"temperature_celsius": 22.0, "humidity_percent": 40.0}, "image_path": "absent.png"}"#,
        )
        .unwrap();

        assert!(request(&AnalyzerSettings::default(), &request_path).is_err());
    }
}
