// ABOUTME: End-to-end tests for report assembly from weather readings and photos
// ABOUTME: Covers the weather-only path, photo degradation, missing input, and the JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{approx, garbage_bytes, hot_polluted_reading, mild_reading, sunburned_png};
use skincast::errors::ErrorCode;
use skincast::models::{
    AnalysisRequest, FactorKind, SeverityTier, SkinAnalysisOutcome, WeatherReading,
};
use skincast::SkinAnalyzer;

#[test]
fn test_hot_polluted_weather_only_report() {
    let report = SkinAnalyzer::default()
        .assemble(&AnalysisRequest::weather_only(hot_polluted_reading()))
        .unwrap();

    let families: Vec<&str> = report.weather_analysis.keys().map(String::as_str).collect();
    assert_eq!(families, vec!["uv", "humidity", "temperature", "air_quality"]);

    let uv = report.weather_factor("uv").unwrap();
    assert!(approx(uv.score, 100.0));
    assert_eq!(uv.severity, SeverityTier::Extreme);

    let humidity = report.weather_factor("humidity").unwrap();
    assert_eq!(humidity.kind, FactorKind::HumidityExcess);

    let temperature = report.weather_factor("temperature").unwrap();
    assert_eq!(temperature.kind, FactorKind::TemperatureHeat);

    assert!(report.weather_factor("wind").is_none());
    assert!(report.weather_factor("precipitation").is_none());

    assert_eq!(report.skin_analysis, SkinAnalysisOutcome::NotRequested);
    assert_eq!(report.overall_severity(), SeverityTier::Extreme);
    assert_eq!(report.recommendations.priority_actions.len(), 4);
    assert_eq!(report.weather.uv_risk, "Very High");
    assert_eq!(report.weather.aqi_category, "Very Poor");
}

#[test]
fn test_mild_day_report_is_low() {
    let report = SkinAnalyzer::default()
        .assemble(&AnalysisRequest::weather_only(mild_reading()))
        .unwrap();
    let families: Vec<&str> = report.weather_analysis.keys().map(String::as_str).collect();
    assert_eq!(families, vec!["uv", "temperature", "air_quality"]);
    assert_eq!(
        report.weather_factor("temperature").map(|f| f.kind),
        Some(FactorKind::TemperatureMild)
    );
    assert_eq!(report.overall_severity(), SeverityTier::Low);
    assert!(report.recommendations.priority_actions.is_empty());
    assert!(!report.recommendations.lifestyle_tips.is_empty());
}

#[test]
fn test_photo_conditions_join_the_recommendations() {
    let request = AnalysisRequest::weather_only(mild_reading()).with_image(sunburned_png());
    let report = SkinAnalyzer::default().assemble(&request).unwrap();

    let SkinAnalysisOutcome::Analyzed(analysis) = &report.skin_analysis else {
        panic!("expected an analyzed photo, got {:?}", report.skin_analysis);
    };
    assert_eq!(analysis.conditions[0].kind, FactorKind::Sunburn);

    // image conditions are not weather factors
    assert_eq!(report.weather_analysis.len(), 3);
    assert_eq!(report.overall_severity(), SeverityTier::High);
    let actions = &report.recommendations.priority_actions;
    assert_eq!(actions.len(), 2);
    assert!(actions[0].starts_with("Sunburn Detected (Score: 85.0)"));
    assert!(actions[1].starts_with("Dryness Detected (Score: 75.0)"));
}

#[test]
fn test_unreadable_photo_does_not_block_weather() {
    let request =
        AnalysisRequest::weather_only(hot_polluted_reading()).with_image(garbage_bytes());
    let report = SkinAnalyzer::default().assemble(&request).unwrap();

    assert!(matches!(
        report.skin_analysis,
        SkinAnalysisOutcome::Unavailable { .. }
    ));
    assert_eq!(report.weather_analysis.len(), 4);
    assert_eq!(report.overall_severity(), SeverityTier::Extreme);
}

#[test]
fn test_missing_weather_is_refused() {
    let request = AnalysisRequest {
        weather: None,
        image: Some(sunburned_png()),
    };
    let error = SkinAnalyzer::default().assemble(&request).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_invalid_reading_is_refused_before_scoring() {
    let request = AnalysisRequest::weather_only(WeatherReading::new(20.0, -5.0));
    let error = SkinAnalyzer::default().assemble(&request).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_reports_get_distinct_ids() {
    let analyzer = SkinAnalyzer::default();
    let request = AnalysisRequest::weather_only(mild_reading());
    let first = analyzer.assemble(&request).unwrap();
    let second = analyzer.assemble(&request).unwrap();
    assert_ne!(first.report_id, second.report_id);
    assert_eq!(first.weather_analysis, second.weather_analysis);
    assert_eq!(first.recommendations, second.recommendations);
}

#[test]
fn test_report_json_shape() {
    let request = AnalysisRequest::weather_only(hot_polluted_reading()).with_image(sunburned_png());
    let report = SkinAnalyzer::default().assemble(&request).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["report_id"].is_string());
    assert!(json["generated_at"].is_string());
    assert_eq!(json["weather"]["aqi"], 5);
    assert_eq!(json["weather"]["uv_risk"], "Very High");

    let uv = &json["weather_analysis"]["uv"];
    assert_eq!(uv["kind"], "uv");
    assert_eq!(uv["severity"], "extreme");
    assert_eq!(uv["name"], "UV Exposure");

    assert_eq!(json["skin_analysis"]["status"], "analyzed");
    assert_eq!(json["skin_analysis"]["conditions"][0]["kind"], "sunburn");
    assert!(json["skin_analysis"]["features"]["redness_index"].is_number());

    assert_eq!(json["recommendations"]["overall_severity"], "extreme");
    assert!(json["recommendations"]["products"]["sunscreen"].is_array());
    assert!(json["recommendations"]["products_list"].is_array());
}
