// ABOUTME: Integration tests for scoring rule configuration and analyzer settings
// ABOUTME: Covers environment overrides, rules files, and validation of inconsistent rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use skincast::config::environment::{
    load_rules_file, ALLOWED_EXTENSIONS_VAR, MAX_UPLOAD_BYTES_VAR, RULES_FILE_VAR,
};
use skincast::config::{ConfigError, SkinIntelligenceConfig};
use skincast::constants::upload_limits;
use skincast::errors::ErrorCode;
use skincast::models::{FactorKind, WeatherReading};
use skincast::{AnalyzerSettings, SkinAnalyzer};
use std::env;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const OVERRIDE_VARS: &[&str] = &[
    "SKINCAST_HUMIDITY_EXCESS_MIN",
    "SKINCAST_HUMIDITY_ELEVATED_MIN",
    "SKINCAST_HUMIDITY_DRY_BELOW",
    "SKINCAST_TEMPERATURE_HEAT_MIN",
    "SKINCAST_TEMPERATURE_COLD_MAX",
    "SKINCAST_TEMPERATURE_COOL_BELOW",
    "SKINCAST_WIND_PRESENT_ABOVE",
    "SKINCAST_UV_POINTS_PER_INDEX",
    "SKINCAST_EDGE_LOW_THRESHOLD",
    "SKINCAST_EDGE_HIGH_THRESHOLD",
    "SKINCAST_PARALLEL_MIN_PIXELS",
    "SKINCAST_MAX_IMAGE_DIMENSION",
    MAX_UPLOAD_BYTES_VAR,
    ALLOWED_EXTENSIONS_VAR,
    RULES_FILE_VAR,
];

fn clear_env() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

fn rules_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_rules_are_valid() {
    let config = SkinIntelligenceConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.image.conditions.len(), FactorKind::IMAGE_CONDITIONS.len());
    assert_eq!(config.extraction.max_dimension, None);
}

#[test]
fn test_empty_json_yields_defaults() {
    let config = SkinIntelligenceConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SkinIntelligenceConfig::default());
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let result = SkinIntelligenceConfig::from_json_str("{ not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_inverted_humidity_thresholds_are_rejected() {
    let mut config = SkinIntelligenceConfig::default();
    config.weather.humidity.dry_below_percent = 60.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_unreachable_image_threshold_is_rejected() {
    let mut config = SkinIntelligenceConfig::default();
    config.image.conditions[0].report_threshold = 94.0;
    config.image.conditions[0].rules.truncate(1);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_duplicate_condition_table_is_rejected() {
    let mut config = SkinIntelligenceConfig::default();
    let acne = config.image.conditions[0].clone();
    config.image.conditions.push(acne);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_analyzer_refuses_invalid_rules() {
    let mut config = SkinIntelligenceConfig::default();
    config.extraction.edge_low_threshold = 200.0;
    let error = SkinAnalyzer::new(config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_custom_rules_change_scoring() {
    let mut config = SkinIntelligenceConfig::default();
    config.weather.wind.present_above_ms = 20.0;
    let analyzer = SkinAnalyzer::new(config).unwrap();

    let reading = WeatherReading::new(20.0, 40.0).with_wind(15.0);
    let factors = analyzer.analyze_weather(&reading).unwrap();
    assert!(factors.iter().all(|f| f.kind != FactorKind::Wind));

    let factors = SkinAnalyzer::default().analyze_weather(&reading).unwrap();
    assert!(factors.iter().any(|f| f.kind == FactorKind::Wind));
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    clear_env();
    env::set_var("SKINCAST_WIND_PRESENT_ABOVE", "12.5");
    env::set_var("SKINCAST_MAX_IMAGE_DIMENSION", "512");

    let config = SkinIntelligenceConfig::load().unwrap();
    assert!((config.weather.wind.present_above_ms - 12.5).abs() < f64::EPSILON);
    assert_eq!(config.extraction.max_dimension, Some(512));

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_env_override_is_an_error() {
    clear_env();
    env::set_var("SKINCAST_UV_POINTS_PER_INDEX", "lots");

    let result = SkinIntelligenceConfig::load();
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    clear_env();
}

#[test]
#[serial]
fn test_env_override_is_validated() {
    clear_env();
    env::set_var("SKINCAST_HUMIDITY_DRY_BELOW", "55");

    assert!(SkinIntelligenceConfig::load().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_settings_defaults() {
    clear_env();

    let settings = AnalyzerSettings::from_env().unwrap();
    assert_eq!(settings.max_upload_bytes, upload_limits::MAX_BYTES);
    assert_eq!(settings.allowed_extensions, vec!["png", "jpg", "jpeg"]);
    assert_eq!(settings.intelligence, SkinIntelligenceConfig::default());
}

#[test]
#[serial]
fn test_settings_from_env() {
    clear_env();
    env::set_var(MAX_UPLOAD_BYTES_VAR, "1024");
    env::set_var(ALLOWED_EXTENSIONS_VAR, " .PNG, jpg ,");

    let settings = AnalyzerSettings::from_env().unwrap();
    assert_eq!(settings.max_upload_bytes, 1024);
    assert_eq!(settings.allowed_extensions, vec!["png", "jpg"]);

    clear_env();
}

#[test]
#[serial]
fn test_settings_reject_bad_values() {
    clear_env();
    env::set_var(MAX_UPLOAD_BYTES_VAR, "five megabytes");
    let error = AnalyzerSettings::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);

    clear_env();
    env::set_var(ALLOWED_EXTENSIONS_VAR, " , ");
    assert!(AnalyzerSettings::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_rules_file_round_trip() {
    clear_env();
    let mut config = SkinIntelligenceConfig::default();
    config.weather.precipitation.score = 55.0;
    config.extraction.max_dimension = Some(800);
    let file = rules_file(&serde_json::to_string_pretty(&config).unwrap());

    let loaded = load_rules_file(file.path()).unwrap();
    assert_eq!(loaded, config);

    env::set_var(RULES_FILE_VAR, file.path());
    let settings = AnalyzerSettings::from_env().unwrap();
    assert_eq!(settings.intelligence, config);

    clear_env();
}

#[test]
#[serial]
fn test_rules_file_errors() {
    clear_env();

    let missing = load_rules_file(Path::new("/nonexistent/skincast-rules.json"));
    assert_eq!(missing.unwrap_err().code, ErrorCode::ConfigError);

    let malformed = rules_file("[1, 2, 3]");
    assert!(load_rules_file(malformed.path()).is_err());

    let mut config = SkinIntelligenceConfig::default();
    config.weather.temperature.cold_max_celsius = 20.0;
    let inconsistent = rules_file(&serde_json::to_string(&config).unwrap());
    assert!(load_rules_file(inconsistent.path()).is_err());
}
