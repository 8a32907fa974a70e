// ABOUTME: Integration tests for the weather factor scorers
// ABOUTME: Covers factor presence, framings, severity bands, confidence, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{approx, hot_polluted_reading, mild_reading};
use skincast::errors::ErrorCode;
use skincast::models::{AqiCategory, FactorKind, SeverityTier, WeatherReading};
use skincast::SkinAnalyzer;
use skincast_intelligence::{RecommendationEngine, WeatherFactorScorer};

fn kinds(reading: &WeatherReading) -> Vec<FactorKind> {
    WeatherFactorScorer::default()
        .score(reading)
        .into_iter()
        .map(|factor| factor.kind)
        .collect()
}

#[test]
fn test_hot_polluted_day_produces_four_factors() {
    let factors = WeatherFactorScorer::default().score(&hot_polluted_reading());
    let kinds: Vec<FactorKind> = factors.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FactorKind::Uv,
            FactorKind::HumidityExcess,
            FactorKind::TemperatureHeat,
            FactorKind::AirQuality
        ]
    );

    let uv = &factors[0];
    assert_eq!(uv.severity, SeverityTier::Extreme);
    assert!(approx(uv.score, 100.0));
    assert!(approx(uv.confidence, 95.0));
    assert_eq!(uv.risk_label, "Very High");

    let humidity = &factors[1];
    assert_eq!(humidity.severity, SeverityTier::High);
    assert!(approx(humidity.score, 75.0));
    assert!(approx(humidity.confidence, 85.0));

    let heat = &factors[2];
    assert_eq!(heat.severity, SeverityTier::High);
    assert!(approx(heat.score, 60.0));
    assert!(approx(heat.confidence, 80.0));
    assert_eq!(heat.reading, Some(32.0));

    let air = &factors[3];
    assert_eq!(air.severity, SeverityTier::Extreme);
    assert!(approx(air.score, 100.0));
    assert_eq!(air.risk_label, "Very Poor");
}

#[test]
fn test_mild_day_has_only_always_present_factors() {
    let factors = WeatherFactorScorer::default().score(&mild_reading());
    assert_eq!(factors.len(), 3);
    assert_eq!(factors[0].kind, FactorKind::Uv);
    assert_eq!(factors[0].severity, SeverityTier::Low);
    // 2 * 10, no clear-sky bonus under clouds
    assert!(approx(factors[0].score, 20.0));
    assert!(approx(factors[0].confidence, 75.0));
    assert_eq!(factors[1].kind, FactorKind::TemperatureMild);
    assert_eq!(factors[1].severity, SeverityTier::Low);
    assert_eq!(factors[1].reading, Some(22.0));
    assert_eq!(factors[2].kind, FactorKind::AirQuality);
    assert_eq!(factors[2].severity, SeverityTier::Low);
}

#[test]
fn test_uv_nine_on_clear_day_is_extreme_with_priority_action() {
    let reading = WeatherReading::new(24.0, 45.0)
        .with_uv(9.0)
        .with_condition("Clear");
    let factors = WeatherFactorScorer::default().score(&reading);
    let uv = factors.iter().find(|f| f.kind == FactorKind::Uv).unwrap();
    assert_eq!(uv.severity, SeverityTier::Extreme);

    let bundle = RecommendationEngine::new().aggregate(&factors);
    assert!(bundle
        .priority_actions
        .iter()
        .any(|action| action.starts_with("URGENT: UV Index is 9.0")));
}

#[test]
fn test_uv_bands() {
    let scorer = WeatherFactorScorer::default();
    let tier = |uv: f64| {
        scorer
            .score_uv(&WeatherReading::new(20.0, 40.0).with_uv(uv))
            .severity
    };
    assert_eq!(tier(2.9), SeverityTier::Low);
    assert_eq!(tier(3.0), SeverityTier::Moderate);
    assert_eq!(tier(5.9), SeverityTier::Moderate);
    assert_eq!(tier(6.0), SeverityTier::High);
    assert_eq!(tier(8.0), SeverityTier::Extreme);
}

#[test]
fn test_snow_adds_reflection_bonus() {
    let reading = WeatherReading::new(-3.0, 60.0)
        .with_uv(4.0)
        .with_condition("Snow");
    let uv = WeatherFactorScorer::default().score_uv(&reading);
    assert!(approx(uv.score, 50.0));
    assert!(uv.indicators.iter().any(|i| i == "Snow Reflection"));
}

#[test]
fn test_humidity_framings_never_share_products() {
    let engine = RecommendationEngine::new();
    let scorer = WeatherFactorScorer::default();

    let dry = scorer
        .score_humidity(&WeatherReading::new(20.0, 20.0))
        .unwrap();
    let humid = scorer
        .score_humidity(&WeatherReading::new(20.0, 85.0))
        .unwrap();
    assert_eq!(dry.kind, FactorKind::HumidityDry);
    assert_eq!(humid.kind, FactorKind::HumidityExcess);
    assert_eq!(dry.kind.family(), humid.kind.family());

    let dry_products = engine.aggregate(&[dry]).products_list;
    let humid_products = engine.aggregate(&[humid]).products_list;
    assert!(!dry_products.is_empty());
    assert!(!humid_products.is_empty());
    assert!(dry_products.iter().all(|p| !humid_products.contains(p)));
}

#[test]
fn test_humidity_boundaries() {
    let scorer = WeatherFactorScorer::default();
    let kind = |humidity: f64| {
        scorer
            .score_humidity(&WeatherReading::new(20.0, humidity))
            .map(|f| f.kind)
    };
    assert_eq!(kind(70.0), Some(FactorKind::HumidityExcess));
    assert_eq!(kind(69.9), Some(FactorKind::HumidityElevated));
    assert_eq!(kind(50.0), Some(FactorKind::HumidityElevated));
    assert_eq!(kind(49.9), None);
    assert_eq!(kind(30.0), None);
    assert_eq!(kind(29.9), Some(FactorKind::HumidityDry));
}

#[test]
fn test_temperature_framings_and_boundaries() {
    let kind_at = |celsius: f64| {
        kinds(&WeatherReading::new(celsius, 40.0))
            .into_iter()
            .find(|k| k.family() == "temperature")
    };
    assert_eq!(kind_at(30.0), Some(FactorKind::TemperatureHeat));
    assert_eq!(kind_at(29.9), Some(FactorKind::TemperatureMild));
    assert_eq!(kind_at(16.0), Some(FactorKind::TemperatureMild));
    assert_eq!(kind_at(15.9), Some(FactorKind::TemperatureCool));
    assert_eq!(kind_at(5.5), Some(FactorKind::TemperatureCool));
    assert_eq!(kind_at(5.0), Some(FactorKind::TemperatureCold));
    assert_eq!(kind_at(-10.0), Some(FactorKind::TemperatureCold));

    let scorer = WeatherFactorScorer::default();
    let cool = scorer.score_temperature(&WeatherReading::new(10.0, 40.0));
    assert_eq!(cool.severity, SeverityTier::Moderate);
    assert!(approx(cool.score, 42.0));
    assert!(approx(cool.confidence, 70.5));

    for celsius in [16.0, 29.9] {
        let mild = scorer.score_temperature(&WeatherReading::new(celsius, 40.0));
        assert_eq!(mild.severity, SeverityTier::Low, "{celsius}");
        assert!(approx(mild.score, 20.0));
        assert!(approx(mild.confidence, 65.0));
    }
}

#[test]
fn test_mild_temperature_contributes_lightweight_advice() {
    let mild = WeatherFactorScorer::default().score_temperature(&WeatherReading::new(22.0, 40.0));
    let bundle = RecommendationEngine::new().aggregate(&[mild]);
    assert!(bundle
        .products_list
        .iter()
        .any(|product| product == "Lightweight gel moisturizer"));
    assert!(bundle.priority_actions.is_empty());
    assert_eq!(bundle.overall_severity, SeverityTier::Low);
}

#[test]
fn test_wind_tiers() {
    let scorer = WeatherFactorScorer::default();
    let wind = |speed: f64| scorer.score_wind(&WeatherReading::new(20.0, 40.0).with_wind(speed));
    assert!(wind(10.0).is_none());
    let moderate = wind(12.0).unwrap();
    assert_eq!(moderate.severity, SeverityTier::Moderate);
    assert!(approx(moderate.score, 60.0));
    assert_eq!(wind(15.1).unwrap().severity, SeverityTier::High);
    assert!(approx(wind(25.0).unwrap().score, 100.0));
}

#[test]
fn test_precipitation_from_condition_label() {
    let scorer = WeatherFactorScorer::default();
    for condition in ["Rain", "light rain", "Drizzle"] {
        let reading = WeatherReading::new(18.0, 40.0).with_condition(condition);
        let factor = scorer.score_precipitation(&reading).unwrap();
        assert_eq!(factor.severity, SeverityTier::Moderate, "{condition}");
        assert!(approx(factor.score, 45.0));
        assert!(approx(factor.confidence, 75.0));
    }
    let dry = WeatherReading::new(18.0, 40.0).with_condition("Mist");
    assert!(scorer.score_precipitation(&dry).is_none());
}

#[test]
fn test_air_quality_raw_index_conversion() {
    let category = AqiCategory::from_raw_index;
    assert_eq!(category(0), AqiCategory::Good);
    assert_eq!(category(50), AqiCategory::Good);
    assert_eq!(category(51), AqiCategory::Moderate);
    assert_eq!(category(100), AqiCategory::Moderate);
    assert_eq!(category(101), AqiCategory::Poor);
    assert_eq!(category(150), AqiCategory::Poor);
    assert_eq!(category(151), AqiCategory::VeryPoor);
    assert_eq!(category(500), AqiCategory::VeryPoor);
}

#[test]
fn test_scoring_is_deterministic() {
    let scorer = WeatherFactorScorer::default();
    let reading = hot_polluted_reading().with_condition("rain");
    assert_eq!(scorer.score(&reading), scorer.score(&reading));
}

#[test]
fn test_invalid_readings_are_refused() {
    let analyzer = SkinAnalyzer::default();

    let humid = WeatherReading::new(20.0, 120.0);
    let error = analyzer.analyze_weather(&humid).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let nan = WeatherReading::new(f64::NAN, 40.0);
    assert!(analyzer.analyze_weather(&nan).is_err());

    let gusty = WeatherReading::new(20.0, 40.0).with_wind(-1.0);
    assert!(analyzer.analyze_weather(&gusty).is_err());
}
