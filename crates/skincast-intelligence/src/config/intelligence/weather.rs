// ABOUTME: Weather risk configuration for UV, humidity, temperature, air, wind, and rain factors
// ABOUTME: Configures presence thresholds, score accumulation, severity bands, and confidence maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Weather Risk Configuration
//!
//! Provides the thresholds each weather factor scorer uses to decide whether
//! its factor is present, how the score accumulates, and which tier applies.

use crate::severity::{ConfidenceMap, CutBoundary, SeverityBands};
use serde::{Deserialize, Serialize};
use skincast_core::models::SeverityTier;

/// Weather Risk Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherRiskConfig {
    /// UV exposure scoring
    pub uv: UvRiskConfig,
    /// Humidity framings (excess, elevated, dry)
    pub humidity: HumidityRiskConfig,
    /// Temperature framings (heat, cold, cool)
    pub temperature: TemperatureRiskConfig,
    /// Air pollution scoring
    pub air_quality: AirQualityRiskConfig,
    /// Wind scoring
    pub wind: WindRiskConfig,
    /// Rain and drizzle detection
    pub precipitation: PrecipitationRiskConfig,
}

/// UV exposure scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvRiskConfig {
    /// Tier bands over the UV index
    pub bands: SeverityBands,
    /// Score points per UV index unit
    pub points_per_index: f64,
    /// Bonus when the sky is clear or sunny
    pub clear_sky_bonus: f64,
    /// Condition keywords that earn the clear-sky bonus
    pub clear_sky_keywords: Vec<String>,
    /// Bonus when snow reflects UV
    pub snow_bonus: f64,
    /// Condition keywords that earn the snow bonus
    pub snow_keywords: Vec<String>,
    /// Bonus in hot weather
    pub heat_bonus: f64,
    /// Temperature at which the heat bonus applies (°C)
    pub heat_bonus_min_celsius: f64,
    /// Score ceiling
    pub cap: f64,
    /// Score-to-confidence map
    pub confidence: ConfidenceMap,
}

/// Humidity framings; humidity is checked for excess and for dehydration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumidityRiskConfig {
    /// Humidity at which the excess-oil framing applies (%)
    pub excess_min_percent: f64,
    /// Humidity at which the elevated framing applies (%)
    pub elevated_min_percent: f64,
    /// Humidity below which the dehydration framing applies (%)
    pub dry_below_percent: f64,
    /// Tier of the excess framing
    pub excess_tier: SeverityTier,
    /// Tier of the elevated framing
    pub elevated_tier: SeverityTier,
    /// Tier of the dehydration framing
    pub dry_tier: SeverityTier,
    /// Score-to-confidence map shared by every framing
    pub confidence: ConfidenceMap,
}

/// Temperature framings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRiskConfig {
    /// Heat framing starts at this temperature (°C)
    pub heat_min_celsius: f64,
    /// Cold framing applies at or below this temperature (°C)
    pub cold_max_celsius: f64,
    /// Cool framing applies below this temperature and above the cold limit (°C)
    pub cool_below_celsius: f64,
    /// Base score of the heat and cold framings
    pub extreme_base_score: f64,
    /// Score points per degree beyond the heat or cold limit
    pub extreme_points_per_degree: f64,
    /// Base score of the cool framing
    pub cool_base_score: f64,
    /// Score points per degree below the cool limit
    pub cool_points_per_degree: f64,
    /// Fixed score of the mild framing, between the cool and heat limits
    pub mild_score: f64,
    /// Score ceiling
    pub cap: f64,
    /// Tier of the heat and cold framings
    pub extreme_tier: SeverityTier,
    /// Tier of the cool framing
    pub cool_tier: SeverityTier,
    /// Tier of the mild framing
    pub mild_tier: SeverityTier,
    /// Confidence of the heat and cold framings
    pub extreme_confidence: ConfidenceMap,
    /// Confidence of the cool and mild framings
    pub cool_confidence: ConfidenceMap,
}

/// Air pollution scoring over the ordinal 1-5 category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityRiskConfig {
    /// Tier bands over the ordinal
    pub bands: SeverityBands,
    /// Score points per ordinal step
    pub points_per_ordinal: f64,
    /// Score-to-confidence map
    pub confidence: ConfidenceMap,
}

/// Wind scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindRiskConfig {
    /// Wind must exceed this speed for the factor to be present (m/s)
    pub present_above_ms: f64,
    /// Tier bands over the wind speed
    pub bands: SeverityBands,
    /// Score points per m/s
    pub points_per_ms: f64,
    /// Score ceiling
    pub cap: f64,
    /// Score-to-confidence map
    pub confidence: ConfidenceMap,
}

/// Rain and drizzle detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationRiskConfig {
    /// Condition keywords that mark precipitation
    pub keywords: Vec<String>,
    /// Fixed score
    pub score: f64,
    /// Fixed tier
    pub tier: SeverityTier,
    /// Confidence map
    pub confidence: ConfidenceMap,
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
}

impl Default for UvRiskConfig {
    fn default() -> Self {
        Self {
            bands: SeverityBands::new(SeverityTier::Low, CutBoundary::Inclusive)
                .cut(3.0, SeverityTier::Moderate)
                .cut(6.0, SeverityTier::High)
                .cut(8.0, SeverityTier::Extreme),
            points_per_index: 10.0,
            clear_sky_bonus: 10.0,
            clear_sky_keywords: keywords(&["clear", "sun"]),
            snow_bonus: 10.0,
            snow_keywords: keywords(&["snow"]),
            heat_bonus: 5.0,
            heat_bonus_min_celsius: 30.0,
            cap: 100.0,
            confidence: ConfidenceMap::affine(70.0, 4.0, 95.0),
        }
    }
}

impl Default for HumidityRiskConfig {
    fn default() -> Self {
        Self {
            excess_min_percent: 70.0,
            elevated_min_percent: 50.0,
            dry_below_percent: 30.0,
            excess_tier: SeverityTier::High,
            elevated_tier: SeverityTier::Moderate,
            dry_tier: SeverityTier::Moderate,
            confidence: ConfidenceMap::affine(60.0, 3.0, 90.0),
        }
    }
}

impl Default for TemperatureRiskConfig {
    fn default() -> Self {
        Self {
            heat_min_celsius: 30.0,
            cold_max_celsius: 5.0,
            cool_below_celsius: 16.0,
            extreme_base_score: 50.0,
            extreme_points_per_degree: 5.0,
            cool_base_score: 30.0,
            cool_points_per_degree: 2.0,
            mild_score: 20.0,
            cap: 100.0,
            extreme_tier: SeverityTier::High,
            cool_tier: SeverityTier::Moderate,
            mild_tier: SeverityTier::Low,
            extreme_confidence: ConfidenceMap::affine(65.0, 4.0, 90.0),
            cool_confidence: ConfidenceMap::affine(60.0, 4.0, 85.0),
        }
    }
}

impl Default for AirQualityRiskConfig {
    fn default() -> Self {
        Self {
            bands: SeverityBands::new(SeverityTier::Low, CutBoundary::Inclusive)
                .cut(3.0, SeverityTier::Moderate)
                .cut(4.0, SeverityTier::High)
                .cut(5.0, SeverityTier::Extreme),
            points_per_ordinal: 20.0,
            confidence: ConfidenceMap::affine(60.0, 4.0, 90.0),
        }
    }
}

impl Default for WindRiskConfig {
    fn default() -> Self {
        Self {
            present_above_ms: 10.0,
            bands: SeverityBands::new(SeverityTier::Moderate, CutBoundary::Exclusive)
                .cut(15.0, SeverityTier::High),
            points_per_ms: 5.0,
            cap: 100.0,
            confidence: ConfidenceMap::affine(60.0, 4.0, 85.0),
        }
    }
}

impl Default for PrecipitationRiskConfig {
    fn default() -> Self {
        Self {
            keywords: keywords(&["rain", "drizzle"]),
            score: 45.0,
            tier: SeverityTier::Moderate,
            confidence: ConfidenceMap::fixed(75.0),
        }
    }
}
