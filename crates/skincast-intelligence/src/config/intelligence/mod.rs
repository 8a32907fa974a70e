// ABOUTME: Skin intelligence configuration for weather risk scoring and image condition rules
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Skin Intelligence Configuration Module
//!
//! Every threshold, increment, cap, confidence map, and severity band used by
//! the engine lives here as typed configuration whose defaults reproduce the
//! calibrated rules.
//!
//! # Module Structure
//!
//! - `weather` - Weather factor presence thresholds, scores, and bands
//! - `image_rules` - Image condition rule tables and the healthy fallback
//! - `extraction` - Feature extraction (downscaling, edge thresholds)
//!
//! The validated configuration is an explicit value handed to the engine;
//! there is no process-wide instance.

pub mod error;
pub mod extraction;
pub mod image_rules;
pub mod weather;

pub use error::ConfigError;
pub use extraction::FeatureExtractionConfig;
pub use image_rules::{
    Comparison, ConditionRules, FeatureRule, HealthyFallbackConfig, ImageRulesConfig,
};
pub use weather::{
    AirQualityRiskConfig, HumidityRiskConfig, PrecipitationRiskConfig, TemperatureRiskConfig,
    UvRiskConfig, WeatherRiskConfig, WindRiskConfig,
};

use crate::severity::{ConfidenceMap, SeverityBands};
use serde::{Deserialize, Serialize};
use skincast_core::models::FactorKind;
use std::collections::HashSet;
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main skin intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinIntelligenceConfig {
    /// Weather factor scoring
    #[serde(default)]
    pub weather: WeatherRiskConfig,
    /// Image condition rule tables
    #[serde(default)]
    pub image: ImageRulesConfig,
    /// Feature extraction
    #[serde(default)]
    pub extraction: FeatureExtractionConfig,
}

impl SkinIntelligenceConfig {
    /// Load configuration: defaults plus `SKINCAST_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            image_conditions = config.image.conditions.len(),
            max_dimension = ?config.extraction.max_dimension,
            "Loaded skin intelligence configuration"
        );
        Ok(config)
    }

    /// Parse a full configuration from JSON and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or validation fails
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first rule that is out of order or out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_weather()?;
        self.validate_image()?;
        self.validate_extraction()
    }

    fn validate_weather(&self) -> Result<(), ConfigError> {
        let weather = &self.weather;

        check_bands(&weather.uv.bands, "UV bands must ascend")?;
        check_bands(&weather.air_quality.bands, "air quality bands must ascend")?;
        check_bands(&weather.wind.bands, "wind bands must ascend")?;

        for confidence in [
            &weather.uv.confidence,
            &weather.humidity.confidence,
            &weather.temperature.extreme_confidence,
            &weather.temperature.cool_confidence,
            &weather.air_quality.confidence,
            &weather.wind.confidence,
            &weather.precipitation.confidence,
        ] {
            check_confidence(confidence)?;
        }

        for cap in [
            weather.uv.cap,
            weather.temperature.cap,
            weather.temperature.mild_score,
            weather.wind.cap,
        ] {
            check_percentage(cap, "score caps and fixed scores must lie within 0-100")?;
        }

        let humidity = &weather.humidity;
        for bound in [
            humidity.dry_below_percent,
            humidity.elevated_min_percent,
            humidity.excess_min_percent,
        ] {
            check_percentage(bound, "humidity thresholds must lie within 0-100")?;
        }
        if humidity.dry_below_percent >= humidity.elevated_min_percent
            || humidity.elevated_min_percent >= humidity.excess_min_percent
        {
            return Err(ConfigError::InvalidRange(
                "humidity thresholds must satisfy dry < elevated < excess",
            ));
        }

        let temperature = &weather.temperature;
        if temperature.cold_max_celsius >= temperature.cool_below_celsius
            || temperature.cool_below_celsius > temperature.heat_min_celsius
        {
            return Err(ConfigError::InvalidRange(
                "temperature thresholds must satisfy cold < cool <= heat",
            ));
        }

        if weather.wind.present_above_ms < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "wind presence threshold must not be negative",
            ));
        }

        if weather.precipitation.keywords.is_empty() {
            return Err(ConfigError::MissingField("precipitation.keywords"));
        }
        check_percentage(
            weather.precipitation.score,
            "precipitation score must lie within 0-100",
        )
    }

    fn validate_image(&self) -> Result<(), ConfigError> {
        if self.image.conditions.is_empty() {
            return Err(ConfigError::MissingField("image.conditions"));
        }

        let mut seen = HashSet::new();
        for rules in &self.image.conditions {
            if !rules.kind.is_image_derived() || rules.kind == FactorKind::Healthy {
                return Err(ConfigError::ValueOutOfRange(
                    "image rule tables must name an image condition",
                ));
            }
            if !seen.insert(rules.kind) {
                return Err(ConfigError::InvalidRange(
                    "each image condition may only have one rule table",
                ));
            }
            check_percentage(rules.cap, "condition caps must lie within 0-100")?;
            if rules.report_threshold >= rules.cap {
                return Err(ConfigError::InvalidRange(
                    "reporting threshold must be below the condition cap",
                ));
            }
            if rules.max_score() < rules.report_threshold {
                return Err(ConfigError::InvalidWeights(
                    "rule increments can never reach the reporting threshold",
                ));
            }
            check_bands(&rules.bands, "condition bands must ascend")?;
            check_confidence(&rules.confidence)?;
        }

        let healthy = &self.image.healthy;
        check_percentage(healthy.score, "healthy score must lie within 0-100")?;
        check_percentage(healthy.confidence, "healthy confidence must lie within 0-100")
    }

    fn validate_extraction(&self) -> Result<(), ConfigError> {
        let extraction = &self.extraction;
        if extraction.edge_low_threshold <= 0.0
            || extraction.edge_low_threshold >= extraction.edge_high_threshold
        {
            return Err(ConfigError::InvalidRange(
                "edge thresholds must satisfy 0 < low < high",
            ));
        }
        if extraction.max_dimension == Some(0) {
            return Err(ConfigError::ValueOutOfRange(
                "max_dimension must be at least 1 pixel",
            ));
        }
        Ok(())
    }

    /// Apply a single environment variable override if present
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `SKINCAST_*` environment variable overrides; the result is not yet validated
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a set variable does not parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Weather presence thresholds
        Self::apply_env_var(
            "SKINCAST_HUMIDITY_EXCESS_MIN",
            &mut self.weather.humidity.excess_min_percent,
        )?;
        Self::apply_env_var(
            "SKINCAST_HUMIDITY_ELEVATED_MIN",
            &mut self.weather.humidity.elevated_min_percent,
        )?;
        Self::apply_env_var(
            "SKINCAST_HUMIDITY_DRY_BELOW",
            &mut self.weather.humidity.dry_below_percent,
        )?;
        Self::apply_env_var(
            "SKINCAST_TEMPERATURE_HEAT_MIN",
            &mut self.weather.temperature.heat_min_celsius,
        )?;
        Self::apply_env_var(
            "SKINCAST_TEMPERATURE_COLD_MAX",
            &mut self.weather.temperature.cold_max_celsius,
        )?;
        Self::apply_env_var(
            "SKINCAST_TEMPERATURE_COOL_BELOW",
            &mut self.weather.temperature.cool_below_celsius,
        )?;
        Self::apply_env_var(
            "SKINCAST_WIND_PRESENT_ABOVE",
            &mut self.weather.wind.present_above_ms,
        )?;
        Self::apply_env_var(
            "SKINCAST_UV_POINTS_PER_INDEX",
            &mut self.weather.uv.points_per_index,
        )?;

        // Feature extraction
        Self::apply_env_var(
            "SKINCAST_EDGE_LOW_THRESHOLD",
            &mut self.extraction.edge_low_threshold,
        )?;
        Self::apply_env_var(
            "SKINCAST_EDGE_HIGH_THRESHOLD",
            &mut self.extraction.edge_high_threshold,
        )?;
        Self::apply_env_var(
            "SKINCAST_PARALLEL_MIN_PIXELS",
            &mut self.extraction.parallel_min_pixels,
        )?;
        if let Ok(val) = env::var("SKINCAST_MAX_IMAGE_DIMENSION") {
            let dimension: u32 = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid SKINCAST_MAX_IMAGE_DIMENSION".to_owned()))?;
            self.extraction.max_dimension = Some(dimension);
        }

        Ok(self)
    }
}

fn check_bands(bands: &SeverityBands, message: &'static str) -> Result<(), ConfigError> {
    if bands.is_ordered() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange(message))
    }
}

fn check_confidence(confidence: &ConfidenceMap) -> Result<(), ConfigError> {
    if confidence.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(
            "confidence maps need base and cap within 0-100 and a positive divisor",
        ))
    }
}

fn check_percentage(value: f64, message: &'static str) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}
