// ABOUTME: Weather reading snapshot and canonical air-quality category
// ABOUTME: Applies documented defaults for unavailable upstream data and validates domains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use crate::constants::{aqi_raw_scale, reading_defaults, reading_limits, uv_scale};
use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality on the canonical ordinal 1-5 scale.
///
/// Upstream sources that report the raw 0-500 index are converted with
/// [`AqiCategory::from_raw_index`]; the ordinal scale is never mixed with raw values.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "AqiRepr", into = "u8")]
pub enum AqiCategory {
    /// Ordinal 1
    Good,
    /// Ordinal 2
    #[default]
    Fair,
    /// Ordinal 3
    Moderate,
    /// Ordinal 4
    Poor,
    /// Ordinal 5
    VeryPoor,
}

/// Accepted wire shapes for an AQI value
#[derive(Deserialize)]
#[serde(untagged)]
enum AqiRepr {
    Ordinal(u8),
    Raw { raw_index: u16 },
}

impl AqiCategory {
    /// Build from the ordinal 1-5 scale
    ///
    /// # Errors
    ///
    /// Returns an error if the ordinal is outside 1-5
    pub fn from_ordinal(ordinal: u8) -> Result<Self, AnalysisError> {
        match ordinal {
            1 => Ok(Self::Good),
            2 => Ok(Self::Fair),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::Poor),
            5 => Ok(Self::VeryPoor),
            other => Err(AnalysisError::invalid_reading(
                "aqi",
                format!("ordinal {other} is outside 1-5"),
            )),
        }
    }

    /// Convert a raw 0-500 index: 0-50 Good, 51-100 Moderate, 101-150 Poor, 151+ Very Poor
    #[must_use]
    pub const fn from_raw_index(raw_index: u16) -> Self {
        if raw_index <= aqi_raw_scale::GOOD_MAX {
            Self::Good
        } else if raw_index <= aqi_raw_scale::MODERATE_MAX {
            Self::Moderate
        } else if raw_index <= aqi_raw_scale::POOR_MAX {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    /// Position on the ordinal 1-5 scale
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Good => 1,
            Self::Fair => 2,
            Self::Moderate => 3,
            Self::Poor => 4,
            Self::VeryPoor => 5,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }

    /// One-sentence description of what this air quality does to skin
    #[must_use]
    pub const fn skin_impact(self) -> &'static str {
        match self {
            Self::Good => "Minimal impact on skin. Normal skincare routine is sufficient.",
            Self::Fair => "Low impact. Basic cleansing recommended after outdoor activities.",
            Self::Moderate => {
                "Moderate impact. Antioxidant skincare recommended. Cleanse thoroughly."
            }
            Self::Poor => {
                "Poor air quality can accelerate aging. Use protective barrier creams and antioxidants."
            }
            Self::VeryPoor => {
                "Very poor air quality. Minimize outdoor exposure. Use strong antioxidants and barrier repair products."
            }
        }
    }
}

impl TryFrom<AqiRepr> for AqiCategory {
    type Error = AnalysisError;

    fn try_from(repr: AqiRepr) -> Result<Self, Self::Error> {
        match repr {
            AqiRepr::Ordinal(ordinal) => Self::from_ordinal(ordinal),
            AqiRepr::Raw { raw_index } => Ok(Self::from_raw_index(raw_index)),
        }
    }
}

impl From<AqiCategory> for u8 {
    fn from(category: AqiCategory) -> Self {
        category.ordinal()
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display label for a UV index on the five-step WHO scale
#[must_use]
pub fn uv_risk_label(uv_index: f64) -> &'static str {
    if uv_index < uv_scale::MODERATE {
        "Low"
    } else if uv_index < uv_scale::HIGH {
        "Moderate"
    } else if uv_index < uv_scale::VERY_HIGH {
        "High"
    } else if uv_index < uv_scale::EXTREME {
        "Very High"
    } else {
        "Extreme"
    }
}

const fn default_uv_index() -> f64 {
    reading_defaults::UV_INDEX
}

fn default_condition() -> String {
    reading_defaults::CONDITION.to_owned()
}

/// Snapshot of ambient conditions for one analysis request.
///
/// Fields the upstream fetchers could not supply fall back to the documented
/// defaults (UV 5, AQI Fair, wind 0, condition "clear").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Optional place name echoed for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Air temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity (0-100)
    pub humidity_percent: f64,
    /// Wind speed in metres per second
    #[serde(default)]
    pub wind_speed_ms: f64,
    /// Free-text condition label (clear, rain, snow, clouds, mist, ...)
    #[serde(default = "default_condition")]
    pub condition: String,
    /// UV index (0-11+)
    #[serde(default = "default_uv_index")]
    pub uv_index: f64,
    /// Air quality on the canonical ordinal scale
    #[serde(default)]
    pub aqi: AqiCategory,
    /// Fine particulate matter (µg/m³), when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm2_5: Option<f64>,
    /// Coarse particulate matter (µg/m³), when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
}

impl WeatherReading {
    /// Create a reading from the two mandatory measurements, defaulting the rest
    #[must_use]
    pub fn new(temperature_celsius: f64, humidity_percent: f64) -> Self {
        Self {
            location: None,
            temperature_celsius,
            humidity_percent,
            wind_speed_ms: reading_defaults::WIND_SPEED_MS,
            condition: default_condition(),
            uv_index: reading_defaults::UV_INDEX,
            aqi: AqiCategory::default(),
            pm2_5: None,
            pm10: None,
        }
    }

    /// Set the wind speed (m/s)
    #[must_use]
    pub fn with_wind(mut self, wind_speed_ms: f64) -> Self {
        self.wind_speed_ms = wind_speed_ms;
        self
    }

    /// Set the condition label
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Set the UV index
    #[must_use]
    pub fn with_uv(mut self, uv_index: f64) -> Self {
        self.uv_index = uv_index;
        self
    }

    /// Set the air quality category
    #[must_use]
    pub fn with_aqi(mut self, aqi: AqiCategory) -> Self {
        self.aqi = aqi;
        self
    }

    /// Set the display location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Whether the condition label mentions any of the given keywords (case-insensitive)
    #[must_use]
    pub fn condition_mentions(&self, keywords: &[&str]) -> bool {
        let condition = self.condition.to_lowercase();
        keywords.iter().any(|keyword| condition.contains(keyword))
    }

    /// Check every numeric field is finite and inside its physical domain
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidReading` naming the first offending field
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let finite = [
            ("temperature", self.temperature_celsius),
            ("humidity", self.humidity_percent),
            ("wind_speed", self.wind_speed_ms),
            ("uv_index", self.uv_index),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(AnalysisError::invalid_reading(field, "must be a finite number"));
            }
        }

        if !(reading_limits::TEMPERATURE_MIN..=reading_limits::TEMPERATURE_MAX)
            .contains(&self.temperature_celsius)
        {
            return Err(AnalysisError::invalid_reading(
                "temperature",
                format!("{} °C is not a plausible air temperature", self.temperature_celsius),
            ));
        }
        if !(reading_limits::HUMIDITY_MIN..=reading_limits::HUMIDITY_MAX)
            .contains(&self.humidity_percent)
        {
            return Err(AnalysisError::invalid_reading(
                "humidity",
                format!("{}% is outside 0-100", self.humidity_percent),
            ));
        }
        if self.wind_speed_ms < 0.0 {
            return Err(AnalysisError::invalid_reading(
                "wind_speed",
                "must not be negative",
            ));
        }
        if self.uv_index < 0.0 {
            return Err(AnalysisError::invalid_reading(
                "uv_index",
                "must not be negative",
            ));
        }
        Ok(())
    }
}
