// ABOUTME: Factor identities and the scored, classified output of one factor scorer
// ABOUTME: Weather and image factors share one record shape so aggregation treats them alike
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use super::SeverityTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a scored risk factor.
///
/// Two-sided measurements (humidity, temperature) have one kind per framing so
/// each framing selects its own advice block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// Ultraviolet exposure
    Uv,
    /// Humidity at or above 70%: excess oil, breakouts, fungal growth
    HumidityExcess,
    /// Humidity between 50% and 70%
    HumidityElevated,
    /// Humidity below 30%: dehydration
    HumidityDry,
    /// Heat at or above 30 °C
    TemperatureHeat,
    /// Cold at or below 5 °C: frostbite and barrier damage
    TemperatureCold,
    /// Cool dry air between 5 °C and 16 °C: eczema-prone dryness
    TemperatureCool,
    /// Mild air from 16 °C up to the heat limit
    TemperatureMild,
    /// Air pollution
    AirQuality,
    /// Wind strong enough to strip the skin barrier
    Wind,
    /// Rain or drizzle: maceration and fungal risk
    Precipitation,
    /// Acne detected in the photo
    Acne,
    /// Uneven pigmentation detected in the photo
    Pigmentation,
    /// Sunburn detected in the photo
    Sunburn,
    /// Possible fungal infection detected in the photo
    FungalInfection,
    /// Eczema detected in the photo
    Eczema,
    /// Dry skin detected in the photo
    Dryness,
    /// No image condition cleared its reporting threshold
    Healthy,
}

impl FactorKind {
    /// Every image-derived condition, in scoring order
    pub const IMAGE_CONDITIONS: [Self; 6] = [
        Self::Acne,
        Self::Pigmentation,
        Self::Sunburn,
        Self::FungalInfection,
        Self::Eczema,
        Self::Dryness,
    ];

    /// Measurement family; framings of one measurement share a family
    #[must_use]
    pub const fn family(self) -> &'static str {
        match self {
            Self::Uv => "uv",
            Self::HumidityExcess | Self::HumidityElevated | Self::HumidityDry => "humidity",
            Self::TemperatureHeat
            | Self::TemperatureCold
            | Self::TemperatureCool
            | Self::TemperatureMild => "temperature",
            Self::AirQuality => "air_quality",
            Self::Wind => "wind",
            Self::Precipitation => "precipitation",
            Self::Acne => "acne",
            Self::Pigmentation => "pigmentation",
            Self::Sunburn => "sunburn",
            Self::FungalInfection => "fungal_infection",
            Self::Eczema => "eczema",
            Self::Dryness => "dryness",
            Self::Healthy => "healthy",
        }
    }

    /// Human-readable factor name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Uv => "UV Exposure",
            Self::HumidityExcess => "High Humidity",
            Self::HumidityElevated => "Elevated Humidity",
            Self::HumidityDry => "Low Humidity",
            Self::TemperatureHeat => "Heat",
            Self::TemperatureCold => "Cold",
            Self::TemperatureCool => "Cool Dry Air",
            Self::TemperatureMild => "Mild Temperature",
            Self::AirQuality => "Air Pollution",
            Self::Wind => "Wind",
            Self::Precipitation => "Precipitation",
            Self::Acne => "Acne",
            Self::Pigmentation => "Pigmentation",
            Self::Sunburn => "Sunburn",
            Self::FungalInfection => "Fungal Infection",
            Self::Eczema => "Eczema",
            Self::Dryness => "Dryness",
            Self::Healthy => "Healthy",
        }
    }

    /// Whether this factor comes from the image pipeline
    #[must_use]
    pub const fn is_image_derived(self) -> bool {
        matches!(
            self,
            Self::Acne
                | Self::Pigmentation
                | Self::Sunburn
                | Self::FungalInfection
                | Self::Eczema
                | Self::Dryness
                | Self::Healthy
        )
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Round to one decimal place, the precision reported to callers
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scored and classified output of one factor scorer.
///
/// Confidence is an affine map of the score, not a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Factor identity
    pub kind: FactorKind,
    /// Human-readable factor name
    pub name: String,
    /// Accumulated score on the 0-100 scale, capped per factor
    pub score: f64,
    /// Severity tier
    pub severity: SeverityTier,
    /// Calibrated confidence (0-100)
    pub confidence: f64,
    /// Human-readable risk label
    pub risk_label: String,
    /// Indicator strings describing what drove the score
    pub indicators: Vec<String>,
    /// Raw measurement behind a weather factor (UV index, %, °C, m/s, AQI ordinal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<f64>,
}

impl FactorScore {
    /// Build a factor score; score and confidence are rounded to one decimal
    pub fn new(
        kind: FactorKind,
        score: f64,
        severity: SeverityTier,
        confidence: f64,
        risk_label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: kind.display_name().to_owned(),
            score: round_tenth(score),
            severity,
            confidence: round_tenth(confidence),
            risk_label: risk_label.into(),
            indicators: Vec::new(),
            reading: None,
        }
    }

    /// Attach indicator strings
    #[must_use]
    pub fn with_indicators<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indicators = indicators.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the raw measurement
    #[must_use]
    pub fn with_reading(mut self, reading: f64) -> Self {
        self.reading = Some(reading);
        self
    }
}
