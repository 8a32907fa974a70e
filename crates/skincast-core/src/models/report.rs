// ABOUTME: Final report composition returned to the request handling layer
// ABOUTME: Echoes the weather reading and carries analyses, recommendations, and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use super::{
    uv_risk_label, FactorScore, ImageFeatures, RecommendationBundle, SeverityTier, WeatherReading,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inputs for one complete analysis
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    /// Already-resolved weather reading; required
    pub weather: Option<WeatherReading>,
    /// Encoded photo bytes; optional
    pub image: Option<Vec<u8>>,
}

impl AnalysisRequest {
    /// Request for a weather-only analysis
    #[must_use]
    pub const fn weather_only(reading: WeatherReading) -> Self {
        Self {
            weather: Some(reading),
            image: None,
        }
    }

    /// Attach encoded image bytes
    #[must_use]
    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }
}

/// Weather reading echoed for display, with derived labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// The reading as received
    #[serde(flatten)]
    pub reading: WeatherReading,
    /// UV risk label (Low .. Extreme)
    pub uv_risk: String,
    /// Air quality category label
    pub aqi_category: String,
    /// What the air quality does to skin
    pub aqi_skin_impact: String,
}

impl From<&WeatherReading> for WeatherSummary {
    fn from(reading: &WeatherReading) -> Self {
        Self {
            reading: reading.clone(),
            uv_risk: uv_risk_label(reading.uv_index).to_owned(),
            aqi_category: reading.aqi.label().to_owned(),
            aqi_skin_impact: reading.aqi.skin_impact().to_owned(),
        }
    }
}

/// Conditions detected in one photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinAnalysis {
    /// Reported conditions, highest score first; never empty
    pub conditions: Vec<FactorScore>,
    /// Features the conditions were scored from
    pub features: ImageFeatures,
}

/// Outcome of the image pipeline within a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SkinAnalysisOutcome {
    /// No photo was supplied
    NotRequested,
    /// Photo analyzed
    Analyzed(SkinAnalysis),
    /// Photo supplied but could not be analyzed; weather analysis still ran
    Unavailable {
        /// Why the photo could not be analyzed
        reason: String,
    },
}

impl SkinAnalysisOutcome {
    /// Conditions when the photo was analyzed, empty otherwise
    #[must_use]
    pub fn conditions(&self) -> &[FactorScore] {
        match self {
            Self::Analyzed(analysis) => &analysis.conditions,
            Self::NotRequested | Self::Unavailable { .. } => &[],
        }
    }
}

/// Complete response for one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier
    pub report_id: Uuid,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Weather summary
    pub weather: WeatherSummary,
    /// Weather factor analyses keyed by factor family
    pub weather_analysis: IndexMap<String, FactorScore>,
    /// Image pipeline outcome
    pub skin_analysis: SkinAnalysisOutcome,
    /// Aggregated recommendations
    pub recommendations: RecommendationBundle,
}

impl Report {
    /// Overall severity of the report
    #[must_use]
    pub const fn overall_severity(&self) -> SeverityTier {
        self.recommendations.overall_severity
    }

    /// Weather factor analysis for a family (`uv`, `humidity`, ...)
    #[must_use]
    pub fn weather_factor(&self, family: &str) -> Option<&FactorScore> {
        self.weather_analysis.get(family)
    }
}
