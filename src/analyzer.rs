// ABOUTME: Report assembler wiring feature extraction, factor scoring, and aggregation together
// ABOUTME: Weather analysis always runs; an unreadable photo only disables the image pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! # Skin Analyzer
//!
//! An explicitly constructed, immutable value holding the validated scoring
//! rules. Every method is a pure function of its inputs, so one analyzer can
//! be shared across threads and requests.

use chrono::Utc;
use indexmap::IndexMap;
use skincast_core::errors::{AnalysisError, AppError, AppResult};
use skincast_core::models::{
    AnalysisRequest, FactorScore, RecommendationBundle, Report, SkinAnalysis,
    SkinAnalysisOutcome, WeatherReading, WeatherSummary,
};
use skincast_intelligence::config::SkinIntelligenceConfig;
use skincast_intelligence::extraction::features_from_bytes;
use skincast_intelligence::{ImageConditionScorer, RecommendationEngine, WeatherFactorScorer};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Skin-risk analyzer
#[derive(Debug, Clone)]
pub struct SkinAnalyzer {
    config: SkinIntelligenceConfig,
    weather_scorer: WeatherFactorScorer,
    image_scorer: ImageConditionScorer,
    recommendations: RecommendationEngine,
}

impl Default for SkinAnalyzer {
    fn default() -> Self {
        Self::from_validated(SkinIntelligenceConfig::default())
    }
}

impl SkinAnalyzer {
    /// Create an analyzer from a configuration, validating it first
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the rules are inconsistent
    pub fn new(config: SkinIntelligenceConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::config(e.to_string()).with_source(e))?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: SkinIntelligenceConfig) -> Self {
        Self {
            weather_scorer: WeatherFactorScorer::new(config.weather.clone()),
            image_scorer: ImageConditionScorer::new(config.image.clone()),
            recommendations: RecommendationEngine::new(),
            config,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &SkinIntelligenceConfig {
        &self.config
    }

    /// Score every applicable weather factor
    ///
    /// # Errors
    ///
    /// Returns an error if a reading field is not finite or outside its domain
    pub fn analyze_weather(&self, reading: &WeatherReading) -> AppResult<Vec<FactorScore>> {
        reading.validate()?;
        Ok(self.weather_scorer.score(reading))
    }

    /// Extract features from a photo and score the image conditions
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ImageDecode` if the bytes cannot be decoded
    pub fn analyze_image(&self, image: &[u8]) -> Result<SkinAnalysis, AnalysisError> {
        let features = features_from_bytes(image, &self.config.extraction)?;
        let conditions = self.image_scorer.score(&features);
        debug!(
            conditions = conditions.len(),
            top = %conditions.first().map_or("none", |c| c.kind.family()),
            "Image conditions scored"
        );
        Ok(SkinAnalysis {
            conditions,
            features,
        })
    }

    /// Recommendations from a photo alone
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ImageDecode` if the bytes cannot be decoded
    pub fn recommend_for_image(&self, image: &[u8]) -> Result<RecommendationBundle, AnalysisError> {
        let analysis = self.analyze_image(image)?;
        Ok(self.recommend(&analysis.conditions))
    }

    /// Aggregate already-scored factors into a recommendation bundle
    #[must_use]
    pub fn recommend(&self, factors: &[FactorScore]) -> RecommendationBundle {
        self.recommendations.aggregate(factors)
    }

    /// Assemble a complete report
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MissingWeather` when no reading is supplied and an
    /// invalid-reading error when the reading fails validation. A photo that
    /// cannot be decoded is not an error: the report carries
    /// `SkinAnalysisOutcome::Unavailable` and the weather analysis proceeds.
    pub fn assemble(&self, request: &AnalysisRequest) -> AppResult<Report> {
        let reading = request
            .weather
            .as_ref()
            .ok_or(AnalysisError::MissingWeather)?;
        let weather_factors = self.analyze_weather(reading)?;

        let skin_analysis = match &request.image {
            None => SkinAnalysisOutcome::NotRequested,
            Some(image) => match self.analyze_image(image) {
                Ok(analysis) => SkinAnalysisOutcome::Analyzed(analysis),
                Err(e) => {
                    warn!(error = %e, "Image pipeline skipped");
                    SkinAnalysisOutcome::Unavailable {
                        reason: e.to_string(),
                    }
                }
            },
        };

        let all_factors: Vec<FactorScore> = weather_factors
            .iter()
            .chain(skin_analysis.conditions())
            .cloned()
            .collect();
        let recommendations = self.recommendations.aggregate(&all_factors);

        let weather_analysis: IndexMap<String, FactorScore> = weather_factors
            .into_iter()
            .map(|factor| (factor.kind.family().to_owned(), factor))
            .collect();

        let report = Report {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            weather: WeatherSummary::from(reading),
            weather_analysis,
            skin_analysis,
            recommendations,
        };

        info!(
            report_id = %report.report_id,
            factors = all_factors.len(),
            overall_severity = %report.overall_severity(),
            priority_actions = report.recommendations.priority_actions.len(),
            "Report assembled"
        );
        Ok(report)
    }
}
