// ABOUTME: Image condition scorers accumulating additive feature rules per condition
// ABOUTME: Reports conditions above their threshold, or a single healthy result when none qualify
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use crate::config::intelligence::{ConditionRules, ImageRulesConfig};
use skincast_core::models::{FactorKind, FactorScore, ImageFeatures};
use tracing::debug;

/// Scores image conditions from extracted features
#[derive(Debug, Clone, Default)]
pub struct ImageConditionScorer {
    config: ImageRulesConfig,
}

impl ImageConditionScorer {
    /// Create a scorer with the given rule tables
    #[must_use]
    pub const fn new(config: ImageRulesConfig) -> Self {
        Self { config }
    }

    /// Rule tables in use
    #[must_use]
    pub const fn config(&self) -> &ImageRulesConfig {
        &self.config
    }

    /// Sum of the increments whose rule holds
    #[must_use]
    pub fn accumulate(rules: &ConditionRules, features: &ImageFeatures) -> f64 {
        rules
            .rules
            .iter()
            .filter(|rule| rule.comparison.holds(features.get(rule.feature)))
            .map(|rule| rule.increment)
            .sum()
    }

    /// Score one condition; `None` when it stays below its reporting threshold.
    ///
    /// Tier and confidence come from the accumulated score, the reported score is capped.
    #[must_use]
    pub fn score_condition(rules: &ConditionRules, features: &ImageFeatures) -> Option<FactorScore> {
        let accumulated = Self::accumulate(rules, features);
        if accumulated < rules.report_threshold {
            return None;
        }

        let tier = rules.bands.classify(accumulated);
        Some(
            FactorScore::new(
                rules.kind,
                accumulated.min(rules.cap),
                tier,
                rules.confidence.confidence(accumulated),
                tier.label(),
            )
            .with_indicators(rules.indicators.iter().cloned()),
        )
    }

    /// Healthy result used when no condition is reported
    #[must_use]
    pub fn healthy(&self) -> FactorScore {
        let healthy = &self.config.healthy;
        FactorScore::new(
            FactorKind::Healthy,
            healthy.score,
            healthy.tier,
            healthy.confidence,
            healthy.tier.label(),
        )
        .with_indicators(healthy.indicators.iter().cloned())
    }

    /// Score every condition; never empty, highest score first
    #[must_use]
    pub fn score(&self, features: &ImageFeatures) -> Vec<FactorScore> {
        let mut conditions: Vec<FactorScore> = self
            .config
            .conditions
            .iter()
            .filter_map(|rules| Self::score_condition(rules, features))
            .collect();

        if conditions.is_empty() {
            debug!("No image condition reached its reporting threshold");
            conditions.push(self.healthy());
        }

        // stable: ties keep scoring order
        conditions.sort_by(|a, b| b.score.total_cmp(&a.score));

        for condition in &conditions {
            debug!(
                condition = %condition.kind.family(),
                score = condition.score,
                severity = %condition.severity,
                confidence = condition.confidence,
                "Image condition produced"
            );
        }
        conditions
    }
}
