// ABOUTME: Image condition rule tables: additive feature rules, reporting thresholds, and caps
// ABOUTME: One table per condition plus the healthy fallback emitted when nothing qualifies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Image Condition Rules
//!
//! Each condition accumulates fixed increments whenever a comparison over one
//! image feature holds. Comparisons are strict on both sides.

use crate::severity::{ConfidenceMap, CutBoundary, SeverityBands};
use serde::{Deserialize, Serialize};
use skincast_core::models::{FactorKind, Feature, SeverityTier};

/// Strict comparison against one feature value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Comparison {
    /// `feature > value`
    Above {
        /// Threshold
        value: f64,
    },
    /// `feature < value`
    Below {
        /// Threshold
        value: f64,
    },
    /// `low < feature < high`
    Between {
        /// Exclusive lower bound
        low: f64,
        /// Exclusive upper bound
        high: f64,
    },
}

impl Comparison {
    /// Whether the comparison holds for a feature value
    #[must_use]
    pub fn holds(self, feature_value: f64) -> bool {
        match self {
            Self::Above { value } => feature_value > value,
            Self::Below { value } => feature_value < value,
            Self::Between { low, high } => low < feature_value && feature_value < high,
        }
    }
}

/// One additive rule: add `increment` when `comparison` holds for `feature`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRule {
    /// Feature the rule reads
    pub feature: Feature,
    /// Condition on the feature
    pub comparison: Comparison,
    /// Score added when the condition holds
    pub increment: f64,
}

impl FeatureRule {
    /// Rule firing when the feature exceeds `value`
    #[must_use]
    pub const fn above(feature: Feature, value: f64, increment: f64) -> Self {
        Self {
            feature,
            comparison: Comparison::Above { value },
            increment,
        }
    }

    /// Rule firing when the feature is below `value`
    #[must_use]
    pub const fn below(feature: Feature, value: f64, increment: f64) -> Self {
        Self {
            feature,
            comparison: Comparison::Below { value },
            increment,
        }
    }

    /// Rule firing when the feature lies strictly between `low` and `high`
    #[must_use]
    pub const fn between(feature: Feature, low: f64, high: f64, increment: f64) -> Self {
        Self {
            feature,
            comparison: Comparison::Between { low, high },
            increment,
        }
    }
}

/// Rule table for one image condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRules {
    /// Condition identity
    pub kind: FactorKind,
    /// Additive rules
    pub rules: Vec<FeatureRule>,
    /// Minimum accumulated score for the condition to be reported
    pub report_threshold: f64,
    /// Ceiling of the reported score
    pub cap: f64,
    /// Tier bands over the accumulated score
    pub bands: SeverityBands,
    /// Score-to-confidence map
    pub confidence: ConfidenceMap,
    /// Indicator strings attached to the reported condition
    pub indicators: Vec<String>,
}

impl ConditionRules {
    /// Highest score the rules can accumulate
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.rules.iter().map(|rule| rule.increment).sum()
    }
}

/// Result emitted when no condition clears its reporting threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthyFallbackConfig {
    /// Fixed score
    pub score: f64,
    /// Fixed confidence
    pub confidence: f64,
    /// Fixed tier
    pub tier: SeverityTier,
    /// Indicator strings
    pub indicators: Vec<String>,
}

/// Rule tables for every image condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRulesConfig {
    /// Conditions in scoring order
    pub conditions: Vec<ConditionRules>,
    /// Healthy fallback
    pub healthy: HealthyFallbackConfig,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Bands where scores above `cut` are `upper`, everything else `floor`
fn split_bands(floor: SeverityTier, cut: f64, upper: SeverityTier) -> SeverityBands {
    SeverityBands::new(floor, CutBoundary::Exclusive).cut(cut, upper)
}

fn acne_rules() -> ConditionRules {
    ConditionRules {
        kind: FactorKind::Acne,
        rules: vec![
            FeatureRule::above(Feature::RednessIndex, 20.0, 35.0),
            FeatureRule::above(Feature::TextureVariance, 800.0, 25.0),
            FeatureRule::above(Feature::EdgeDensity, 0.15, 20.0),
            FeatureRule::above(Feature::StdRed, 30.0, 15.0),
        ],
        report_threshold: 40.0,
        cap: 95.0,
        bands: split_bands(SeverityTier::Moderate, 70.0, SeverityTier::High),
        confidence: ConfidenceMap::affine(65.0, 3.0, 92.0),
        indicators: strings(&["Redness", "Texture Irregularity", "Inflammation"]),
    }
}

fn pigmentation_rules() -> ConditionRules {
    ConditionRules {
        kind: FactorKind::Pigmentation,
        rules: vec![
            FeatureRule::above(Feature::StdL, 15.0, 30.0),
            FeatureRule::below(Feature::AvgL, 120.0, 25.0),
            FeatureRule::above(Feature::StdValue, 20.0, 20.0),
            FeatureRule::above(Feature::TextureVariance, 600.0, 15.0),
        ],
        report_threshold: 35.0,
        cap: 90.0,
        bands: split_bands(SeverityTier::Moderate, 65.0, SeverityTier::High),
        confidence: ConfidenceMap::affine(60.0, 2.5, 88.0),
        indicators: strings(&["Uneven Skin Tone", "Dark Spots", "Hyperpigmentation"]),
    }
}

fn sunburn_rules() -> ConditionRules {
    ConditionRules {
        kind: FactorKind::Sunburn,
        rules: vec![
            FeatureRule::above(Feature::RednessIndex, 25.0, 35.0),
            FeatureRule::above(Feature::AvgRed, 160.0, 30.0),
            FeatureRule::above(Feature::AvgA, 140.0, 20.0),
            FeatureRule::above(Feature::Brightness, 140.0, 10.0),
        ],
        report_threshold: 35.0,
        cap: 95.0,
        bands: split_bands(SeverityTier::Moderate, 70.0, SeverityTier::High),
        confidence: ConfidenceMap::affine(70.0, 4.0, 90.0),
        indicators: strings(&["Redness", "Inflammation", "UV Damage"]),
    }
}

fn fungal_rules() -> ConditionRules {
    ConditionRules {
        kind: FactorKind::FungalInfection,
        rules: vec![
            FeatureRule::between(Feature::AvgHue, 15.0, 35.0, 25.0),
            FeatureRule::above(Feature::AvgSaturation, 100.0, 20.0),
            FeatureRule::above(Feature::TextureVariance, 700.0, 20.0),
            FeatureRule::above(Feature::EdgeDensity, 0.12, 15.0),
            FeatureRule::above(Feature::StdHue, 8.0, 10.0),
        ],
        report_threshold: 40.0,
        cap: 85.0,
        bands: split_bands(SeverityTier::Moderate, 65.0, SeverityTier::High),
        confidence: ConfidenceMap::affine(55.0, 2.0, 80.0),
        indicators: strings(&["Discoloration", "Texture Changes", "Patches"]),
    }
}

fn eczema_rules() -> ConditionRules {
    ConditionRules {
        kind: FactorKind::Eczema,
        rules: vec![
            FeatureRule::between(Feature::RednessIndex, 10.0, 25.0, 25.0),
            FeatureRule::above(Feature::TextureVariance, 600.0, 25.0),
            FeatureRule::above(Feature::EdgeDensity, 0.10, 20.0),
            FeatureRule::above(Feature::StdSaturation, 25.0, 15.0),
            FeatureRule::below(Feature::AvgL, 140.0, 10.0),
        ],
        report_threshold: 40.0,
        cap: 88.0,
        bands: split_bands(SeverityTier::Moderate, 70.0, SeverityTier::High),
        confidence: ConfidenceMap::affine(58.0, 2.5, 85.0),
        indicators: strings(&["Dryness", "Redness", "Texture Irregularity", "Inflammation"]),
    }
}

fn dryness_rules() -> ConditionRules {
    ConditionRules {
        kind: FactorKind::Dryness,
        rules: vec![
            FeatureRule::below(Feature::TextureVariance, 500.0, 30.0),
            FeatureRule::below(Feature::AvgSaturation, 60.0, 25.0),
            FeatureRule::below(Feature::EdgeDensity, 0.08, 20.0),
            FeatureRule::between(Feature::Brightness, 100.0, 180.0, 15.0),
            FeatureRule::below(Feature::StdValue, 18.0, 10.0),
        ],
        report_threshold: 35.0,
        cap: 85.0,
        bands: split_bands(SeverityTier::Low, 60.0, SeverityTier::Moderate),
        confidence: ConfidenceMap::affine(60.0, 3.0, 82.0),
        indicators: strings(&["Low Moisture", "Dull Appearance", "Flaky Texture"]),
    }
}

impl Default for HealthyFallbackConfig {
    fn default() -> Self {
        Self {
            score: 20.0,
            confidence: 85.0,
            tier: SeverityTier::Low,
            indicators: strings(&["Clear Skin", "Even Tone", "Good Texture"]),
        }
    }
}

impl Default for ImageRulesConfig {
    fn default() -> Self {
        Self {
            conditions: vec![
                acne_rules(),
                pigmentation_rules(),
                sunburn_rules(),
                fungal_rules(),
                eczema_rules(),
                dryness_rules(),
            ],
            healthy: HealthyFallbackConfig::default(),
        }
    }
}
