// ABOUTME: Severity classifier mapping a factor's measurement or score to an ordinal tier
// ABOUTME: Each factor supplies its own cut points; confidence maps are affine in the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Severity Classifier
//!
//! Cut points are factor-specific: UV bands on a 0-11 index, wind on m/s,
//! image conditions on their accumulated score. A band table is evaluated from
//! the highest cut down, so the first cut reached decides the tier.

use serde::{Deserialize, Serialize};
use skincast_core::models::SeverityTier;

/// Whether a value equal to a cut point reaches it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutBoundary {
    /// `value >= cut`
    #[default]
    Inclusive,
    /// `value > cut`
    Exclusive,
}

/// One cut point of a band table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandCut {
    /// Value at which the tier starts
    pub at: f64,
    /// Tier assigned from this cut upwards
    pub tier: SeverityTier,
}

/// Ascending cut points over one factor's own domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityBands {
    /// Tier below the first cut
    pub floor: SeverityTier,
    /// Cut points in ascending order
    #[serde(default)]
    pub cuts: Vec<BandCut>,
    /// Boundary semantics shared by every cut
    #[serde(default)]
    pub boundary: CutBoundary,
}

impl SeverityBands {
    /// Empty band table with the given floor tier
    #[must_use]
    pub const fn new(floor: SeverityTier, boundary: CutBoundary) -> Self {
        Self {
            floor,
            cuts: Vec::new(),
            boundary,
        }
    }

    /// A table that always yields one tier
    #[must_use]
    pub const fn fixed(tier: SeverityTier) -> Self {
        Self::new(tier, CutBoundary::Inclusive)
    }

    /// Append a cut point; cuts must be added in ascending order
    #[must_use]
    pub fn cut(mut self, at: f64, tier: SeverityTier) -> Self {
        self.cuts.push(BandCut { at, tier });
        self
    }

    /// Classify a value
    #[must_use]
    pub fn classify(&self, value: f64) -> SeverityTier {
        self.cuts
            .iter()
            .rev()
            .find(|cut| self.reaches(value, cut.at))
            .map_or(self.floor, |cut| cut.tier)
    }

    fn reaches(&self, value: f64, at: f64) -> bool {
        match self.boundary {
            CutBoundary::Inclusive => value >= at,
            CutBoundary::Exclusive => value > at,
        }
    }

    /// Whether cuts ascend strictly and tiers never decrease
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        let mut previous_at = f64::NEG_INFINITY;
        let mut previous_tier = self.floor;
        for cut in &self.cuts {
            if !cut.at.is_finite() || cut.at <= previous_at || cut.tier < previous_tier {
                return false;
            }
            previous_at = cut.at;
            previous_tier = cut.tier;
        }
        true
    }
}

/// Affine score-to-confidence map: `min(cap, base + score / divisor)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMap {
    /// Confidence at score zero
    pub base: f64,
    /// Score points per confidence point; `None` keeps confidence at `base`
    #[serde(default)]
    pub divisor: Option<f64>,
    /// Upper bound
    pub cap: f64,
}

impl ConfidenceMap {
    /// Confidence growing with the score
    #[must_use]
    pub const fn affine(base: f64, divisor: f64, cap: f64) -> Self {
        Self {
            base,
            divisor: Some(divisor),
            cap,
        }
    }

    /// Confidence independent of the score
    #[must_use]
    pub const fn fixed(value: f64) -> Self {
        Self {
            base: value,
            divisor: None,
            cap: value,
        }
    }

    /// Confidence for a score
    #[must_use]
    pub fn confidence(&self, score: f64) -> f64 {
        let raw = self
            .divisor
            .map_or(self.base, |divisor| self.base + score / divisor);
        raw.min(self.cap)
    }

    /// Whether the map stays within 0-100 with a positive divisor
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=100.0).contains(&self.base)
            && (0.0..=100.0).contains(&self.cap)
            && self.divisor.is_none_or(|divisor| divisor > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uv_bands() -> SeverityBands {
        SeverityBands::new(SeverityTier::Low, CutBoundary::Inclusive)
            .cut(3.0, SeverityTier::Moderate)
            .cut(6.0, SeverityTier::High)
            .cut(8.0, SeverityTier::Extreme)
    }

    #[test]
    fn test_inclusive_bands_reach_tier_at_cut() {
        let bands = uv_bands();
        assert_eq!(bands.classify(2.9), SeverityTier::Low);
        assert_eq!(bands.classify(3.0), SeverityTier::Moderate);
        assert_eq!(bands.classify(6.0), SeverityTier::High);
        assert_eq!(bands.classify(7.99), SeverityTier::High);
        assert_eq!(bands.classify(8.0), SeverityTier::Extreme);
        assert_eq!(bands.classify(14.0), SeverityTier::Extreme);
    }

    #[test]
    fn test_exclusive_bands_need_strictly_greater() {
        let bands = SeverityBands::new(SeverityTier::Moderate, CutBoundary::Exclusive)
            .cut(70.0, SeverityTier::High);
        assert_eq!(bands.classify(70.0), SeverityTier::Moderate);
        assert_eq!(bands.classify(70.5), SeverityTier::High);
    }

    #[test]
    fn test_fixed_bands() {
        let bands = SeverityBands::fixed(SeverityTier::High);
        assert_eq!(bands.classify(-40.0), SeverityTier::High);
        assert_eq!(bands.classify(40.0), SeverityTier::High);
        assert!(bands.is_ordered());
    }

    #[test]
    fn test_ordering_check() {
        assert!(uv_bands().is_ordered());
        let unordered = SeverityBands::new(SeverityTier::Low, CutBoundary::Inclusive)
            .cut(6.0, SeverityTier::High)
            .cut(3.0, SeverityTier::Moderate);
        assert!(!unordered.is_ordered());
        let below_floor = SeverityBands::new(SeverityTier::High, CutBoundary::Inclusive)
            .cut(6.0, SeverityTier::Moderate);
        assert!(!below_floor.is_ordered());
    }

    #[test]
    fn test_confidence_maps() {
        let acne = ConfidenceMap::affine(65.0, 3.0, 92.0);
        assert!((acne.confidence(60.0) - 85.0).abs() < 1e-9);
        assert!((acne.confidence(95.0) - 92.0).abs() < 1e-9);

        let fixed = ConfidenceMap::fixed(75.0);
        assert!((fixed.confidence(0.0) - 75.0).abs() < 1e-9);
        assert!((fixed.confidence(100.0) - 75.0).abs() < 1e-9);
        assert!(fixed.is_valid());

        assert!(!ConfidenceMap::affine(60.0, 0.0, 90.0).is_valid());
    }
}
