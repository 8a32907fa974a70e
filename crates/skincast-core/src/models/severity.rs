// ABOUTME: Ordinal severity tiers shared by every risk factor
// ABOUTME: Total ordering low < moderate < high < extreme drives overall severity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal risk level for a factor or for a whole report.
///
/// Variant order is significant: the derived `Ord` is the aggregation order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// No meaningful risk
    #[default]
    Low,
    /// Some precaution advised
    Moderate,
    /// Protective action needed today
    High,
    /// Urgent protective action needed
    Extreme,
}

impl SeverityTier {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }

    /// Capitalized display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }

    /// Whether this tier demands a priority action
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Extreme)
    }

    /// Highest tier of a set, or `Low` when the set is empty
    pub fn max_of<I>(tiers: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        tiers.into_iter().max().unwrap_or_default()
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_totally_ordered() {
        assert!(SeverityTier::Low < SeverityTier::Moderate);
        assert!(SeverityTier::Moderate < SeverityTier::High);
        assert!(SeverityTier::High < SeverityTier::Extreme);
    }

    #[test]
    fn test_max_of_empty_is_low() {
        assert_eq!(SeverityTier::max_of([]), SeverityTier::Low);
        assert_eq!(
            SeverityTier::max_of([SeverityTier::Moderate, SeverityTier::Extreme, SeverityTier::Low]),
            SeverityTier::Extreme
        );
    }
}
