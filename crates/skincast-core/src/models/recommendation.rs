// ABOUTME: Recommendation bundle aggregated from every produced factor score
// ABOUTME: Holds routine steps, categorized products, tips, warnings, and overall severity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use super::SeverityTier;
use serde::{Deserialize, Serialize};

/// Product shelf a recommendation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Face washes and cleansing steps
    Cleanser,
    /// Creams, lotions, oils
    Moisturizer,
    /// Sun protection
    Sunscreen,
    /// Serums and targeted treatments
    Treatment,
    /// Accessories and everything else
    Other,
}

impl ProductCategory {
    /// Categories in display order
    pub const ALL: [Self; 5] = [
        Self::Cleanser,
        Self::Moisturizer,
        Self::Sunscreen,
        Self::Treatment,
        Self::Other,
    ];
}

/// Product recommendations grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecommendations {
    /// Cleansers
    pub cleanser: Vec<String>,
    /// Moisturizers
    pub moisturizer: Vec<String>,
    /// Sunscreens
    pub sunscreen: Vec<String>,
    /// Treatments
    pub treatment: Vec<String>,
    /// Other products
    pub other: Vec<String>,
}

impl ProductRecommendations {
    /// Products in one category
    #[must_use]
    pub fn category(&self, category: ProductCategory) -> &[String] {
        match category {
            ProductCategory::Cleanser => &self.cleanser,
            ProductCategory::Moisturizer => &self.moisturizer,
            ProductCategory::Sunscreen => &self.sunscreen,
            ProductCategory::Treatment => &self.treatment,
            ProductCategory::Other => &self.other,
        }
    }

    /// Mutable products in one category
    pub fn category_mut(&mut self, category: ProductCategory) -> &mut Vec<String> {
        match category {
            ProductCategory::Cleanser => &mut self.cleanser,
            ProductCategory::Moisturizer => &mut self.moisturizer,
            ProductCategory::Sunscreen => &mut self.sunscreen,
            ProductCategory::Treatment => &mut self.treatment,
            ProductCategory::Other => &mut self.other,
        }
    }

    /// All products across categories, in category display order
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        ProductCategory::ALL
            .into_iter()
            .flat_map(move |category| self.category(category).iter())
    }

    /// Whether no category holds a product
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ProductCategory::ALL
            .into_iter()
            .all(|category| self.category(category).is_empty())
    }
}

/// Deduplicated advice built from all factor scores of one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    /// Ordered skincare routine steps
    pub skincare_routine: Vec<String>,
    /// Products by category
    pub products: ProductRecommendations,
    /// Every product across categories, deduplicated
    pub products_list: Vec<String>,
    /// Lifestyle tips
    pub lifestyle_tips: Vec<String>,
    /// Warnings
    pub warnings: Vec<String>,
    /// Actions surfaced for high-severity factors and detected conditions
    pub priority_actions: Vec<String>,
    /// Highest severity tier across contributing factors
    pub overall_severity: SeverityTier,
}

impl RecommendationBundle {
    /// Whether the bundle carries no advice at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skincare_routine.is_empty()
            && self.products.is_empty()
            && self.lifestyle_tips.is_empty()
            && self.warnings.is_empty()
            && self.priority_actions.is_empty()
    }
}
