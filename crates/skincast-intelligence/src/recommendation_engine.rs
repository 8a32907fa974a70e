// ABOUTME: Recommendation aggregator merging advice from every factor score into one bundle
// ABOUTME: Deduplicates each list in first-seen order and derives the overall severity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use crate::advice::{self, AdviceBlock};
use indexmap::IndexSet;
use skincast_core::models::{
    FactorScore, ProductCategory, ProductRecommendations, RecommendationBundle, SeverityTier,
};
use tracing::debug;

/// Ordered, duplicate-free list under construction
#[derive(Debug, Default)]
struct AdviceList(IndexSet<String>);

impl AdviceList {
    fn extend<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for item in items {
            if !self.0.contains(item) {
                self.0.insert(item.to_owned());
            }
        }
    }

    fn push(&mut self, item: String) {
        self.0.insert(item);
    }

    fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

#[derive(Debug, Default)]
struct BundleBuilder {
    routine: AdviceList,
    cleanser: AdviceList,
    moisturizer: AdviceList,
    sunscreen: AdviceList,
    treatment: AdviceList,
    other: AdviceList,
    lifestyle: AdviceList,
    warnings: AdviceList,
    priority_actions: AdviceList,
}

impl BundleBuilder {
    fn shelf(&mut self, category: ProductCategory) -> &mut AdviceList {
        match category {
            ProductCategory::Cleanser => &mut self.cleanser,
            ProductCategory::Moisturizer => &mut self.moisturizer,
            ProductCategory::Sunscreen => &mut self.sunscreen,
            ProductCategory::Treatment => &mut self.treatment,
            ProductCategory::Other => &mut self.other,
        }
    }

    fn add_block(&mut self, block: &AdviceBlock) {
        self.routine.extend(block.routine.iter().copied());
        for &(category, product) in block.products {
            self.shelf(category).extend([product]);
        }
        self.lifestyle.extend(block.lifestyle.iter().copied());
        self.warnings.extend(block.warnings.iter().copied());
    }

    fn build(self, overall_severity: SeverityTier) -> RecommendationBundle {
        let products = ProductRecommendations {
            cleanser: self.cleanser.into_vec(),
            moisturizer: self.moisturizer.into_vec(),
            sunscreen: self.sunscreen.into_vec(),
            treatment: self.treatment.into_vec(),
            other: self.other.into_vec(),
        };
        let mut products_list = AdviceList::default();
        products_list.extend(products.iter().map(String::as_str));

        RecommendationBundle {
            skincare_routine: self.routine.into_vec(),
            products,
            products_list: products_list.into_vec(),
            lifestyle_tips: self.lifestyle.into_vec(),
            warnings: self.warnings.into_vec(),
            priority_actions: self.priority_actions.into_vec(),
            overall_severity,
        }
    }
}

/// Merges the advice of every factor score of a request into one bundle.
///
/// Factor order is preserved: each list keeps the first occurrence of an
/// entry and drops later duplicates. General lifestyle tips and the advice
/// disclaimer are appended only when at least one factor contributed, so an
/// empty factor list yields an empty bundle at low severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Create the aggregator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Aggregate factor scores into a recommendation bundle
    #[must_use]
    pub fn aggregate(&self, factors: &[FactorScore]) -> RecommendationBundle {
        let mut builder = BundleBuilder::default();

        for factor in factors {
            for block in advice::blocks_for(factor) {
                builder.add_block(block);
            }
            if let Some(action) = advice::priority_action(factor) {
                builder.priority_actions.push(action);
            }
        }

        if !factors.is_empty() {
            builder
                .lifestyle
                .extend(advice::GENERAL_LIFESTYLE_TIPS.iter().copied());
            builder.warnings.extend([advice::DISCLAIMER]);
        }

        let overall = SeverityTier::max_of(factors.iter().map(|factor| factor.severity));
        let bundle = builder.build(overall);

        debug!(
            factors = factors.len(),
            overall_severity = %bundle.overall_severity,
            priority_actions = bundle.priority_actions.len(),
            products = bundle.products_list.len(),
            "Aggregated recommendations"
        );
        bundle
    }
}
