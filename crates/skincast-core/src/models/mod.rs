// ABOUTME: Core data models for the Skincast skin-risk engine
// ABOUTME: Re-exports readings, features, factor scores, bundles, and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! # Data Models
//!
//! Explicit, typed records for every value that crosses a component boundary.
//!
//! ## Core Models
//!
//! - `WeatherReading`: immutable snapshot of ambient conditions for one request
//! - `ImageFeatures`: scalar features derived once from a decoded photo
//! - `FactorScore`: scored and classified output of one factor scorer
//! - `RecommendationBundle`: deduplicated advice aggregated from all factor scores
//! - `Report`: final response object handed to the request handling layer

mod factor;
mod features;
mod recommendation;
mod report;
mod severity;
mod weather;

pub use factor::{FactorKind, FactorScore};
pub use features::{Feature, ImageFeatures};
pub use recommendation::{ProductCategory, ProductRecommendations, RecommendationBundle};
pub use report::{AnalysisRequest, Report, SkinAnalysis, SkinAnalysisOutcome, WeatherSummary};
pub use severity::SeverityTier;
pub use weather::{uv_risk_label, AqiCategory, WeatherReading};
