// ABOUTME: Skin risk intelligence engine: feature extraction, factor scoring, recommendations
// ABOUTME: Pure computation crate with no I/O beyond decoding in-memory image bytes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

#![deny(unsafe_code)]

//! # Skincast Intelligence
//!
//! Turns a weather reading and an optional skin photo into scored risk
//! factors and a deduplicated recommendation bundle.
//!
//! ## Modules
//!
//! - **config**: Scoring thresholds, severity bands, and extraction settings with env overrides
//! - **severity**: Threshold band classification and score-to-confidence maps
//! - **extraction**: Image decoding and scalar feature extraction
//! - **scoring**: Weather factor scorers and the image condition scorer
//! - **advice**: Literal advice blocks per factor
//! - **`recommendation_engine`**: Aggregation of advice into one bundle

/// Scoring and extraction configuration
pub mod config;

/// Severity bands and confidence maps
pub mod severity;

/// Image decoding and feature extraction
pub mod extraction;

/// Weather and image factor scorers
pub mod scoring;

/// Advice content keyed by factor
pub mod advice;

/// Recommendation aggregation
pub mod recommendation_engine;

pub use config::{ConfigError, SkinIntelligenceConfig};
pub use extraction::{extract_features, features_from_bytes};
pub use recommendation_engine::RecommendationEngine;
pub use scoring::{ImageConditionScorer, WeatherFactorScorer};
