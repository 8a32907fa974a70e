// ABOUTME: Main library entry point for the Skincast skin-risk analyzer
// ABOUTME: Assembles weather and photo analyses into reports with deduplicated advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

#![deny(unsafe_code)]

//! # Skincast
//!
//! Estimates skin-health risk from ambient weather, UV, air quality, and an
//! optional face photo, then emits categorized advice.
//!
//! Scoring is fixed-threshold rule accumulation: every factor (UV, humidity,
//! temperature, air quality, wind, precipitation, and the image conditions)
//! is scored independently, classified into a severity tier, and merged into
//! one recommendation bundle whose overall severity is the highest factor tier.
//!
//! ## Architecture
//!
//! - **skincast-core**: data models, error taxonomy, domain constants
//! - **skincast-intelligence**: feature extraction, factor scorers, aggregation
//! - **analyzer**: report assembly over already-resolved inputs
//! - **upload**: photo upload policy
//! - **config**: environment settings and scoring rules
//! - **logging**: structured logging setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use skincast::analyzer::SkinAnalyzer;
//! use skincast::models::{AnalysisRequest, AqiCategory, WeatherReading};
//!
//! let analyzer = SkinAnalyzer::default();
//! let reading = WeatherReading::new(32.0, 75.0)
//!     .with_uv(9.0)
//!     .with_aqi(AqiCategory::from_raw_index(160));
//! let report = analyzer.assemble(&AnalysisRequest::weather_only(reading))?;
//! println!("overall severity: {}", report.overall_severity());
//! # Ok::<(), skincast::errors::AppError>(())
//! ```

/// Report assembly
pub mod analyzer;

/// Environment settings and scoring rules
pub mod config;

/// Structured logging setup
pub mod logging;

/// Photo upload policy
pub mod upload;

pub use skincast_core::{constants, errors, models};

pub use analyzer::SkinAnalyzer;
pub use config::AnalyzerSettings;
pub use upload::ImageUpload;
