// ABOUTME: Configuration module for the analyzer's outer settings
// ABOUTME: Re-exports environment settings and the scoring rule configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Configuration for Skincast
//!
//! - **Environment**: upload policy, `.env` loading, and the optional rules file
//! - **Intelligence**: scoring thresholds live in `skincast_intelligence::config`

/// Environment-driven analyzer settings
pub mod environment;

pub use environment::AnalyzerSettings;
pub use skincast_intelligence::config::{ConfigError, SkinIntelligenceConfig};
