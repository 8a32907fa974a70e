// ABOUTME: Configuration module for skincast-intelligence crate
// ABOUTME: Re-exports the rule configuration types consumed by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

/// Rule configuration (weather risk, image rules, feature extraction)
pub mod intelligence;

pub use intelligence::{ConfigError, SkinIntelligenceConfig};
