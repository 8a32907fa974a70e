// ABOUTME: Feature extraction configuration for decoded skin photos
// ABOUTME: Controls optional downscaling, edge detector thresholds, and parallel summation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use serde::{Deserialize, Serialize};

/// Feature extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureExtractionConfig {
    /// Longest side allowed before the image is downscaled; `None` keeps native resolution.
    ///
    /// Texture variance and edge density are scale-sensitive and the image
    /// rules are calibrated at native resolution.
    #[serde(default)]
    pub max_dimension: Option<u32>,
    /// Hysteresis low threshold of the edge detector
    pub edge_low_threshold: f64,
    /// Hysteresis high threshold of the edge detector
    pub edge_high_threshold: f64,
    /// Pixel count above which channel statistics are summed in parallel
    pub parallel_min_pixels: usize,
}

impl Default for FeatureExtractionConfig {
    fn default() -> Self {
        Self {
            max_dimension: None,
            edge_low_threshold: 50.0,
            edge_high_threshold: 150.0,
            parallel_min_pixels: 65_536,
        }
    }
}
