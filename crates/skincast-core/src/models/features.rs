// ABOUTME: Scalar image features derived once from a decoded skin photo
// ABOUTME: Named feature keys let rule tables reference features without string lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of one scalar image feature, used by rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Mean of the red channel (0-255)
    AvgRed,
    /// Mean of the green channel (0-255)
    AvgGreen,
    /// Mean of the blue channel (0-255)
    AvgBlue,
    /// Standard deviation of the red channel
    StdRed,
    /// Standard deviation of the green channel
    StdGreen,
    /// Standard deviation of the blue channel
    StdBlue,
    /// Mean hue (0-180)
    AvgHue,
    /// Mean saturation (0-255)
    AvgSaturation,
    /// Mean value (0-255)
    AvgValue,
    /// Standard deviation of hue
    StdHue,
    /// Standard deviation of saturation
    StdSaturation,
    /// Standard deviation of value
    StdValue,
    /// Mean L* lightness scaled to 0-255
    AvgL,
    /// Standard deviation of scaled lightness
    StdL,
    /// Mean a* offset by 128
    AvgA,
    /// Mean b* offset by 128
    AvgB,
    /// `avg_red - (avg_green + avg_blue) / 2`
    RednessIndex,
    /// Grayscale intensity variance
    TextureVariance,
    /// Fraction of pixels marked as edges (0-1)
    EdgeDensity,
    /// Mean of the three RGB channel means
    Brightness,
}

impl Feature {
    /// Snake-case feature name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AvgRed => "avg_red",
            Self::AvgGreen => "avg_green",
            Self::AvgBlue => "avg_blue",
            Self::StdRed => "std_red",
            Self::StdGreen => "std_green",
            Self::StdBlue => "std_blue",
            Self::AvgHue => "avg_hue",
            Self::AvgSaturation => "avg_saturation",
            Self::AvgValue => "avg_value",
            Self::StdHue => "std_hue",
            Self::StdSaturation => "std_saturation",
            Self::StdValue => "std_value",
            Self::AvgL => "avg_l",
            Self::StdL => "std_l",
            Self::AvgA => "avg_a",
            Self::AvgB => "avg_b",
            Self::RednessIndex => "redness_index",
            Self::TextureVariance => "texture_variance",
            Self::EdgeDensity => "edge_density",
            Self::Brightness => "brightness",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar features of one decoded image.
///
/// Color-space channels use 8-bit conventions: hue 0-180, saturation and
/// value 0-255, lightness scaled to 0-255, a/b offset by 128.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFeatures {
    /// Mean of the red channel
    pub avg_red: f64,
    /// Mean of the green channel
    pub avg_green: f64,
    /// Mean of the blue channel
    pub avg_blue: f64,
    /// Standard deviation of the red channel
    pub std_red: f64,
    /// Standard deviation of the green channel
    pub std_green: f64,
    /// Standard deviation of the blue channel
    pub std_blue: f64,
    /// Mean hue
    pub avg_hue: f64,
    /// Mean saturation
    pub avg_saturation: f64,
    /// Mean value
    pub avg_value: f64,
    /// Standard deviation of hue
    pub std_hue: f64,
    /// Standard deviation of saturation
    pub std_saturation: f64,
    /// Standard deviation of value
    pub std_value: f64,
    /// Mean lightness
    pub avg_l: f64,
    /// Standard deviation of lightness
    pub std_l: f64,
    /// Mean a* (red-green)
    pub avg_a: f64,
    /// Mean b* (yellow-blue)
    pub avg_b: f64,
    /// Red dominance over the green/blue average
    pub redness_index: f64,
    /// Grayscale intensity variance
    pub texture_variance: f64,
    /// Edge pixel fraction
    pub edge_density: f64,
    /// Mean of the RGB channel means
    pub brightness: f64,
}

impl ImageFeatures {
    /// Look up a feature by name
    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::AvgRed => self.avg_red,
            Feature::AvgGreen => self.avg_green,
            Feature::AvgBlue => self.avg_blue,
            Feature::StdRed => self.std_red,
            Feature::StdGreen => self.std_green,
            Feature::StdBlue => self.std_blue,
            Feature::AvgHue => self.avg_hue,
            Feature::AvgSaturation => self.avg_saturation,
            Feature::AvgValue => self.avg_value,
            Feature::StdHue => self.std_hue,
            Feature::StdSaturation => self.std_saturation,
            Feature::StdValue => self.std_value,
            Feature::AvgL => self.avg_l,
            Feature::StdL => self.std_l,
            Feature::AvgA => self.avg_a,
            Feature::AvgB => self.avg_b,
            Feature::RednessIndex => self.redness_index,
            Feature::TextureVariance => self.texture_variance,
            Feature::EdgeDensity => self.edge_density,
            Feature::Brightness => self.brightness,
        }
    }
}
