// ABOUTME: Feature extractor turning encoded photo bytes into scalar image features
// ABOUTME: Decodes, optionally downscales, and summarizes color, texture, and edge statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Feature Extractor
//!
//! Pure function over pixel data: per-channel means and population standard
//! deviations in RGB, HSV, and Lab, grayscale variance, edge density, the
//! redness index, and overall brightness.

/// 8-bit color space conversions
pub mod color;
/// Canny edge detector
pub mod edges;

use crate::config::intelligence::FeatureExtractionConfig;
use edges::GrayPlane;
use image::imageops::FilterType;
use image::RgbImage;
use rayon::prelude::*;
use skincast_core::errors::AnalysisError;
use skincast_core::models::ImageFeatures;
use tracing::debug;

/// Channels summarized per pixel, in this order
const CHANNELS: usize = 10;
const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;
const HUE: usize = 3;
const SATURATION: usize = 4;
const VALUE: usize = 5;
const LIGHTNESS: usize = 6;
const LAB_A: usize = 7;
const LAB_B: usize = 8;
const GRAY: usize = 9;

/// Decode encoded bytes (PNG or JPEG) into an RGB pixel grid
///
/// # Errors
///
/// Returns `AnalysisError::ImageDecode` if the bytes are not a decodable image
/// or the image has no pixels
pub fn decode_image(bytes: &[u8], config: &FeatureExtractionConfig) -> Result<RgbImage, AnalysisError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| AnalysisError::ImageDecode(e.to_string()))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(AnalysisError::ImageDecode("image has no pixels".to_owned()));
    }

    let decoded = match config.max_dimension {
        Some(max) if decoded.width() > max || decoded.height() > max => {
            debug!(
                width = decoded.width(),
                height = decoded.height(),
                max_dimension = max,
                "Downscaling image before feature extraction"
            );
            decoded.resize(max, max, FilterType::Triangle)
        }
        _ => decoded,
    };

    Ok(decoded.to_rgb8())
}

/// Integer sums of every channel and its square
#[derive(Debug, Clone, Copy)]
struct ChannelSums {
    sum: [u64; CHANNELS],
    sum_sq: [u64; CHANNELS],
}

impl Default for ChannelSums {
    fn default() -> Self {
        Self {
            sum: [0; CHANNELS],
            sum_sq: [0; CHANNELS],
        }
    }
}

impl ChannelSums {
    fn add_pixel(mut self, rgb: &[u8]) -> Self {
        let channels = pixel_channels(rgb[0], rgb[1], rgb[2]);
        for (index, &value) in channels.iter().enumerate() {
            let value = u64::from(value);
            self.sum[index] += value;
            self.sum_sq[index] += value * value;
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for index in 0..CHANNELS {
            self.sum[index] += other.sum[index];
            self.sum_sq[index] += other.sum_sq[index];
        }
        self
    }

    fn mean(&self, channel: usize, count: u64) -> f64 {
        self.sum[channel] as f64 / count as f64
    }

    /// Population variance computed exactly in integers
    fn variance(&self, channel: usize, count: u64) -> f64 {
        let n = u128::from(count);
        let sum = u128::from(self.sum[channel]);
        let numerator = n * u128::from(self.sum_sq[channel]) - sum * sum;
        numerator as f64 / (n * n) as f64
    }

    fn std_dev(&self, channel: usize, count: u64) -> f64 {
        self.variance(channel, count).sqrt()
    }
}

fn pixel_channels(r: u8, g: u8, b: u8) -> [u8; CHANNELS] {
    let [hue, saturation, value] = color::hsv(r, g, b);
    let [lightness, lab_a, lab_b] = color::lab(r, g, b);
    [
        r,
        g,
        b,
        hue,
        saturation,
        value,
        lightness,
        lab_a,
        lab_b,
        color::gray(r, g, b),
    ]
}

/// Compute image features from a decoded pixel grid
///
/// # Errors
///
/// Returns `AnalysisError::ImageDecode` if the grid has no pixels
pub fn extract_features(
    image: &RgbImage,
    config: &FeatureExtractionConfig,
) -> Result<ImageFeatures, AnalysisError> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let pixel_count = width * height;
    if pixel_count == 0 {
        return Err(AnalysisError::ImageDecode("image has no pixels".to_owned()));
    }
    let raw = image.as_raw();

    let parallel = pixel_count >= config.parallel_min_pixels;
    let sums = if parallel {
        raw.par_chunks_exact(3)
            .fold(ChannelSums::default, ChannelSums::add_pixel)
            .reduce(ChannelSums::default, ChannelSums::merge)
    } else {
        raw.chunks_exact(3)
            .fold(ChannelSums::default(), ChannelSums::add_pixel)
    };

    let gray: Vec<u8> = if parallel {
        raw.par_chunks_exact(3)
            .map(|rgb| color::gray(rgb[0], rgb[1], rgb[2]))
            .collect()
    } else {
        raw.chunks_exact(3)
            .map(|rgb| color::gray(rgb[0], rgb[1], rgb[2]))
            .collect()
    };
    let plane = GrayPlane::new(&gray, width, height)
        .ok_or_else(|| AnalysisError::ImageDecode("pixel buffer is truncated".to_owned()))?;
    let edge_density = edges::edge_density(
        &plane,
        config.edge_low_threshold,
        config.edge_high_threshold,
    );

    let count = pixel_count as u64;
    let avg_red = sums.mean(RED, count);
    let avg_green = sums.mean(GREEN, count);
    let avg_blue = sums.mean(BLUE, count);

    let features = ImageFeatures {
        avg_red,
        avg_green,
        avg_blue,
        std_red: sums.std_dev(RED, count),
        std_green: sums.std_dev(GREEN, count),
        std_blue: sums.std_dev(BLUE, count),
        avg_hue: sums.mean(HUE, count),
        avg_saturation: sums.mean(SATURATION, count),
        avg_value: sums.mean(VALUE, count),
        std_hue: sums.std_dev(HUE, count),
        std_saturation: sums.std_dev(SATURATION, count),
        std_value: sums.std_dev(VALUE, count),
        avg_l: sums.mean(LIGHTNESS, count),
        std_l: sums.std_dev(LIGHTNESS, count),
        avg_a: sums.mean(LAB_A, count),
        avg_b: sums.mean(LAB_B, count),
        redness_index: avg_red - (avg_green + avg_blue) / 2.0,
        texture_variance: sums.variance(GRAY, count),
        edge_density,
        brightness: (avg_red + avg_green + avg_blue) / 3.0,
    };

    debug!(
        width,
        height,
        parallel,
        redness_index = features.redness_index,
        texture_variance = features.texture_variance,
        edge_density = features.edge_density,
        "Extracted image features"
    );
    Ok(features)
}

/// Decode bytes and extract features in one step
///
/// # Errors
///
/// Returns `AnalysisError::ImageDecode` if the bytes cannot be decoded
pub fn features_from_bytes(
    bytes: &[u8],
    config: &FeatureExtractionConfig,
) -> Result<ImageFeatures, AnalysisError> {
    let image = decode_image(bytes, config)?;
    extract_features(&image, config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_solid_color_has_zero_spread() {
        let image = RgbImage::from_pixel(12, 9, Rgb([200, 120, 100]));
        let features = extract_features(&image, &FeatureExtractionConfig::default()).unwrap();
        assert!((features.avg_red - 200.0).abs() < 1e-9);
        assert!(features.std_red.abs() < 1e-9);
        assert!(features.std_l.abs() < 1e-9);
        assert!(features.texture_variance.abs() < 1e-9);
        assert!(features.edge_density.abs() < 1e-9);
        assert!((features.redness_index - 90.0).abs() < 1e-9);
        assert!((features.brightness - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_and_serial_sums_agree() {
        let image = RgbImage::from_fn(40, 30, |x, y| Rgb([(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8]));
        let serial = FeatureExtractionConfig {
            parallel_min_pixels: usize::MAX,
            ..FeatureExtractionConfig::default()
        };
        let parallel = FeatureExtractionConfig {
            parallel_min_pixels: 0,
            ..FeatureExtractionConfig::default()
        };
        assert_eq!(
            extract_features(&image, &serial).unwrap(),
            extract_features(&image, &parallel).unwrap()
        );
    }

    #[test]
    fn test_two_tone_variance_is_population_variance() {
        // Half black, half white: gray mean 127.5, population variance 127.5^2
        let image = RgbImage::from_fn(10, 4, |x, _| {
            if x < 5 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let features = extract_features(&image, &FeatureExtractionConfig::default()).unwrap();
        assert!((features.texture_variance - 127.5 * 127.5).abs() < 1e-9);
        assert!((features.std_red - 127.5).abs() < 1e-9);
    }

    #[test]
    fn test_garbage_bytes_are_a_decode_error() {
        let result = decode_image(b"not an image", &FeatureExtractionConfig::default());
        assert!(matches!(result, Err(AnalysisError::ImageDecode(_))));
    }
}
