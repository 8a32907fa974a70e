// ABOUTME: Shared fixtures for integration tests: readings, synthetic photos, factor scores
// ABOUTME: Photos are generated in memory and encoded to PNG so the decode path is exercised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test fixtures for `skincast`

use image::{ImageFormat, Rgb, RgbImage};
use skincast::models::{AqiCategory, FactorKind, FactorScore, SeverityTier, WeatherReading};
use std::io::Cursor;

/// Hot, humid, high-UV, heavily polluted, clear day
pub fn hot_polluted_reading() -> WeatherReading {
    WeatherReading::new(32.0, 75.0)
        .with_uv(9.0)
        .with_aqi(AqiCategory::from_raw_index(160))
        .with_wind(5.0)
        .with_condition("clear")
}

/// Mild day that only yields the always-present UV, temperature, and air quality factors
pub fn mild_reading() -> WeatherReading {
    WeatherReading::new(22.0, 40.0)
        .with_uv(2.0)
        .with_aqi(AqiCategory::Good)
        .with_wind(3.0)
        .with_condition("clouds")
}

/// Encode an RGB image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

/// Encode an RGB image as JPEG bytes
pub fn encode_jpeg(image: &RgbImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Jpeg).unwrap();
    buffer.into_inner()
}

/// Single-color image
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(rgb))
}

/// Left half one color, right half another
pub fn split_image(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    })
}

/// Flushed skin tone (200, 120, 100): sunburn 85 (high) and dryness 75 (moderate)
pub fn sunburned_png() -> Vec<u8> {
    encode_png(&solid_image(32, 24, [200, 120, 100]))
}

/// Bytes that are not an image
pub fn garbage_bytes() -> Vec<u8> {
    b"definitely not a png".to_vec()
}

/// Factor score with a fixed score, confidence, and reading
pub fn factor(kind: FactorKind, severity: SeverityTier) -> FactorScore {
    FactorScore::new(kind, 60.0, severity, 75.0, severity.label()).with_reading(20.0)
}

/// Whether two floats agree to within rounding noise
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
