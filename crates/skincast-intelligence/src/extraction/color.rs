// ABOUTME: 8-bit color space conversions for skin photo pixels (HSV, CIE Lab, grayscale)
// ABOUTME: Channel ranges follow the conventions the image condition thresholds are calibrated on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Per-pixel color conversions.
//!
//! - HSV: hue 0-179 (degrees halved), saturation and value 0-255
//! - Lab: D65 white point, sRGB gamma; L scaled to 0-255, a and b offset by 128
//! - Gray: `0.299 R + 0.587 G + 0.114 B`
//!
//! Every channel is rounded to an integer before statistics are taken.
//! Conversions go through `palette`; only the 8-bit scaling is local.

use palette::encoding::Srgb as SrgbEncoding;
use palette::white_point::D65;
use palette::{Hsv, IntoColor, Lab, LinSrgb, Srgb};

/// Lab offset applied to the a and b channels
const LAB_AB_OFFSET: f64 = 128.0;

fn clamp_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn normalized(r: u8, g: u8, b: u8) -> Srgb<f64> {
    Srgb::new(r, g, b).into_format()
}

/// Grayscale intensity
#[must_use]
pub fn gray(r: u8, g: u8, b: u8) -> u8 {
    clamp_to_u8(0.114_f64.mul_add(
        f64::from(b),
        0.299_f64.mul_add(f64::from(r), 0.587 * f64::from(g)),
    ))
}

/// Hue (0-179), saturation (0-255), value (0-255)
#[must_use]
pub fn hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let hsv: Hsv<SrgbEncoding, f64> = normalized(r, g, b).into_color();
    // 360 degrees wrap back to hue 0 after halving and rounding
    let hue = (hsv.hue.into_positive_degrees() / 2.0).round() as u16 % 180;

    [
        hue as u8,
        clamp_to_u8(hsv.saturation * 255.0),
        clamp_to_u8(hsv.value * 255.0),
    ]
}

/// Lightness (0-255), a (offset 128), b (offset 128)
#[must_use]
pub fn lab(r: u8, g: u8, b: u8) -> [u8; 3] {
    let linear: LinSrgb<f64> = normalized(r, g, b).into_linear();
    let lab: Lab<D65, f64> = linear.into_color();

    [
        clamp_to_u8(lab.l * 255.0 / 100.0),
        clamp_to_u8(lab.a + LAB_AB_OFFSET),
        clamp_to_u8(lab.b + LAB_AB_OFFSET),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_weights() {
        assert_eq!(gray(0, 0, 0), 0);
        assert_eq!(gray(255, 255, 255), 255);
        assert_eq!(gray(255, 0, 0), 76);
        assert_eq!(gray(0, 255, 0), 150);
        assert_eq!(gray(0, 0, 255), 29);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv(255, 0, 0), [0, 255, 255]);
        assert_eq!(hsv(0, 255, 0), [60, 255, 255]);
        assert_eq!(hsv(0, 0, 255), [120, 255, 255]);
        assert_eq!(hsv(128, 128, 128), [0, 0, 128]);
        assert_eq!(hsv(0, 0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_hsv_hue_never_reaches_180() {
        // Hue just below 360 degrees rounds onto the wrap point
        let [hue, _, _] = hsv(255, 0, 1);
        assert!(hue < 180);
    }

    #[test]
    fn test_lab_neutrals_sit_on_offset() {
        assert_eq!(lab(255, 255, 255), [255, 128, 128]);
        assert_eq!(lab(0, 0, 0), [0, 128, 128]);
        let [_, a, b] = lab(128, 128, 128);
        assert_eq!((a, b), (128, 128));
    }

    #[test]
    fn test_lab_red_is_positive_a() {
        let [lightness, a, b] = lab(255, 0, 0);
        // L* 53.2 scaled, a* 80.1, b* 67.2
        assert!((135..=137).contains(&lightness));
        assert!((206..=210).contains(&a));
        assert!((193..=197).contains(&b));
    }
}
