// ABOUTME: Fixed-threshold Canny edge detector over a grayscale plane
// ABOUTME: Sobel gradients, non-maximum suppression, and hysteresis yield the edge pixel count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Canny edge detection with a 3x3 Sobel aperture and L1 gradient magnitude.
//!
//! Borders are replicated for the gradient pass; magnitudes outside the image
//! count as zero during non-maximum suppression.

/// tan(22.5°) in Q15 fixed point
const TAN_22_5_Q15: i64 = 13_573;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeState {
    Suppressed,
    Weak,
    Strong,
}

/// Grayscale pixel plane in row-major order
#[derive(Debug, Clone, Copy)]
pub struct GrayPlane<'a> {
    pixels: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> GrayPlane<'a> {
    /// Wrap a row-major buffer; `None` when the buffer does not match the dimensions
    #[must_use]
    pub fn new(pixels: &'a [u8], width: usize, height: usize) -> Option<Self> {
        (width.checked_mul(height)? == pixels.len()).then_some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Pixel with replicated borders
    fn replicated(&self, x: isize, y: isize) -> i32 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        i32::from(self.pixels[cy * self.width + cx])
    }
}

struct Gradients {
    dx: Vec<i32>,
    dy: Vec<i32>,
    magnitude: Vec<i32>,
    width: usize,
    height: usize,
}

impl Gradients {
    fn sobel(plane: &GrayPlane<'_>) -> Self {
        let len = plane.width * plane.height;
        let mut dx = Vec::with_capacity(len);
        let mut dy = Vec::with_capacity(len);
        let mut magnitude = Vec::with_capacity(len);

        for y in 0..plane.height as isize {
            for x in 0..plane.width as isize {
                let p = |ox: isize, oy: isize| plane.replicated(x + ox, y + oy);
                let gx = (p(1, -1) + 2 * p(1, 0) + p(1, 1)) - (p(-1, -1) + 2 * p(-1, 0) + p(-1, 1));
                let gy = (p(-1, 1) + 2 * p(0, 1) + p(1, 1)) - (p(-1, -1) + 2 * p(0, -1) + p(1, -1));
                dx.push(gx);
                dy.push(gy);
                magnitude.push(gx.abs() + gy.abs());
            }
        }

        Self {
            dx,
            dy,
            magnitude,
            width: plane.width,
            height: plane.height,
        }
    }

    /// Magnitude, zero outside the image
    fn magnitude_at(&self, x: isize, y: isize) -> i32 {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            0
        } else {
            self.magnitude[y as usize * self.width + x as usize]
        }
    }

    /// Whether the pixel is a local maximum along its quantized gradient direction
    fn is_local_maximum(&self, x: isize, y: isize) -> bool {
        let index = y as usize * self.width + x as usize;
        let m = self.magnitude[index];
        let (gx, gy) = (self.dx[index], self.dy[index]);
        let ax = i64::from(gx.abs());
        let ay = i64::from(gy.abs()) << 15;
        let tan_22 = ax * TAN_22_5_Q15;

        if ay < tan_22 {
            // horizontal gradient
            m > self.magnitude_at(x - 1, y) && m >= self.magnitude_at(x + 1, y)
        } else if ay > tan_22 + (ax << 16) {
            // vertical gradient
            m > self.magnitude_at(x, y - 1) && m >= self.magnitude_at(x, y + 1)
        } else {
            let step = if (gx ^ gy) < 0 { -1 } else { 1 };
            m > self.magnitude_at(x - step, y - 1) && m > self.magnitude_at(x + step, y + 1)
        }
    }
}

/// Edge map of a grayscale plane, `true` for edge pixels
#[must_use]
pub fn detect_edges(plane: &GrayPlane<'_>, low_threshold: f64, high_threshold: f64) -> Vec<bool> {
    let (low, high) = if low_threshold > high_threshold {
        (high_threshold, low_threshold)
    } else {
        (low_threshold, high_threshold)
    };
    let (low, high) = (low.floor() as i32, high.floor() as i32);

    let gradients = Gradients::sobel(plane);
    let mut states = vec![EdgeState::Suppressed; plane.width * plane.height];
    let mut stack = Vec::new();

    for y in 0..plane.height as isize {
        for x in 0..plane.width as isize {
            let index = y as usize * plane.width + x as usize;
            let m = gradients.magnitude[index];
            if m <= low || !gradients.is_local_maximum(x, y) {
                continue;
            }
            if m > high {
                states[index] = EdgeState::Strong;
                stack.push((x, y));
            } else {
                states[index] = EdgeState::Weak;
            }
        }
    }

    // Hysteresis: promote weak pixels 8-connected to a strong one
    while let Some((x, y)) = stack.pop() {
        for oy in -1..=1 {
            for ox in -1..=1 {
                let (nx, ny) = (x + ox, y + oy);
                if nx < 0 || ny < 0 || nx >= plane.width as isize || ny >= plane.height as isize {
                    continue;
                }
                let neighbor = ny as usize * plane.width + nx as usize;
                if states[neighbor] == EdgeState::Weak {
                    states[neighbor] = EdgeState::Strong;
                    stack.push((nx, ny));
                }
            }
        }
    }

    states
        .into_iter()
        .map(|state| state == EdgeState::Strong)
        .collect()
}

/// Fraction of pixels marked as edges (0-1); zero for an empty plane
#[must_use]
pub fn edge_density(plane: &GrayPlane<'_>, low_threshold: f64, high_threshold: f64) -> f64 {
    let total = plane.width * plane.height;
    if total == 0 {
        return 0.0;
    }
    let edges = detect_edges(plane, low_threshold, high_threshold)
        .into_iter()
        .filter(|&edge| edge)
        .count();
    edges as f64 / total as f64
}
