// ABOUTME: Factor scorers converting readings and image features into classified factor scores
// ABOUTME: Weather and image scorers are independent, stateless, and deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Factor Scorers
//!
//! Each scorer accumulates a base value plus fixed increments, caps the result
//! per factor, and classifies it with the factor's own severity bands. A factor
//! that does not apply produces no score rather than a zero score.

/// Image condition scorers
pub mod conditions;
/// Weather factor scorers
pub mod weather;

pub use conditions::ImageConditionScorer;
pub use weather::WeatherFactorScorer;
