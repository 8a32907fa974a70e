// ABOUTME: Core types and constants for the Skincast skin-risk engine
// ABOUTME: Foundation crate with error handling, data models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

#![deny(unsafe_code)]

//! # Skincast Core
//!
//! Foundation crate providing shared types and constants for the Skincast
//! skin-risk engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the analysis error taxonomy
//! - **constants**: Domain constants (reading defaults, UV and AQI scales)
//! - **models**: Weather readings, image features, factor scores, bundles, and reports

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (`WeatherReading`, `FactorScore`, `Report`, etc.)
pub mod models;
