// ABOUTME: Domain constants for weather readings, UV and air-quality scales
// ABOUTME: Holds fallback values used when upstream data sources are unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Domain constants shared by the models and the intelligence engine.

/// Fallback values applied when an upstream fetcher has no data
pub mod reading_defaults {
    /// UV index assumed when the UV service is unavailable (moderate)
    pub const UV_INDEX: f64 = 5.0;

    /// AQI ordinal assumed when air-quality data is unavailable (Fair)
    pub const AQI_ORDINAL: u8 = 2;

    /// Wind speed assumed when the weather payload omits it (m/s)
    pub const WIND_SPEED_MS: f64 = 0.0;

    /// Condition label assumed when the weather payload omits it
    pub const CONDITION: &str = "clear";
}

/// UV index risk scale (WHO global solar UV index)
pub mod uv_scale {
    /// Lower bound of the "Moderate" risk label
    pub const MODERATE: f64 = 3.0;

    /// Lower bound of the "High" risk label
    pub const HIGH: f64 = 6.0;

    /// Lower bound of the "Very High" risk label
    pub const VERY_HIGH: f64 = 8.0;

    /// Lower bound of the "Extreme" risk label
    pub const EXTREME: f64 = 11.0;
}

/// Raw (0-500) air quality index breakpoints used to derive the ordinal category
pub mod aqi_raw_scale {
    /// Highest raw index still considered "Good"
    pub const GOOD_MAX: u16 = 50;

    /// Highest raw index still considered "Moderate"
    pub const MODERATE_MAX: u16 = 100;

    /// Highest raw index still considered "Poor"
    pub const POOR_MAX: u16 = 150;
}

/// Physical domain limits used when validating readings
pub mod reading_limits {
    /// Relative humidity lower bound (%)
    pub const HUMIDITY_MIN: f64 = 0.0;

    /// Relative humidity upper bound (%)
    pub const HUMIDITY_MAX: f64 = 100.0;

    /// Lowest plausible surface air temperature (°C)
    pub const TEMPERATURE_MIN: f64 = -90.0;

    /// Highest plausible surface air temperature (°C)
    pub const TEMPERATURE_MAX: f64 = 60.0;
}

/// Photo upload policy defaults
pub mod upload_limits {
    /// Largest accepted upload (5 MiB)
    pub const MAX_BYTES: u64 = 5 * 1024 * 1024;

    /// Accepted file extensions, lowercase
    pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
}
