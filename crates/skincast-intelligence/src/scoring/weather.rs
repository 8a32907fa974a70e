// ABOUTME: Weather factor scorers for UV, humidity, temperature, air quality, wind, and rain
// ABOUTME: Each scorer is a pure function of the reading; absent factors produce no score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

use crate::config::intelligence::WeatherRiskConfig;
use skincast_core::models::{uv_risk_label, FactorKind, FactorScore, WeatherReading};
use tracing::debug;

/// Scores every weather factor of a reading
#[derive(Debug, Clone, Default)]
pub struct WeatherFactorScorer {
    config: WeatherRiskConfig,
}

fn mentions(reading: &WeatherReading, keywords: &[String]) -> bool {
    let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
    reading.condition_mentions(&keywords)
}

impl WeatherFactorScorer {
    /// Create a scorer with the given configuration
    #[must_use]
    pub const fn new(config: WeatherRiskConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &WeatherRiskConfig {
        &self.config
    }

    /// Score every applicable factor, in the order UV, humidity, temperature,
    /// air quality, wind, precipitation.
    ///
    /// UV, temperature, and air quality are always present.
    #[must_use]
    pub fn score(&self, reading: &WeatherReading) -> Vec<FactorScore> {
        let factors: Vec<FactorScore> = [
            Some(self.score_uv(reading)),
            self.score_humidity(reading),
            Some(self.score_temperature(reading)),
            Some(self.score_air_quality(reading)),
            self.score_wind(reading),
            self.score_precipitation(reading),
        ]
        .into_iter()
        .flatten()
        .collect();

        for factor in &factors {
            debug!(
                factor = %factor.kind.family(),
                kind = ?factor.kind,
                score = factor.score,
                severity = %factor.severity,
                "Weather factor produced"
            );
        }
        factors
    }

    /// UV exposure; always present
    #[must_use]
    pub fn score_uv(&self, reading: &WeatherReading) -> FactorScore {
        let uv = &self.config.uv;
        let mut score = reading.uv_index * uv.points_per_index;
        let mut indicators = vec!["Sunburn Risk", "Photoaging"];

        if mentions(reading, &uv.clear_sky_keywords) {
            score += uv.clear_sky_bonus;
            indicators.push("Clear Sky Exposure");
        }
        if mentions(reading, &uv.snow_keywords) {
            score += uv.snow_bonus;
            indicators.push("Snow Reflection");
        }
        if reading.temperature_celsius >= uv.heat_bonus_min_celsius {
            score += uv.heat_bonus;
            indicators.push("Heat Amplification");
        }
        let score = score.min(uv.cap);

        FactorScore::new(
            FactorKind::Uv,
            score,
            uv.bands.classify(reading.uv_index),
            uv.confidence.confidence(score),
            uv_risk_label(reading.uv_index),
        )
        .with_indicators(indicators)
        .with_reading(reading.uv_index)
    }

    /// Humidity; excess and dehydration are separate framings
    #[must_use]
    pub fn score_humidity(&self, reading: &WeatherReading) -> Option<FactorScore> {
        let humidity = &self.config.humidity;
        let percent = reading.humidity_percent;

        let (kind, score, tier, indicators): (_, _, _, &[&str]) =
            if percent >= humidity.excess_min_percent {
                (
                    FactorKind::HumidityExcess,
                    percent,
                    humidity.excess_tier,
                    &["Excess Oil", "Breakout Risk", "Fungal Growth"],
                )
            } else if percent >= humidity.elevated_min_percent {
                (
                    FactorKind::HumidityElevated,
                    percent,
                    humidity.elevated_tier,
                    &["Increased Oil Production"],
                )
            } else if percent < humidity.dry_below_percent {
                (
                    FactorKind::HumidityDry,
                    100.0 - percent,
                    humidity.dry_tier,
                    &["Dehydration", "Moisture Loss"],
                )
            } else {
                return None;
            };

        Some(
            FactorScore::new(
                kind,
                score,
                tier,
                humidity.confidence.confidence(score),
                tier.label(),
            )
            .with_indicators(indicators.iter().copied())
            .with_reading(percent),
        )
    }

    /// Temperature; heat, cold, cool, and mild air are separate framings
    #[must_use]
    pub fn score_temperature(&self, reading: &WeatherReading) -> FactorScore {
        let temperature = &self.config.temperature;
        let celsius = reading.temperature_celsius;

        let (kind, score, tier, confidence, indicators): (_, _, _, _, &[&str]) =
            if celsius >= temperature.heat_min_celsius {
                let score = temperature
                    .extreme_points_per_degree
                    .mul_add(celsius - temperature.heat_min_celsius, temperature.extreme_base_score)
                    .min(temperature.cap);
                (
                    FactorKind::TemperatureHeat,
                    score,
                    temperature.extreme_tier,
                    &temperature.extreme_confidence,
                    &["Sweat-Clogged Pores", "Dehydration"],
                )
            } else if celsius <= temperature.cold_max_celsius {
                let score = temperature
                    .extreme_points_per_degree
                    .mul_add(temperature.cold_max_celsius - celsius, temperature.extreme_base_score)
                    .min(temperature.cap);
                (
                    FactorKind::TemperatureCold,
                    score,
                    temperature.extreme_tier,
                    &temperature.extreme_confidence,
                    &["Barrier Damage", "Frostbite Risk", "Chapping"],
                )
            } else if celsius < temperature.cool_below_celsius {
                let score = temperature
                    .cool_points_per_degree
                    .mul_add(temperature.cool_below_celsius - celsius, temperature.cool_base_score)
                    .min(temperature.cap);
                (
                    FactorKind::TemperatureCool,
                    score,
                    temperature.cool_tier,
                    &temperature.cool_confidence,
                    &["Dry Air", "Eczema Flare Risk"],
                )
            } else {
                (
                    FactorKind::TemperatureMild,
                    temperature.mild_score,
                    temperature.mild_tier,
                    &temperature.cool_confidence,
                    &["Comfortable Conditions"],
                )
            };

        FactorScore::new(kind, score, tier, confidence.confidence(score), tier.label())
            .with_indicators(indicators.iter().copied())
            .with_reading(celsius)
    }

    /// Air pollution over the ordinal category; always present
    #[must_use]
    pub fn score_air_quality(&self, reading: &WeatherReading) -> FactorScore {
        let air = &self.config.air_quality;
        let ordinal = f64::from(reading.aqi.ordinal());
        let score = ordinal * air.points_per_ordinal;

        FactorScore::new(
            FactorKind::AirQuality,
            score,
            air.bands.classify(ordinal),
            air.confidence.confidence(score),
            reading.aqi.label(),
        )
        .with_indicators([reading.aqi.skin_impact()])
        .with_reading(ordinal)
    }

    /// Wind; present only above the configured speed
    #[must_use]
    pub fn score_wind(&self, reading: &WeatherReading) -> Option<FactorScore> {
        let wind = &self.config.wind;
        let speed = reading.wind_speed_ms;
        if speed <= wind.present_above_ms {
            return None;
        }

        let score = (speed * wind.points_per_ms).min(wind.cap);
        let tier = wind.bands.classify(speed);
        Some(
            FactorScore::new(
                FactorKind::Wind,
                score,
                tier,
                wind.confidence.confidence(score),
                tier.label(),
            )
            .with_indicators(["Windburn", "Barrier Stripping"])
            .with_reading(speed),
        )
    }

    /// Rain or drizzle in the condition label
    #[must_use]
    pub fn score_precipitation(&self, reading: &WeatherReading) -> Option<FactorScore> {
        let precipitation = &self.config.precipitation;
        if !mentions(reading, &precipitation.keywords) {
            return None;
        }

        Some(
            FactorScore::new(
                FactorKind::Precipitation,
                precipitation.score,
                precipitation.tier,
                precipitation.confidence.confidence(precipitation.score),
                precipitation.tier.label(),
            )
            .with_indicators(["Maceration", "Fungal Risk", "Pollutant Exposure"]),
        )
    }
}
