// ABOUTME: Skincast CLI - command-line front end for skin-risk reports
// ABOUTME: Builds readings from flags or JSON files and prints reports as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors
//!
//! Usage:
//! ```bash
//! # Weather-only report
//! skincast-cli analyze --temperature 32 --humidity 75 --uv 9 --aqi-raw 160
//!
//! # Weather plus photo
//! skincast-cli analyze --temperature 12 --humidity 40 --image face.jpg
//!
//! # Photo-only conditions and recommendations
//! skincast-cli image face.png
//!
//! # Request file: {"weather": {...}, "image_path": "face.png"}
//! skincast-cli request request.json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use skincast::logging::LoggingConfig;
use skincast::AnalyzerSettings;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "skincast-cli",
    about = "Skin-health risk reports from weather, air quality, and photos",
    long_about = "Scores UV, humidity, temperature, air quality, wind, precipitation, and optional photo \
                  conditions, then prints a deduplicated recommendation report as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Compact single-line JSON instead of pretty output
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Full report from weather flags and an optional photo
    Analyze(AnalyzeArgs),

    /// Photo-only conditions and recommendations
    Image {
        /// Photo path (png, jpg, jpeg)
        path: PathBuf,
    },

    /// Full report from a JSON request file
    Request {
        /// Request file: {"weather": {...}, "image_path": "..."}
        path: PathBuf,
    },
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Air temperature in Celsius
    #[arg(long, allow_negative_numbers = true)]
    temperature: f64,

    /// Relative humidity (0-100)
    #[arg(long)]
    humidity: f64,

    /// Wind speed in m/s
    #[arg(long, default_value_t = 0.0)]
    wind: f64,

    /// Condition label (clear, rain, snow, clouds, ...)
    #[arg(long, default_value = "clear")]
    condition: String,

    /// UV index
    #[arg(long, default_value_t = 5.0)]
    uv: f64,

    /// Air quality on the ordinal 1-5 scale
    #[arg(long, conflicts_with = "aqi_raw")]
    aqi: Option<u8>,

    /// Air quality as a raw 0-500 index
    #[arg(long)]
    aqi_raw: Option<u16>,

    /// Fine particulate matter (µg/m³)
    #[arg(long = "pm25")]
    pm2_5: Option<f64>,

    /// Coarse particulate matter (µg/m³)
    #[arg(long)]
    pm10: Option<f64>,

    /// Place name echoed in the report
    #[arg(long)]
    location: Option<String>,

    /// Optional photo path (png, jpg, jpeg)
    #[arg(long)]
    image: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let settings = AnalyzerSettings::from_env()?;
    debug!("Skincast CLI starting");

    let output = match cli.command {
        Command::Analyze(args) => commands::analyze(&settings, args)?,
        Command::Image { path } => commands::image(&settings, &path)?,
        Command::Request { path } => commands::request(&settings, &path)?,
    };

    helpers::print_json(&output, cli.compact)?;
    Ok(())
}
