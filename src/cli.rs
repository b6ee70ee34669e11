//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap and folds them,
//! together with environment fallbacks, into the startup configuration.

use clap::Parser;

/// Default base URL of the weather/geocoding API
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "SKYCAST_API_BASE";

/// Skycast - terminal weather dashboard
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Terminal weather dashboard with city search and forecasts")]
#[command(version)]
pub struct Cli {
    /// Seed the search box with a city name instead of using coordinates
    ///
    /// Examples:
    ///   skycast --city "London"
    ///   skycast --lat 51.5074 --lon -0.1278
    #[arg(long, value_name = "NAME")]
    pub city: Option<String>,

    /// Latitude of the startup location (falls back to SKYCAST_LAT)
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the startup location (falls back to SKYCAST_LON)
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Base URL of the weather/geocoding API (falls back to SKYCAST_API_BASE)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

/// Configuration derived from CLI arguments and environment for startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Resolved API base URL, without a trailing slash
    pub api_base: String,
    /// Startup latitude from the CLI, if given
    pub latitude: Option<f64>,
    /// Startup longitude from the CLI, if given
    pub longitude: Option<f64>,
    /// City name to seed the search box with, if given
    pub seed_city: Option<String>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// The API base resolves flag-first, then environment, then default.
    pub fn from_cli(cli: &Cli) -> Self {
        let api_base = resolve_api_base(
            cli.api_base.as_deref(),
            std::env::var(API_BASE_ENV).ok().as_deref(),
        );
        Self {
            api_base,
            latitude: cli.lat,
            longitude: cli.lon,
            seed_city: cli.city.clone(),
        }
    }
}

/// Resolves the API base URL: CLI flag, then environment, then default
fn resolve_api_base(flag: Option<&str>, env: Option<&str>) -> String {
    flag.or(env)
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}
