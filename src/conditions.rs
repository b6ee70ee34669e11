//! Weather-code interpretation
//!
//! Maps WMO weather codes from the forecast provider to human-readable
//! descriptions, icon categories, and background palette categories.
//!
//! The buckets are evaluated as written, top to bottom, with exact code
//! sets per arm. The snow codes (71/73/75) sit numerically inside the span
//! a careless 51..=82 rain test would cover; keeping every arm as an exact
//! set means no bucket can shadow another.

use serde::{Deserialize, Serialize};

/// Icon category for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconKind {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Showers,
    Thunderstorm,
    /// Unrecognized code; rendered as a generic cloud
    Unknown,
}

/// Background palette category for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundKind {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    Default,
}

/// Human-readable description for a WMO weather code
pub fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Light rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Light snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        80 => "Light showers",
        81 => "Moderate showers",
        82 => "Heavy showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with light hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

/// Icon category for a WMO weather code
pub fn icon_kind(code: u16) -> IconKind {
    match code {
        0 | 1 => IconKind::Clear,
        2 => IconKind::PartlyCloudy,
        3 => IconKind::Overcast,
        45 | 48 => IconKind::Fog,
        51 | 53 | 55 => IconKind::Drizzle,
        61 | 63 | 65 => IconKind::Rain,
        71 | 73 | 75 => IconKind::Snow,
        80 | 81 | 82 => IconKind::Showers,
        95 | 96 | 99 => IconKind::Thunderstorm,
        _ => IconKind::Unknown,
    }
}

/// Background palette category for a WMO weather code
pub fn background_kind(code: u16) -> BackgroundKind {
    match code {
        0 | 1 => BackgroundKind::Clear,
        2 | 3 => BackgroundKind::Cloudy,
        51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => BackgroundKind::Rain,
        71 | 73 | 75 => BackgroundKind::Snow,
        95 | 96 | 99 => BackgroundKind::Thunderstorm,
        _ => BackgroundKind::Default,
    }
}
