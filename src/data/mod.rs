//! Core data models for Skycast
//!
//! This module contains all the data types used throughout the application
//! for representing coordinates, places, and forecast snapshots, along with
//! the HTTP clients that produce them.

pub mod geocode;
pub mod weather;

pub use geocode::{GeocodeClient, GeocodeError};
pub use weather::{WeatherClient, WeatherError};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A geographic coordinate pair
///
/// Latitude is in [-90, 90] and longitude in [-180, 180]. Values are
/// validated where they enter the system (CLI/env parsing); once built,
/// a coordinate is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// A named place returned by the geocoding service
///
/// Held transiently in the search candidate list or collapsed into the
/// single selected display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Provider-assigned identity
    pub id: u64,
    /// Place name (typically a city)
    pub name: String,
    /// Location of the place
    pub coordinate: Coordinate,
    /// Country the place belongs to
    pub country: String,
    /// First-level administrative division (region/state), when known
    pub admin1: Option<String>,
}

impl Place {
    /// Display label in the form `"name[, admin1], country"`
    pub fn label(&self) -> String {
        match self.admin1.as_deref() {
            Some(admin1) if !admin1.is_empty() => {
                format!("{}, {}, {}", self.name, admin1, self.country)
            }
            _ => format!("{}, {}", self.name, self.country),
        }
    }
}

/// Location metadata attached to a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Coordinate the forecast was resolved for
    pub coordinate: Coordinate,
    /// IANA timezone name (e.g. "Europe/London")
    pub timezone: String,
    /// Timezone abbreviation (e.g. "BST")
    pub timezone_abbreviation: String,
}

/// Current conditions at the forecast location
///
/// Timestamps are naive and expressed in the location's own timezone,
/// exactly as the provider reports them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation timestamp (location-local)
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// WMO weather code
    pub weather_code: u16,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees [0, 360)
    pub wind_direction: f64,
}

/// A single hour of forecast data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySlot {
    /// Forecast timestamp (location-local)
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// WMO weather code
    pub weather_code: u16,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees [0, 360)
    pub wind_direction: f64,
}

/// A single day of forecast data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySlot {
    /// Forecast date (location-local)
    pub date: NaiveDate,
    /// WMO weather code for the day
    pub weather_code: u16,
    /// Daily maximum temperature in Celsius
    pub temperature_max: f64,
    /// Daily minimum temperature in Celsius
    pub temperature_min: f64,
    /// Total precipitation in mm
    pub precipitation: f64,
    /// Maximum wind speed in km/h
    pub wind_speed_max: f64,
}

/// A complete forecast for one location
///
/// Replaced wholesale on each successful fetch, never mutated in place.
/// `hourly` starts at the current hour (index 0 is the nearest hour) and
/// `daily` starts at today, at most seven entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// Location metadata
    pub location: LocationInfo,
    /// Current conditions
    pub current: CurrentConditions,
    /// Hourly forecast rows, index 0 = nearest hour
    pub hourly: Vec<HourlySlot>,
    /// Daily forecast rows, index 0 = today
    pub daily: Vec<DailySlot>,
}
