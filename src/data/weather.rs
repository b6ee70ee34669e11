//! Forecast API client
//!
//! This module fetches forecast data from the weather service and parses
//! it into a [`ForecastSnapshot`]. The wire payload carries hourly and
//! daily data as parallel arrays; parsing validates that every array in a
//! group has the same length before converting to row structs.

use chrono::{Duration, NaiveDateTime, Timelike};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{
    Coordinate, CurrentConditions, DailySlot, ForecastSnapshot, HourlySlot, LocationInfo,
};
use crate::timefmt::{self, FormatError};

/// Number of daily rows kept in a snapshot (today plus six days)
const DAILY_ROWS: usize = 7;

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("Forecast request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Service responded with a non-success status
    #[error("Forecast service returned HTTP {0}")]
    BadStatus(u16),

    /// Failed to parse JSON response
    #[error("Failed to parse forecast response: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// Parallel arrays in the response disagree on length
    #[error("Malformed forecast payload: {0}")]
    MalformedPayload(String),

    /// Invalid timestamp in response
    #[error("Invalid timestamp in forecast response: {0}")]
    InvalidTimestamp(#[from] FormatError),
}

/// Client for fetching forecasts from the weather service
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Creates a new WeatherClient against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a new WeatherClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the forecast for the given coordinate
    ///
    /// # Returns
    /// * `Ok(ForecastSnapshot)` - Parsed forecast for the location
    /// * `Err(WeatherError)` - If the request, status, or parsing fails
    pub async fn fetch_forecast(
        &self,
        coordinate: Coordinate,
    ) -> Result<ForecastSnapshot, WeatherError> {
        let url = format!("{}/api/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coordinate.latitude),
                ("lon", coordinate.longitude),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::BadStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let payload: ForecastPayload = serde_json::from_str(&text)?;

        parse_payload(payload)
    }
}

/// Parse the wire payload into a ForecastSnapshot
fn parse_payload(payload: ForecastPayload) -> Result<ForecastSnapshot, WeatherError> {
    let current = CurrentConditions {
        time: timefmt::parse_instant(&payload.current.time)?,
        temperature: payload.current.temperature_2m,
        humidity: payload.current.relative_humidity_2m,
        weather_code: payload.current.weather_code,
        wind_speed: payload.current.wind_speed_10m,
        wind_direction: payload.current.wind_direction_10m,
    };

    let hourly = parse_hourly(&payload.hourly, current.time)?;
    let daily = parse_daily(&payload.daily)?;

    Ok(ForecastSnapshot {
        location: LocationInfo {
            coordinate: Coordinate {
                latitude: payload.latitude,
                longitude: payload.longitude,
            },
            timezone: payload.timezone,
            timezone_abbreviation: payload.timezone_abbreviation,
        },
        current,
        hourly,
        daily,
    })
}

/// Parse hourly parallel arrays into slots, keeping only the current hour
/// onward so that index 0 is the nearest hour
fn parse_hourly(
    hourly: &HourlyPayload,
    now: NaiveDateTime,
) -> Result<Vec<HourlySlot>, WeatherError> {
    let len = hourly.time.len();
    if hourly.temperature_2m.len() != len
        || hourly.relative_humidity_2m.len() != len
        || hourly.weather_code.len() != len
        || hourly.wind_speed_10m.len() != len
        || hourly.wind_direction_10m.len() != len
    {
        return Err(WeatherError::MalformedPayload(
            "hourly arrays have inconsistent lengths".to_string(),
        ));
    }

    // Providers report hourly slots from midnight; drop everything before
    // the top of the current hour.
    let cutoff = now - Duration::minutes(i64::from(now.minute()))
        - Duration::seconds(i64::from(now.second()));

    let mut slots = Vec::with_capacity(len);
    for i in 0..len {
        let time = timefmt::parse_instant(&hourly.time[i])?;
        if time < cutoff {
            continue;
        }
        slots.push(HourlySlot {
            time,
            temperature: hourly.temperature_2m[i],
            humidity: hourly.relative_humidity_2m[i],
            weather_code: hourly.weather_code[i],
            wind_speed: hourly.wind_speed_10m[i],
            wind_direction: hourly.wind_direction_10m[i],
        });
    }

    Ok(slots)
}

/// Parse daily parallel arrays into slots, capped at seven rows
fn parse_daily(daily: &DailyPayload) -> Result<Vec<DailySlot>, WeatherError> {
    let len = daily.time.len();
    if daily.weather_code.len() != len
        || daily.temperature_2m_max.len() != len
        || daily.temperature_2m_min.len() != len
        || daily.precipitation_sum.len() != len
        || daily.wind_speed_10m_max.len() != len
    {
        return Err(WeatherError::MalformedPayload(
            "daily arrays have inconsistent lengths".to_string(),
        ));
    }

    let mut slots = Vec::with_capacity(len.min(DAILY_ROWS));
    for i in 0..len.min(DAILY_ROWS) {
        slots.push(DailySlot {
            date: timefmt::parse_day(&daily.time[i])?,
            weather_code: daily.weather_code[i],
            temperature_max: daily.temperature_2m_max[i],
            temperature_min: daily.temperature_2m_min[i],
            precipitation: daily.precipitation_sum[i],
            wind_speed_max: daily.wind_speed_10m_max[i],
        });
    }

    Ok(slots)
}

/// Forecast API response structure
#[derive(Debug, Deserialize)]
struct ForecastPayload {
    latitude: f64,
    longitude: f64,
    timezone: String,
    timezone_abbreviation: String,
    current: CurrentPayload,
    hourly: HourlyPayload,
    daily: DailyPayload,
}

/// Current conditions block of the response
#[derive(Debug, Deserialize)]
struct CurrentPayload {
    time: String,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: u16,
    wind_speed_10m: f64,
    wind_direction_10m: f64,
}

/// Hourly parallel arrays of the response
#[derive(Debug, Deserialize)]
struct HourlyPayload {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    relative_humidity_2m: Vec<f64>,
    weather_code: Vec<u16>,
    wind_speed_10m: Vec<f64>,
    wind_direction_10m: Vec<f64>,
}

/// Daily parallel arrays of the response
#[derive(Debug, Deserialize)]
struct DailyPayload {
    time: Vec<String>,
    weather_code: Vec<u16>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
    wind_speed_10m_max: Vec<f64>,
}
