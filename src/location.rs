//! Startup location acquisition
//!
//! A terminal process has no browser-style geolocation API; the "device
//! location" is whatever coordinates the user configured via CLI flags or
//! the `SKYCAST_LAT`/`SKYCAST_LON` environment variables. Missing or
//! malformed values are the moral equivalent of a denied permission
//! prompt: the resulting error tells the user to search manually and no
//! forecast is fetched.

use thiserror::Error;

use crate::cli::StartupConfig;
use crate::data::Coordinate;

/// Display label used when reverse geocoding cannot name the location
pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

/// Environment variable for the startup latitude
pub const LAT_ENV: &str = "SKYCAST_LAT";

/// Environment variable for the startup longitude
pub const LON_ENV: &str = "SKYCAST_LON";

/// Errors raised while acquiring the startup location
#[derive(Debug, Error)]
pub enum LocationError {
    /// No coordinates were configured at all
    #[error("Location unavailable: pass --lat/--lon or set {LAT_ENV}/{LON_ENV}, or search for a city above")]
    Unavailable,

    /// An environment variable held a non-numeric value
    #[error("Invalid {var} value '{value}': expected decimal degrees. Search for a city instead")]
    Malformed { var: String, value: String },

    /// Coordinates were numeric but outside the valid ranges
    #[error("Coordinates ({latitude}, {longitude}) out of range. Search for a city instead")]
    OutOfRange { latitude: f64, longitude: f64 },
}

/// Resolves the startup coordinate from CLI flags and environment
///
/// CLI values win over environment variables. Both latitude and longitude
/// must be present for a coordinate to resolve.
pub fn device_coordinates(config: &StartupConfig) -> Result<Coordinate, LocationError> {
    let latitude = component(config.latitude, LAT_ENV, read_env(LAT_ENV))?;
    let longitude = component(config.longitude, LON_ENV, read_env(LON_ENV))?;

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                return Err(LocationError::OutOfRange {
                    latitude,
                    longitude,
                });
            }
            Ok(Coordinate {
                latitude,
                longitude,
            })
        }
        _ => Err(LocationError::Unavailable),
    }
}

fn read_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Resolves one coordinate component: CLI flag first, then environment
fn component(
    cli: Option<f64>,
    var: &str,
    env_value: Option<String>,
) -> Result<Option<f64>, LocationError> {
    if cli.is_some() {
        return Ok(cli);
    }
    match env_value {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| LocationError::Malformed {
                var: var.to_string(),
                value: raw,
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_prefers_cli_over_env() {
        let value = component(Some(51.5), LAT_ENV, Some("0.0".to_string())).unwrap();
        assert_eq!(value, Some(51.5));
    }

    #[test]
    fn test_component_falls_back_to_env() {
        let value = component(None, LAT_ENV, Some("49.25".to_string())).unwrap();
        assert_eq!(value, Some(49.25));
    }

    #[test]
    fn test_component_absent_everywhere() {
        let value = component(None, LAT_ENV, None).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_component_rejects_malformed_env() {
        let result = component(None, LAT_ENV, Some("north-ish".to_string()));
        match result {
            Err(LocationError::Malformed { var, value }) => {
                assert_eq!(var, LAT_ENV);
                assert_eq!(value, "north-ish");
            }
            other => panic!("Expected Malformed error, got {:?}", other),
        }
    }

    fn config(latitude: Option<f64>, longitude: Option<f64>) -> crate::cli::StartupConfig {
        crate::cli::StartupConfig {
            api_base: "http://localhost:5000".to_string(),
            latitude,
            longitude,
            seed_city: None,
        }
    }

    #[test]
    fn test_device_coordinates_from_cli_values() {
        let coordinate = device_coordinates(&config(Some(51.5074), Some(-0.1278))).unwrap();
        assert!((coordinate.latitude - 51.5074).abs() < 0.0001);
        assert!((coordinate.longitude - (-0.1278)).abs() < 0.0001);
    }

    #[test]
    fn test_device_coordinates_rejects_out_of_range() {
        assert!(matches!(
            device_coordinates(&config(Some(123.0), Some(0.0))),
            Err(LocationError::OutOfRange { .. })
        ));
        assert!(matches!(
            device_coordinates(&config(Some(0.0), Some(-200.0))),
            Err(LocationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_error_messages_prompt_manual_search() {
        // Every failure mode must steer the user toward the search box.
        let unavailable = LocationError::Unavailable.to_string();
        assert!(unavailable.to_lowercase().contains("search"));

        let malformed = LocationError::Malformed {
            var: LAT_ENV.to_string(),
            value: "x".to_string(),
        }
        .to_string();
        assert!(malformed.to_lowercase().contains("search"));

        let out_of_range = LocationError::OutOfRange {
            latitude: 123.0,
            longitude: 0.0,
        }
        .to_string();
        assert!(out_of_range.to_lowercase().contains("search"));
    }
}
