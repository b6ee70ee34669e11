//! Geocoding API client
//!
//! Forward search (place name to candidate places) and reverse lookup
//! (coordinate to place). Failures here are incidental to the user flow:
//! callers degrade to an empty candidate list or a fallback label instead
//! of surfacing an error.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{Coordinate, Place};

/// Queries shorter than this never reach the network
pub const MIN_QUERY_LEN: usize = 2;

/// Errors that can occur during geocoding lookups
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed or the body could not be decoded
    #[error("Geocoding request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Service responded with a non-success status
    #[error("Geocoding service returned HTTP {0}")]
    BadStatus(u16),
}

/// Client for the place search and reverse geocoding endpoints
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    /// Creates a new GeocodeClient against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a new GeocodeClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Search for places matching a name fragment
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] characters short-circuit to
    /// an empty list without a network call. Results keep the API's
    /// response order.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/geocode", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("city", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::BadStatus(status.as_u16()));
        }

        let body: GeocodeResponse = response.json().await?;
        Ok(body.results.into_iter().map(PlaceRecord::into_place).collect())
    }

    /// Resolve a coordinate to the closest known place
    ///
    /// Returns `Ok(None)` when the provider has no match.
    pub async fn reverse_lookup(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<Place>, GeocodeError> {
        let url = format!("{}/api/reverse-geocode", self.base_url);
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
            return Err(GeocodeError::BadStatus(status.as_u16()));
        }

        let body: GeocodeResponse = response.json().await?;
        Ok(body.results.into_iter().next().map(PlaceRecord::into_place))
    }
}

/// Geocoding API response structure
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<PlaceRecord>,
}

/// One place entry from the geocoding API
#[derive(Debug, Deserialize)]
struct PlaceRecord {
    id: u64,
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: String,
    #[serde(default)]
    admin1: Option<String>,
}

impl PlaceRecord {
    fn into_place(self) -> Place {
        Place {
            id: self.id,
            name: self.name,
            coordinate: Coordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            country: self.country,
            admin1: self.admin1,
        }
    }
}
