//! Reverse geocoding
//!
//! Resolves a coordinate pair to a human-readable address using a
//! LocationIQ-compatible reverse endpoint.

use crate::config::{ADDRESS_NOT_FOUND, DEFAULT_GEOCODING_URL};
use crate::error::{AppError, Result};
use crate::events::Coordinates;
use serde_json::Value;

/// Client for the reverse geocoding endpoint
#[derive(Clone)]
pub struct GeocodingService {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeocodingService {
    /// Creates a client against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_GEOCODING_URL)
    }

    /// Creates a client against a custom endpoint
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("EventRater/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Look up the address for a coordinate pair.
    ///
    /// Any JSON answer without a `display_name` resolves to the
    /// "Address not found" fallback; transport failures and non-JSON bodies
    /// are errors.
    pub async fn reverse(&self, coords: Coordinates) -> Result<String> {
        tracing::debug!("Reverse geocoding {}", coords);

        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Geocoding endpoint returned status: {}", status);
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::Geocoding(format!("Failed to parse response: {}", e)))?;

        Ok(address_from_response(&json))
    }
}

/// Extract `display_name` from a geocoding response
pub fn address_from_response(json: &Value) -> String {
    json.get("display_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(ADDRESS_NOT_FOUND)
        .to_string()
}
