//! Weather lookup against a weatherapi.com-style `current.json` endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::provider::{WeatherError, WeatherProvider, WeatherReport};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Connection settings for [`WeatherApiClient`].
///
/// The API credential is injected here by the caller; an absent key is the
/// typed `None` variant and surfaces as [`WeatherError::MissingCredential`]
/// on lookup, not as a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    /// Service root without a trailing slash. Tests point this at a local
    /// mock server.
    pub base_url: String,
}

impl WeatherConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// HTTP client for the current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    config: WeatherConfig,
    client: reqwest::Client,
}

impl WeatherApiClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

// Wire format of the `current.json` response, reduced to the fields we keep.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    condition: ApiCondition,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingCredential)?;

        let url = format!("{}/current.json", self.config.base_url);
        debug!(%city, "requesting current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("key", key), ("q", city)])
            .send()
            .await
            .map_err(|e| WeatherError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))?;

        Ok(WeatherReport {
            location: body.location.name,
            temperature_c: body.current.temp_c,
            condition: body.current.condition.text,
            humidity_pct: body.current.humidity,
        })
    }
}
