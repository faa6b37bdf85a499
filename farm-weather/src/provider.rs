use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current conditions for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
}

/// Errors surfaced by weather lookups.
///
/// All of these are non-fatal to the rest of the program: a failed lookup is
/// reported to the user and nothing else is affected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("weather API credential is not configured")]
    MissingCredential,

    #[error("weather API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("weather request failed: {0}")]
    Http(String),

    #[error("weather response could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Looks up the current conditions for a city.
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
