//! OpenWeatherMap configuration loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
/// Request timeout when `OPEN_WEATHER_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    /// OPEN_WEATHER_API_KEY
    pub api_key: String,
    /// OPEN_WEATHER_BASE_URL
    pub base_url: String,
    /// OPEN_WEATHER_TIMEOUT_SECS
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var("OPEN_WEATHER_API_KEY").context("OPEN_WEATHER_API_KEY not set")?;
        let base_url = env::var("OPEN_WEATHER_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match env::var("OPEN_WEATHER_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("OPEN_WEATHER_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Rejects a base URL that does not parse.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("OPEN_WEATHER_BASE_URL is not a valid URL: {}", self.base_url);
        }
        Ok(())
    }
}
