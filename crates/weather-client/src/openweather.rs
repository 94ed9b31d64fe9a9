//! OpenWeatherMap implementation of [`WeatherClient`].

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::config::OpenWeatherConfig;
use super::{WeatherClient, WeatherError, WeatherSnapshot};

/// Subset of the current-weather response that the bot reads.
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainReading,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
    feels_like: f64,
}

/// Parses a current-weather body. `requested_city` is used when the body has no `name`.
pub(crate) fn parse_snapshot(body: &str, requested_city: &str) -> Result<WeatherSnapshot, WeatherError> {
    let parsed: CurrentWeather =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))?;
    let city = parsed
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| requested_city.to_string());
    Ok(WeatherSnapshot {
        city,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
    })
}

/// Current-weather client for api.openweathermap.org (or a compatible endpoint).
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// Builds the client with the configured endpoint and request timeout. Fails if the
    /// HTTP client cannot be built; there is no fallback without the timeout.
    pub fn from_config(config: &OpenWeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build weather HTTP client");
                WeatherError::from(e)
            })?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn get_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching weather data");
                WeatherError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Error reading weather response body");
            WeatherError::from(e)
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Weather API returned an error status");
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let snapshot = parse_snapshot(&body, city).map_err(|e| {
            error!(error = %e, "Weather payload could not be parsed");
            e
        })?;
        info!(
            city = %snapshot.city,
            temperature = snapshot.temperature,
            feels_like = snapshot.feels_like,
            "Weather fetched"
        );
        Ok(snapshot)
    }
}
