//! # Weather client
//!
//! [`WeatherClient`] trait and an OpenWeatherMap implementation returning a
//! [`WeatherSnapshot`] (temperature and feels-like, °C) for a city.
//!
//! One GET per call, no retries. Failures come back as [`WeatherError`]; a payload
//! missing `main.temp` or `main.feels_like` is a [`WeatherError::Malformed`], not a panic.

use async_trait::async_trait;
use thiserror::Error;

mod config;
mod openweather;

pub use config::{OpenWeatherConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use openweather::OpenWeatherClient;

/// A single weather reading. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
}

/// Why a weather fetch produced no snapshot.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Connection, timeout, or body read failure.
    #[error("Weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Weather API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body is not the expected JSON shape.
    #[error("Malformed weather payload: {0}")]
    Malformed(String),
}

/// Weather source interface.
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetches the current weather for `city` in metric units.
    async fn get_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;
}
