//! Weather loop config: city, interval, and the channels to rename.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use super::base::env_id_list;
use crate::weather::ChannelTarget;

pub const DEFAULT_WEATHER_CITY: &str = "Toronto";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct WeatherLoopConfig {
    /// WEATHER_CITY
    pub city: String,
    /// WEATHER_REFRESH_INTERVAL_SECS
    pub interval: Duration,
    /// WEATHER_TEMP_CHANNEL_IDS then WEATHER_FEELS_LIKE_CHANNEL_IDS, in that order
    pub targets: Vec<ChannelTarget>,
}

impl WeatherLoopConfig {
    pub fn from_env() -> Result<Self> {
        let city = env::var("WEATHER_CITY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WEATHER_CITY.to_string());
        let interval_secs = match env::var("WEATHER_REFRESH_INTERVAL_SECS") {
            Ok(s) => s.trim().parse().with_context(|| {
                format!("WEATHER_REFRESH_INTERVAL_SECS is not a number: {}", s)
            })?,
            Err(_) => DEFAULT_REFRESH_INTERVAL_SECS,
        };
        let targets = env_id_list("WEATHER_TEMP_CHANNEL_IDS")?
            .into_iter()
            .map(ChannelTarget::temperature)
            .chain(
                env_id_list("WEATHER_FEELS_LIKE_CHANNEL_IDS")?
                    .into_iter()
                    .map(ChannelTarget::feels_like),
            )
            .collect();

        Ok(Self {
            city,
            interval: Duration::from_secs(interval_secs),
            targets,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            anyhow::bail!("WEATHER_REFRESH_INTERVAL_SECS must be greater than 0");
        }
        Ok(())
    }
}
