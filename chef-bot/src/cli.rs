//! CLI parser and the one-shot `weather` command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use weather_client::{OpenWeatherClient, OpenWeatherConfig, WeatherClient};

use crate::config::{BotConfig, WeatherLoopConfig};
use crate::weather::{feels_like_channel_name, temperature_channel_name};

#[derive(Parser)]
#[command(name = "chef-bot")]
#[command(about = "Discord chef bot: recipes from text or photos, weather channel names", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Discord bot (config from env; token can override DISCORD_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Fetch the weather once and print the channel names the bot would set.
    Weather {
        /// Overrides WEATHER_CITY.
        #[arg(short, long)]
        city: Option<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides DISCORD_BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Fetches the current weather for `city` (or WEATHER_CITY) and returns the temperature and
/// feels-like channel names. Needs only the OpenWeatherMap settings.
pub async fn preview_weather(city: Option<String>) -> Result<(String, String)> {
    let api = OpenWeatherConfig::from_env()?;
    api.validate()?;
    let city = match city {
        Some(c) => c,
        None => WeatherLoopConfig::from_env()?.city,
    };
    let client = OpenWeatherClient::from_config(&api)?;
    let snapshot = client
        .get_weather(&city)
        .await
        .with_context(|| format!("Failed to fetch weather for {}", city))?;
    Ok((
        temperature_channel_name(&snapshot.city, snapshot.temperature),
        feels_like_channel_name(snapshot.feels_like),
    ))
}
