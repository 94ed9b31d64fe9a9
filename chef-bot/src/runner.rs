use std::sync::{Arc, OnceLock};

use anyhow::{Context as _, Result};
use llm_client::{LlmConfig, OpenAILlmClient};
use poise::serenity_prelude as serenity;
use tracing::{info, instrument};
use weather_client::OpenWeatherClient;

use crate::config::BotConfig;
use crate::context::AppContext;
use crate::core::init_tracing;
use crate::discord::{build_client, build_framework, CacheStats, DiscordBot, FrameworkSettings};
use crate::status::spawn_status_server;
use crate::weather::WeatherRefresher;

/// Builds the shared services from config. The HTTP client here is used for channel renames.
pub fn build_app_context(config: &BotConfig) -> Result<AppContext> {
    let llm = Arc::new(OpenAILlmClient::from_config(config.llm_config()));
    let weather = Arc::new(
        OpenWeatherClient::from_config(&config.weather_api)
            .context("Failed to build weather client")?,
    );
    let http = Arc::new(serenity::Http::new(config.discord_token()));
    let refresher = Arc::new(WeatherRefresher::new(
        weather,
        Arc::new(DiscordBot::new(http)),
        config.weather_loop.city.clone(),
        config.weather_loop.targets.clone(),
    ));
    Ok(AppContext::new(llm, refresher))
}

/// Main entry: validate config, init logging, build services, start the status server,
/// then run the Discord client until it stops.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file()).context("Failed to initialize logging")?;

    info!(
        model = %config.llm.text_model(),
        vision_model = %config.llm.vision_model(),
        city = %config.weather_loop.city,
        weather_channels = config.weather_loop.targets.len(),
        guilds = config.base.guild_ids.len(),
        prefix = %config.base.command_prefix,
        "Initializing bot"
    );

    let app = build_app_context(&config)?;
    let bot_name = Arc::new(OnceLock::new());
    let framework = build_framework(
        app,
        FrameworkSettings {
            command_prefix: config.base.command_prefix.clone(),
            guild_ids: config.base.guild_ids.clone(),
            weather_interval: config.weather_loop.interval,
        },
        bot_name.clone(),
    );

    let mut client = build_client(config.discord_token(), framework)
        .await
        .context("Failed to build Discord client")?;

    let stats = Arc::new(CacheStats::new(client.cache.clone(), bot_name));
    spawn_status_server(config.base.status_port, stats)
        .await
        .with_context(|| format!("Failed to bind status server on port {}", config.base.status_port))?;

    info!("Connecting to Discord");
    client.start().await.context("Discord client stopped")?;
    Ok(())
}
