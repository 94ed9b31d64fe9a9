//! Poise framework setup: options, error reporting, command registration, and starting the
//! weather loop once the bot is ready.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

use super::adapters::Context;
use super::commands;
use crate::context::AppContext;
use crate::core::BotError;
use crate::handlers::MSG_REQUEST_FAILED;

/// Registers `commands` in each guild of `guild_ids`, or globally when empty.
async fn register_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<AppContext, BotError>],
    guild_ids: &[u64],
) -> Result<(), BotError> {
    if guild_ids.is_empty() {
        poise::builtins::register_globally(ctx, commands).await?;
        info!(count = commands.len(), "Commands registered globally");
        return Ok(());
    }
    for &id in guild_ids {
        poise::builtins::register_in_guild(ctx, commands, serenity::GuildId::new(id)).await?;
        info!(guild_id = id, count = commands.len(), "Commands registered in guild");
    }
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, AppContext, BotError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                command = %ctx.command().qualified_name,
                user = %ctx.author().name,
                error = %error,
                "Command failed"
            );
            if let Err(e) = ctx.say(MSG_REQUEST_FAILED).await {
                error!(error = %e, "Failed to send error reply");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = %e, "Error while handling framework error");
            }
        }
    }
}

async fn log_command(ctx: Context<'_>) {
    info!(
        command = %ctx.command().qualified_name,
        user = %ctx.author().name,
        channel_id = ctx.channel_id().get(),
        "Command received"
    );
}

/// Options for [`build_framework`] that come from config.
#[derive(Debug, Clone)]
pub struct FrameworkSettings {
    pub command_prefix: String,
    pub guild_ids: Vec<u64>,
    pub weather_interval: Duration,
}

/// Builds the poise framework. `bot_name` is filled on Ready for the status server.
pub fn build_framework(
    app: AppContext,
    settings: FrameworkSettings,
    bot_name: Arc<OnceLock<String>>,
) -> poise::Framework<AppContext, BotError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(settings.command_prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            pre_command: |ctx| Box::pin(log_command(ctx)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!(bot = %ready.user.name, guilds = ready.guilds.len(), "Logged in");
                let _ = bot_name.set(ready.user.name.clone());

                register_commands(ctx, &framework.options().commands, &settings.guild_ids).await?;

                if app.refresher.targets().is_empty() {
                    warn!("No weather channels configured; weather refresh loop not started");
                } else {
                    app.refresher.clone().spawn(settings.weather_interval);
                }
                Ok(app)
            })
        })
        .build()
}

/// Builds the gateway client (not yet connected). Message content is needed for prefix commands.
pub async fn build_client(
    token: &str,
    framework: poise::Framework<AppContext, BotError>,
) -> Result<serenity::Client, BotError> {
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;
    let client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;
    Ok(client)
}
