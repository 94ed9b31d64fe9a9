//! # Chef bot
//!
//! Discord bot that answers cooking questions and identifies dishes from photos through an
//! OpenAI-compatible API, keeps weather readings in channel names, and serves a small
//! status page. Config comes from env; [`run_bot`] wires everything and runs the client.

pub mod chunk;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod discord;
pub mod handlers;
pub mod runner;
pub mod status;
pub mod weather;

pub use cli::{load_config, preview_weather, Cli, Commands};
pub use config::BotConfig;
pub use context::AppContext;
pub use crate::core::{
    init_tracing, Bot, BotError, CommandError, ImageAttachment, Responder, Result,
};
pub use runner::{build_app_context, run_bot};
pub use status::{create_router, spawn_status_server, BotStats, GuildStats, StatsSource};
pub use weather::{ChannelTarget, RefreshReport, WeatherRefresher};
