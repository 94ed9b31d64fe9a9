//! Status web server: read-only liveness and guild statistics over HTTP.
//!
//! - `GET /` HTML dashboard
//! - `GET /api/status` `{status, bot_name, server_count, user_count}`
//! - `GET /api/stats` `{guilds: [{name, members}], total_guilds, total_members}`
//!
//! No auth, no mutation. Numbers come from a [`StatsSource`] (the Discord cache in production).

mod dashboard;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::core::Result;

/// Member count of one guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildStats {
    pub name: String,
    pub members: u64,
}

/// Point-in-time view of the bot's guilds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotStats {
    /// `None` until the bot has connected and knows its own user.
    pub bot_name: Option<String>,
    pub guilds: Vec<GuildStats>,
}

impl BotStats {
    pub fn total_members(&self) -> u64 {
        self.guilds.iter().map(|g| g.members).sum()
    }
}

/// Source of in-memory bot state.
pub trait StatsSource: Send + Sync {
    fn snapshot(&self) -> BotStats;
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    bot_name: Option<String>,
    server_count: usize,
    user_count: u64,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    guilds: Vec<GuildStats>,
    total_guilds: usize,
    total_members: u64,
}

type SharedSource = Arc<dyn StatsSource>;

async fn index(State(source): State<SharedSource>) -> impl IntoResponse {
    Html(dashboard::render(&source.snapshot()))
}

async fn api_status(State(source): State<SharedSource>) -> impl IntoResponse {
    let stats = source.snapshot();
    Json(StatusResponse {
        status: if stats.bot_name.is_some() { "online" } else { "starting" },
        server_count: stats.guilds.len(),
        user_count: stats.total_members(),
        bot_name: stats.bot_name,
    })
}

async fn api_stats(State(source): State<SharedSource>) -> impl IntoResponse {
    let stats = source.snapshot();
    Json(StatsResponse {
        total_guilds: stats.guilds.len(),
        total_members: stats.total_members(),
        guilds: stats.guilds,
    })
}

/// Builds the status router over `source`.
pub fn create_router(source: SharedSource) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(api_status))
        .route("/api/stats", get(api_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(source)
}

/// Binds `0.0.0.0:port` and serves in a background task. Bind errors are returned;
/// a server that stops later is logged.
pub async fn spawn_status_server(port: u16, source: SharedSource) -> Result<JoinHandle<()>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Status server listening");
    let app = create_router(source);
    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "Status server stopped");
        }
    }))
}
