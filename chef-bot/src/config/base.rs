//! Base config: Discord connection, command surface, status server, logging. Loaded from env.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_COMMAND_PREFIX: &str = "!";
pub const DEFAULT_STATUS_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILE: &str = "logs/chef-bot.log";

/// Base config: platform-related, logging, status server only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// DISCORD_BOT_TOKEN
    pub discord_token: String,
    /// COMMAND_PREFIX for prefix commands (slash commands are always registered)
    pub command_prefix: String,
    /// GUILD_IDS: register commands in these guilds only; empty registers globally
    pub guild_ids: Vec<u64>,
    /// STATUS_PORT: status server listens on 0.0.0.0:<port>
    pub status_port: u16,
    /// LOG_FILE
    pub log_file: String,
}

/// Parses a comma-separated list of non-zero numeric ids; blanks are skipped.
pub fn parse_id_list(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let id = s
                .parse::<u64>()
                .with_context(|| format!("not a numeric id: {}", s))?;
            if id == 0 {
                anyhow::bail!("id must be non-zero");
            }
            Ok(id)
        })
        .collect()
}

/// Reads `key` as an id list; unset means empty.
pub(crate) fn env_id_list(key: &str) -> Result<Vec<u64>> {
    match env::var(key) {
        Ok(raw) => parse_id_list(&raw).with_context(|| format!("invalid {}", key)),
        Err(_) => Ok(Vec::new()),
    }
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides DISCORD_BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let discord_token = match token {
            Some(t) => t,
            None => env::var("DISCORD_BOT_TOKEN").context("DISCORD_BOT_TOKEN not set")?,
        };
        let command_prefix = env::var("COMMAND_PREFIX")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());
        let guild_ids = env_id_list("GUILD_IDS")?;
        let status_port = match env::var("STATUS_PORT") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("STATUS_PORT is not a port number: {}", s))?,
            Err(_) => DEFAULT_STATUS_PORT,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            discord_token,
            command_prefix,
            guild_ids,
            status_port,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.discord_token.trim().is_empty() {
            anyhow::bail!("DISCORD_BOT_TOKEN is empty");
        }
        if self.command_prefix.chars().any(char::is_whitespace) {
            anyhow::bail!("COMMAND_PREFIX must not contain whitespace: {:?}", self.command_prefix);
        }
        Ok(())
    }
}
