//! Discord transport: poise commands, serenity adapters for the core traits, and the
//! cache-backed stats source for the status server.

pub mod adapters;
pub mod commands;
pub mod runner;
pub mod stats;

pub use adapters::{to_core_attachment, Context, DiscordBot, PoiseResponder};
pub use runner::{build_framework, build_client, FrameworkSettings};
pub use stats::CacheStats;
