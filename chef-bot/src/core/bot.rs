//! Platform abstractions used by handlers and the weather loop.
//!
//! [`Bot`] covers side effects outside a command (channel renames); [`Responder`] is the
//! reply surface of one in-flight command. Both are transport-agnostic; the Discord
//! implementations live in [`crate::discord`].

use async_trait::async_trait;

use super::error::Result;

/// Embed accent color used for LLM replies.
pub const REPLY_EMBED_COLOR: u32 = 0x00ff00;

/// Platform-wide actions not tied to an incoming command.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Overwrites the display name of `channel_id`. Issued even when the name is unchanged.
    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<()>;
}

/// Reply surface of a single command invocation.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Sends one reply rendered as an embed description (at most 4096 chars on Discord).
    async fn reply_embed(&self, text: &str) -> Result<()>;

    /// Sends one plain-text reply.
    async fn reply_text(&self, text: &str) -> Result<()>;
}
