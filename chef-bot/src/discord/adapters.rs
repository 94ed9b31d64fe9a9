//! Serenity/poise implementations of the core traits.

use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude as serenity;

use crate::context::AppContext;
use crate::core::{Bot, BotError, ImageAttachment, Responder, Result, REPLY_EMBED_COLOR};

/// Poise context carrying the app context and our error type.
pub type Context<'a> = poise::Context<'a, AppContext, BotError>;

impl From<serenity::Error> for BotError {
    fn from(e: serenity::Error) -> Self {
        BotError::Platform(e.to_string())
    }
}

/// Converts a Discord attachment to the core type.
pub fn to_core_attachment(a: &serenity::Attachment) -> ImageAttachment {
    ImageAttachment::new(a.url.clone(), a.filename.clone(), a.content_type.clone())
}

/// [`Bot`] over the Discord REST API.
pub struct DiscordBot {
    http: Arc<serenity::Http>,
}

impl DiscordBot {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Bot for DiscordBot {
    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<()> {
        serenity::ChannelId::new(channel_id)
            .edit(self.http.as_ref(), serenity::EditChannel::new().name(name))
            .await?;
        Ok(())
    }
}

/// [`Responder`] replying within a poise command invocation.
pub struct PoiseResponder<'a> {
    ctx: Context<'a>,
}

impl<'a> PoiseResponder<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl<'a> Responder for PoiseResponder<'a> {
    async fn reply_embed(&self, text: &str) -> Result<()> {
        let embed = serenity::CreateEmbed::new()
            .description(text)
            .colour(REPLY_EMBED_COLOR);
        self.ctx
            .send(poise::CreateReply::default().embed(embed).reply(true))
            .await?;
        Ok(())
    }

    async fn reply_text(&self, text: &str) -> Result<()> {
        self.ctx
            .send(poise::CreateReply::default().content(text).reply(true))
            .await?;
        Ok(())
    }
}
