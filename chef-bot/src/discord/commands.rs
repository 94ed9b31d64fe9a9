//! Poise commands: `/gpt ask`, `/gpt upload`, `/force_update` (and their prefix forms).
//!
//! Each command defers (typing indicator), adapts its context, and hands off to
//! [`crate::handlers`].

use poise::serenity_prelude as serenity;

use super::adapters::{to_core_attachment, Context, PoiseResponder};
use crate::context::AppContext;
use crate::core::BotError;
use crate::handlers;

/// Ask the chef, or show the chef a dish.
#[poise::command(
    slash_command,
    prefix_command,
    subcommands("ask", "upload"),
    subcommand_required
)]
pub async fn gpt(_ctx: Context<'_>) -> Result<(), BotError> {
    Ok(())
}

/// Ask the chef a cooking question.
#[poise::command(slash_command, prefix_command)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "What do you want to cook?"]
    #[rest]
    prompt: Option<String>,
) -> Result<(), BotError> {
    ctx.defer().await?;
    handlers::handle_ask(
        ctx.data().llm.as_ref(),
        &PoiseResponder::new(ctx),
        prompt.as_deref(),
    )
    .await
}

/// Upload a photo of a dish and learn how to make it.
#[poise::command(slash_command, prefix_command)]
pub async fn upload(
    ctx: Context<'_>,
    #[description = "A photo of the food"] image: Option<serenity::Attachment>,
) -> Result<(), BotError> {
    ctx.defer().await?;
    let attachment = image.as_ref().map(to_core_attachment);
    handlers::handle_upload(
        ctx.data().llm.as_ref(),
        &PoiseResponder::new(ctx),
        attachment.as_ref(),
    )
    .await
}

/// Refresh the weather channel names now.
#[poise::command(slash_command, prefix_command)]
pub async fn force_update(ctx: Context<'_>) -> Result<(), BotError> {
    ctx.defer().await?;
    handlers::handle_force_update(&ctx.data().refresher, &PoiseResponder::new(ctx)).await
}

/// Every top-level command, in registration order.
pub fn all() -> Vec<poise::Command<AppContext, BotError>> {
    vec![gpt(), force_update()]
}
