//! Command handlers: one inbound command in, one or more replies out.
//!
//! Platform-independent; the Discord commands in [`crate::discord::commands`] adapt their
//! context to a [`Responder`](crate::core::Responder) and call these.

mod ask;
mod force_update;
mod upload;

pub use ask::handle_ask;
pub use force_update::{handle_force_update, summarize_report};
pub use upload::handle_upload;

use llm_client::LlmError;
use tracing::{error, info};

use crate::chunk::{chunk, EMBED_DESCRIPTION_LIMIT};
use crate::core::{Responder, Result};

// --- User-facing fallback messages ---
pub const MSG_NO_RESPONSE: &str = "No response from ChatGPT.";
pub const MSG_REQUEST_FAILED: &str =
    "Sorry, something went wrong processing your request. Please try again later.";
pub const MSG_WEATHER_FAILED: &str = "Could not fetch the weather right now.";

/// Sends the LLM outcome: the reply split into embed-sized chunks, or a failure message.
async fn reply_with_llm_result(
    responder: &dyn Responder,
    result: std::result::Result<String, LlmError>,
) -> Result<()> {
    match result {
        Ok(text) => {
            let chunks = chunk(&text, EMBED_DESCRIPTION_LIMIT);
            info!(chunks = chunks.len(), reply_len = text.chars().count(), "Sending LLM reply");
            for part in &chunks {
                responder.reply_embed(part).await?;
            }
            Ok(())
        }
        Err(LlmError::EmptyResponse) | Err(LlmError::NoChoices) => {
            responder.reply_text(MSG_NO_RESPONSE).await
        }
        Err(e) => {
            error!(error = %e, "LLM request failed");
            responder.reply_text(MSG_REQUEST_FAILED).await
        }
    }
}
