use llm_client::LlmClient;
use tracing::{debug, instrument};

use super::reply_with_llm_result;
use crate::core::{CommandError, ImageAttachment, Responder, Result};

/// Checks the attachment before any upstream call.
fn validate(attachment: Option<&ImageAttachment>) -> std::result::Result<&ImageAttachment, CommandError> {
    let attachment = attachment.ok_or(CommandError::MissingAttachment)?;
    if !attachment.is_image() {
        return Err(CommandError::NotAnImage);
    }
    Ok(attachment)
}

/// `upload`: asks the LLM how to cook the pictured dish; non-images are rejected.
#[instrument(skip_all, fields(filename = attachment.map(|a| a.filename.as_str()).unwrap_or("")))]
pub async fn handle_upload(
    llm: &dyn LlmClient,
    responder: &dyn Responder,
    attachment: Option<&ImageAttachment>,
) -> Result<()> {
    let attachment = match validate(attachment) {
        Ok(a) => a,
        Err(e) => {
            debug!(reason = %e, "upload rejected");
            return responder.reply_text(&e.to_string()).await;
        }
    };
    let result = llm.get_image_response(&attachment.url).await;
    reply_with_llm_result(responder, result).await
}
