use llm_client::LlmClient;
use tracing::{debug, instrument};

use super::reply_with_llm_result;
use crate::core::{CommandError, Responder, Result};

/// `ask`: rejects a blank prompt, otherwise relays it to the LLM and replies in chunks.
#[instrument(skip_all, fields(prompt_len = prompt.map(str::len).unwrap_or(0)))]
pub async fn handle_ask(
    llm: &dyn LlmClient,
    responder: &dyn Responder,
    prompt: Option<&str>,
) -> Result<()> {
    let prompt = match prompt.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p,
        None => {
            debug!("ask rejected: empty prompt");
            return responder
                .reply_text(&CommandError::MissingPrompt.to_string())
                .await;
        }
    };
    let result = llm.get_text_response(prompt).await;
    reply_with_llm_result(responder, result).await
}
