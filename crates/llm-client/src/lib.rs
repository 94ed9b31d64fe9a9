//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait (text question, image question) and an OpenAI implementation.
//! Transport-agnostic; used by the bot's command handlers.
//!
//! Every failure comes back as [`LlmError`]; nothing panics past the client boundary.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestMessage,
    ChatCompletionRequestMessageContentPartImageArgs,
    ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContent,
    ChatCompletionRequestUserMessageContentPart, ChatError, ImageUrlArgs,
};
use prompt::{ChatMessage, ContentPart, MessageContent, MessageRole};
use thiserror::Error;

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use openai_llm::OpenAILlmClient;

/// Why an LLM request produced no usable reply.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Transport, auth, or decoding failure reported by the upstream API.
    #[error("LLM request failed: {0}")]
    Api(String),

    /// The API answered without any choice.
    #[error("LLM returned no choices")]
    NoChoices,

    /// The API answered with an empty message.
    #[error("LLM returned an empty response")]
    EmptyResponse,

    /// The request could not be converted to the API format.
    #[error("Invalid LLM request: {0}")]
    InvalidRequest(String),
}

impl From<ChatError> for LlmError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::NoChoices => LlmError::NoChoices,
            ChatError::Api(api) => LlmError::Api(api.to_string()),
        }
    }
}

/// LLM client interface: one call per question, reply text or a typed failure.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Answers a plain text prompt. Caller guarantees `prompt` is non-empty.
    async fn get_text_response(&self, prompt: &str) -> Result<String, LlmError>;

    /// Answers "how do I make this?" for the image at `image_url`.
    async fn get_image_response(&self, image_url: &str) -> Result<String, LlmError>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, LlmError> {
    let invalid = |e: openai_client::ApiError| LlmError::InvalidRequest(e.to_string());
    let openai_msg: ChatCompletionRequestMessage = match (msg.role, &msg.content) {
        (MessageRole::System, content) => ChatCompletionRequestSystemMessageArgs::default()
            .content(content.text())
            .build()
            .map_err(invalid)?
            .into(),
        (MessageRole::User, MessageContent::Text(text)) => {
            ChatCompletionRequestUserMessageArgs::default()
                .content(text.clone())
                .build()
                .map_err(invalid)?
                .into()
        }
        (MessageRole::User, MessageContent::Parts(parts)) => {
            let mut openai_parts: Vec<ChatCompletionRequestUserMessageContentPart> =
                Vec::with_capacity(parts.len());
            for part in parts {
                let converted: ChatCompletionRequestUserMessageContentPart = match part {
                    ContentPart::Text(text) => ChatCompletionRequestMessageContentPartTextArgs::default()
                        .text(text.clone())
                        .build()
                        .map_err(invalid)?
                        .into(),
                    ContentPart::ImageUrl(url) => {
                        ChatCompletionRequestMessageContentPartImageArgs::default()
                            .image_url(ImageUrlArgs::default().url(url.clone()).build().map_err(invalid)?)
                            .build()
                            .map_err(invalid)?
                            .into()
                    }
                };
                openai_parts.push(converted);
            }
            ChatCompletionRequestUserMessageArgs::default()
                .content(ChatCompletionRequestUserMessageContent::Array(openai_parts))
                .build()
                .map_err(invalid)?
                .into()
        }
    };
    Ok(openai_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_error_no_choices_maps_to_no_choices() {
        assert!(matches!(LlmError::from(ChatError::NoChoices), LlmError::NoChoices));
    }

    #[test]
    fn image_message_converts_to_user_parts() {
        let msg = ChatMessage::user_with_image("what is this?", "https://x.test/a.png");
        let converted = chat_message_to_openai(&msg).unwrap();
        match converted {
            ChatCompletionRequestMessage::User(user) => match user.content {
                ChatCompletionRequestUserMessageContent::Array(parts) => assert_eq!(parts.len(), 2),
                other => panic!("expected parts, got {:?}", other),
            },
            other => panic!("expected user message, got {:?}", other),
        }
    }

    #[test]
    fn system_message_converts() {
        let converted = chat_message_to_openai(&ChatMessage::system("be a chef")).unwrap();
        assert!(matches!(converted, ChatCompletionRequestMessage::System(_)));
    }
}
