//! OpenAI implementation of [`LlmClient`]: wraps openai-client and prepends the chef instruction.

use async_trait::async_trait;
use openai_client::{ChatOptions, OpenAIClient};
use prompt::ChatMessage;
use tracing::{error, info, instrument};

use super::config::{LlmConfig, DEFAULT_TEMPERATURE, DEFAULT_TEXT_MODEL, DEFAULT_VISION_MODEL};
use super::{chat_message_to_openai, LlmClient, LlmError};

/// LlmClient backed by the OpenAI chat completion API.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: OpenAIClient,
    text_model: String,
    vision_model: String,
    temperature: Option<f32>,
    system_prompt: Option<String>,
    image_system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::from_client(OpenAIClient::with_base_url(api_key, base_url))
    }

    /// Builds a client from any [`LlmConfig`] (models, temperature, prompts, endpoint).
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_text_model(config.text_model())
            .with_vision_model(config.vision_model())
            .with_temperature(config.temperature())
            .with_system_prompt_opt(config.system_prompt().map(str::to_string))
            .with_image_system_prompt_opt(config.image_system_prompt().map(str::to_string))
    }

    fn from_client(client: OpenAIClient) -> Self {
        Self {
            client,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
            system_prompt: None,
            image_system_prompt: None,
        }
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_vision_model(mut self, model: impl Into<String>) -> Self {
        self.vision_model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    pub fn with_image_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.image_system_prompt = prompt;
        self
    }

    /// Sends `messages` to `model` and turns an empty reply into [`LlmError::EmptyResponse`].
    async fn complete(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
        options: ChatOptions,
    ) -> Result<String, LlmError> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>, _>>()?;

        let reply = self
            .client
            .chat_completion(model, openai_messages, options)
            .await
            .map_err(|e| {
                error!(model = %model, error = %e, "LLM request failed");
                LlmError::from(e)
            })?;

        if reply.trim().is_empty() {
            error!(model = %model, "LLM returned an empty response");
            return Err(LlmError::EmptyResponse);
        }
        info!(model = %model, reply_len = reply.chars().count(), "LLM reply received");
        Ok(reply)
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn get_text_response(&self, prompt: &str) -> Result<String, LlmError> {
        let messages = prompt::text_request(self.system_prompt.as_deref(), prompt);
        let options = ChatOptions {
            temperature: self.temperature,
        };
        self.complete(&self.text_model, messages, options).await
    }

    #[instrument(skip(self))]
    async fn get_image_response(&self, image_url: &str) -> Result<String, LlmError> {
        let messages = prompt::image_request(self.image_system_prompt.as_deref(), image_url);
        self.complete(&self.vision_model, messages, ChatOptions::default())
            .await
    }
}
