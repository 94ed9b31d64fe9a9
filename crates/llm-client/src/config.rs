//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// Default text model.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o";
/// Default vision model.
pub const DEFAULT_VISION_MODEL: &str = "gpt-4-turbo";
/// Default sampling temperature for text questions.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn text_model(&self) -> &str;
    fn vision_model(&self) -> &str;
    fn temperature(&self) -> Option<f32>;
    fn system_prompt(&self) -> Option<&str>;
    fn image_system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub text_model: String,
    pub vision_model: String,
    /// `None` leaves the provider default (`LLM_TEMPERATURE=none`).
    pub temperature: Option<f32>,
    pub system_prompt: Option<String>,
    pub image_system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn text_model(&self) -> &str {
        &self.text_model
    }
    fn vision_model(&self) -> &str {
        &self.vision_model
    }
    fn temperature(&self) -> Option<f32> {
        self.temperature
    }
    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
    fn image_system_prompt(&self) -> Option<&str> {
        self.image_system_prompt.as_deref()
    }
}

/// Parses `LLM_TEMPERATURE`: unset → default, `none`/empty → `None`, otherwise a float in `[0, 2]`.
fn parse_temperature(raw: Option<String>) -> Result<Option<f32>> {
    let Some(raw) = raw else {
        return Ok(Some(DEFAULT_TEMPERATURE));
    };
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let t: f32 = raw
        .parse()
        .with_context(|| format!("LLM_TEMPERATURE is not a number: {}", raw))?;
    if !(0.0..=2.0).contains(&t) {
        anyhow::bail!("LLM_TEMPERATURE must be between 0 and 2, got {}", t);
    }
    Ok(Some(t))
}

fn non_blank(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl EnvLlmConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let text_model = non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string());
        let vision_model =
            non_blank("OPENAI_VISION_MODEL").unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string());
        let temperature = parse_temperature(env::var("LLM_TEMPERATURE").ok())?;
        Ok(Self {
            openai_api_key,
            openai_base_url,
            text_model,
            vision_model,
            temperature,
            system_prompt: non_blank("LLM_SYSTEM_PROMPT"),
            image_system_prompt: non_blank("LLM_IMAGE_SYSTEM_PROMPT"),
        })
    }
}
