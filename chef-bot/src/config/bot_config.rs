//! BotConfig: BaseConfig + LLM + weather API + weather loop. Use load() for env-based loading.

use anyhow::Result;
use llm_client::{EnvLlmConfig, LlmConfig};
use weather_client::OpenWeatherConfig;

use super::{BaseConfig, WeatherLoopConfig};

/// Bot config. Use BotConfig::load() for env-based loading, then validate().
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub llm: EnvLlmConfig,
    pub weather_api: OpenWeatherConfig,
    pub weather_loop: WeatherLoopConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides DISCORD_BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(token)?,
            llm: EnvLlmConfig::from_env()?,
            weather_api: OpenWeatherConfig::from_env()?,
            weather_loop: WeatherLoopConfig::from_env()?,
        })
    }

    /// Validate config. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.weather_api.validate()?;
        self.weather_loop.validate()?;
        if !has_http_scheme(self.llm.base_url()) {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.llm.base_url());
        }
        Ok(())
    }

    pub fn discord_token(&self) -> &str {
        &self.base.discord_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn llm_config(&self) -> &dyn LlmConfig {
        &self.llm
    }
}

fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
