//! Hand-written test doubles for the LLM, the reply surface, the weather API and the platform.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chef_bot::{Bot, BotError, Responder, Result};
use llm_client::{LlmClient, LlmError};
use weather_client::{WeatherClient, WeatherError, WeatherSnapshot};

/// What [`MockLlm`] answers with.
#[derive(Debug, Clone)]
pub enum LlmReply {
    Text(String),
    Empty,
    Fail(String),
}

/// Records every request and answers with a fixed reply.
pub struct MockLlm {
    reply: LlmReply,
    pub text_prompts: Mutex<Vec<String>>,
    pub image_urls: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn new(reply: LlmReply) -> Self {
        Self {
            reply,
            text_prompts: Mutex::new(Vec::new()),
            image_urls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.text_prompts.lock().unwrap().len() + self.image_urls.lock().unwrap().len()
    }

    fn answer(&self) -> std::result::Result<String, LlmError> {
        match &self.reply {
            LlmReply::Text(t) => Ok(t.clone()),
            LlmReply::Empty => Err(LlmError::EmptyResponse),
            LlmReply::Fail(msg) => Err(LlmError::Api(msg.clone())),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn get_text_response(&self, prompt: &str) -> std::result::Result<String, LlmError> {
        self.text_prompts.lock().unwrap().push(prompt.to_string());
        self.answer()
    }

    async fn get_image_response(&self, image_url: &str) -> std::result::Result<String, LlmError> {
        self.image_urls.lock().unwrap().push(image_url.to_string());
        self.answer()
    }
}

/// One reply sent through [`RecordingResponder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Embed(String),
    Text(String),
}

#[derive(Default)]
pub struct RecordingResponder {
    pub sent: Mutex<Vec<Sent>>,
}

impl RecordingResponder {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn reply_embed(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Embed(text.to_string()));
        Ok(())
    }

    async fn reply_text(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
        Ok(())
    }
}

/// Answers from a queue; an exhausted queue is a malformed-response error.
pub struct QueuedWeather {
    responses: Mutex<VecDeque<std::result::Result<WeatherSnapshot, WeatherError>>>,
    pub calls: Mutex<Vec<String>>,
}

impl QueuedWeather {
    pub fn new(responses: Vec<std::result::Result<WeatherSnapshot, WeatherError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeatherClient for QueuedWeather {
    async fn get_weather(&self, city: &str) -> std::result::Result<WeatherSnapshot, WeatherError> {
        self.calls.lock().unwrap().push(city.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(WeatherError::Malformed("no more responses".to_string())))
    }
}

pub fn snapshot(city: &str, temperature: f64, feels_like: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        city: city.to_string(),
        temperature,
        feels_like,
    }
}

/// Records channel renames; ids in `failing` return a platform error.
#[derive(Default)]
pub struct RecordingBot {
    pub renames: Mutex<Vec<(u64, String)>>,
    pub failing: Vec<u64>,
}

impl RecordingBot {
    pub fn renames(&self) -> Vec<(u64, String)> {
        self.renames.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<()> {
        if self.failing.contains(&channel_id) {
            return Err(BotError::Platform("Missing Permissions".to_string()));
        }
        self.renames.lock().unwrap().push((channel_id, name.to_string()));
        Ok(())
    }
}
