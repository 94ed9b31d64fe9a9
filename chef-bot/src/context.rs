//! Application context built once at startup and handed to every command and the weather loop.

use std::sync::Arc;

use llm_client::LlmClient;

use crate::weather::WeatherRefresher;

/// Shared services. Cloning is cheap; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppContext {
    pub llm: Arc<dyn LlmClient>,
    pub refresher: Arc<WeatherRefresher>,
}

impl AppContext {
    pub fn new(llm: Arc<dyn LlmClient>, refresher: Arc<WeatherRefresher>) -> Self {
        Self { llm, refresher }
    }
}
