//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`CommandError`] is a rejected user input whose
//! `Display` text is sent back to the user as-is.

use llm_client::LlmError;
use thiserror::Error;
use weather_client::WeatherError;

/// Top-level error for the bot (platform, LLM, weather, config, IO, command input).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Platform error: {0}")]
    Platform(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// User input rejected before any upstream call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Please provide a prompt.")]
    MissingPrompt,

    #[error("No attachments found, upload an image of a food.")]
    MissingAttachment,

    #[error("That file is not an image, upload an image of a food.")]
    NotAnImage,
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
