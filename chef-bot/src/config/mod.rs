//! Bot configuration: BaseConfig (Discord + status + log) + WeatherLoopConfig, plus the
//! LLM and weather API configs owned by their client crates.

mod base;
mod bot_config;
mod weather;


pub use base::{parse_id_list, BaseConfig, DEFAULT_COMMAND_PREFIX, DEFAULT_LOG_FILE, DEFAULT_STATUS_PORT};
pub use bot_config::BotConfig;
pub use weather::{WeatherLoopConfig, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_WEATHER_CITY};
