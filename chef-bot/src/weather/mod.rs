//! Weather channel names: temperature bands and the periodic refresh loop.

pub mod band;
pub mod refresh;

pub use band::{
    feels_like_channel_name, round_for_display, temperature_channel_name, Reading, TemperatureBand,
};
pub use refresh::{ChannelTarget, RefreshReport, WeatherRefresher};
