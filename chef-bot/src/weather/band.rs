//! Temperature bands and the channel names derived from a snapshot.

/// Band a temperature falls in: `< 0`, `0..25`, `>= 25` (°C).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Freezing,
    Mild,
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(t: f64) -> Self {
        if t < 0.0 {
            TemperatureBand::Freezing
        } else if t < 25.0 {
            TemperatureBand::Mild
        } else {
            TemperatureBand::Hot
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "\u{2744}",
            TemperatureBand::Mild => "\u{1F343}",
            TemperatureBand::Hot => "\u{1F525}",
        }
    }
}

/// Which reading a channel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Temperature,
    FeelsLike,
}

/// Rounds to the one decimal shown in channel names. Negative zero becomes `0.0`.
pub fn round_for_display(celsius: f64) -> f64 {
    (celsius * 10.0).round() / 10.0 + 0.0
}

/// `"Toronto: -3.2°C ❄"`. The band is taken from the displayed value.
pub fn temperature_channel_name(city: &str, celsius: f64) -> String {
    let shown = round_for_display(celsius);
    format!(
        "{}: {:.1}°C {}",
        city,
        shown,
        TemperatureBand::from_celsius(shown).emoji()
    )
}

/// `"Feels like: -8.0°C ❄"`
pub fn feels_like_channel_name(celsius: f64) -> String {
    let shown = round_for_display(celsius);
    format!(
        "Feels like: {:.1}°C {}",
        shown,
        TemperatureBand::from_celsius(shown).emoji()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(TemperatureBand::from_celsius(-0.1), TemperatureBand::Freezing);
        assert_eq!(TemperatureBand::from_celsius(0.0), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_celsius(24.99), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_celsius(25.0), TemperatureBand::Hot);
        assert_eq!(TemperatureBand::from_celsius(41.0), TemperatureBand::Hot);
    }

    #[test]
    fn emoji_follows_rounded_value_at_band_edges() {
        assert_eq!(temperature_channel_name("Toronto", 24.96), "Toronto: 25.0°C 🔥");
        assert_eq!(temperature_channel_name("Toronto", 24.94), "Toronto: 24.9°C 🍃");
        assert_eq!(temperature_channel_name("Toronto", -0.04), "Toronto: 0.0°C 🍃");
        assert_eq!(temperature_channel_name("Toronto", -0.06), "Toronto: -0.1°C ❄");
        assert_eq!(feels_like_channel_name(24.96), "Feels like: 25.0°C 🔥");
        assert_eq!(feels_like_channel_name(-0.04), "Feels like: 0.0°C 🍃");
    }

    #[test]
    fn emojis() {
        assert_eq!(TemperatureBand::Freezing.emoji(), "❄");
        assert_eq!(TemperatureBand::Mild.emoji(), "🍃");
        assert_eq!(TemperatureBand::Hot.emoji(), "🔥");
    }

    #[test]
    fn temperature_name_matches_display_format() {
        assert_eq!(temperature_channel_name("Toronto", -3.2), "Toronto: -3.2°C ❄");
        assert_eq!(temperature_channel_name("Toronto", 0.0), "Toronto: 0.0°C 🍃");
        assert_eq!(temperature_channel_name("Toronto", 25.0), "Toronto: 25.0°C 🔥");
    }

    #[test]
    fn feels_like_name_uses_its_own_band() {
        assert_eq!(feels_like_channel_name(-8.0), "Feels like: -8.0°C ❄");
        assert_eq!(feels_like_channel_name(31.0), "Feels like: 31.0°C 🔥");
    }
}
