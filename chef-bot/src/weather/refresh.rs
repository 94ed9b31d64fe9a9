//! Weather refresh loop: fetch a snapshot, rename the configured channels, repeat.
//!
//! Each refresh attempts every target and logs each failure; earlier renames are not rolled
//! back. Scheduled ticks skip channels whose last applied name is unchanged; a forced refresh
//! writes all of them. Refreshes are serialized by the `last_applied` lock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, instrument, warn};
use weather_client::{WeatherClient, WeatherError, WeatherSnapshot};

use super::band::{feels_like_channel_name, temperature_channel_name, Reading};
use crate::core::Bot;

/// One channel whose name shows a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelTarget {
    pub channel_id: u64,
    pub reading: Reading,
}

impl ChannelTarget {
    pub fn temperature(channel_id: u64) -> Self {
        Self {
            channel_id,
            reading: Reading::Temperature,
        }
    }

    pub fn feels_like(channel_id: u64) -> Self {
        Self {
            channel_id,
            reading: Reading::FeelsLike,
        }
    }

    /// Display name for this target given a snapshot.
    pub fn name_for(&self, snapshot: &WeatherSnapshot) -> String {
        match self.reading {
            Reading::Temperature => temperature_channel_name(&snapshot.city, snapshot.temperature),
            Reading::FeelsLike => feels_like_channel_name(snapshot.feels_like),
        }
    }
}

/// Outcome of one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshReport {
    pub snapshot: WeatherSnapshot,
    pub renamed: usize,
    pub unchanged: usize,
    pub failed: usize,
}

pub struct WeatherRefresher {
    weather: Arc<dyn WeatherClient>,
    bot: Arc<dyn Bot>,
    city: String,
    targets: Vec<ChannelTarget>,
    /// Channel id → name last written successfully.
    last_applied: Mutex<HashMap<u64, String>>,
}

impl WeatherRefresher {
    pub fn new(
        weather: Arc<dyn WeatherClient>,
        bot: Arc<dyn Bot>,
        city: impl Into<String>,
        targets: Vec<ChannelTarget>,
    ) -> Self {
        Self {
            weather,
            bot,
            city: city.into(),
            targets,
            last_applied: Mutex::new(HashMap::new()),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn targets(&self) -> &[ChannelTarget] {
        &self.targets
    }

    /// Fetches the weather and renames every target. With `force`, unchanged names are
    /// written anyway. Fails only when the fetch fails; rename failures are counted.
    #[instrument(skip(self), fields(city = %self.city))]
    pub async fn refresh(&self, force: bool) -> Result<RefreshReport, WeatherError> {
        let mut last_applied = self.last_applied.lock().await;
        let snapshot = self.weather.get_weather(&self.city).await?;

        let mut report = RefreshReport {
            snapshot: snapshot.clone(),
            renamed: 0,
            unchanged: 0,
            failed: 0,
        };

        for target in &self.targets {
            let name = target.name_for(&snapshot);
            if !force && last_applied.get(&target.channel_id) == Some(&name) {
                report.unchanged += 1;
                continue;
            }
            match self.bot.rename_channel(target.channel_id, &name).await {
                Ok(()) => {
                    info!(channel_id = target.channel_id, name = %name, "Channel renamed");
                    last_applied.insert(target.channel_id, name);
                    report.renamed += 1;
                }
                Err(e) => {
                    error!(channel_id = target.channel_id, name = %name, error = %e, "Channel rename failed");
                    last_applied.remove(&target.channel_id);
                    report.failed += 1;
                }
            }
        }

        info!(
            temperature = snapshot.temperature,
            feels_like = snapshot.feels_like,
            renamed = report.renamed,
            unchanged = report.unchanged,
            failed = report.failed,
            "Weather refresh finished"
        );
        Ok(report)
    }

    /// Ticks every `interval` (first tick immediately) until the process exits. A failed
    /// tick is logged and the next one runs on schedule.
    pub async fn run(self: Arc<Self>, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(
            city = %self.city,
            targets = self.targets.len(),
            interval_secs = interval.as_secs(),
            "Weather refresh loop started"
        );
        loop {
            ticker.tick().await;
            if let Err(e) = self.refresh(false).await {
                warn!(error = %e, "Weather refresh tick failed");
            }
        }
    }

    /// Spawns [`run`](Self::run) on the current runtime.
    pub fn spawn(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(self.run(interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BotError, Result as BotResult};
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Mutex as StdMutex;

    mock! {
        pub Weather {}
        #[async_trait]
        impl WeatherClient for Weather {
            async fn get_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;
        }
    }

    /// Records renames; fails for ids in `failing`.
    #[derive(Default)]
    struct RecordingBot {
        renames: StdMutex<Vec<(u64, String)>>,
        failing: Vec<u64>,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn rename_channel(&self, channel_id: u64, name: &str) -> BotResult<()> {
            if self.failing.contains(&channel_id) {
                return Err(BotError::Platform("Unknown Channel".to_string()));
            }
            self.renames.lock().unwrap().push((channel_id, name.to_string()));
            Ok(())
        }
    }

    fn snapshot(temperature: f64, feels_like: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            city: "Toronto".to_string(),
            temperature,
            feels_like,
        }
    }

    fn weather_returning(snapshots: Vec<WeatherSnapshot>) -> MockWeather {
        let mut weather = MockWeather::new();
        let mut queue = snapshots.into_iter();
        weather
            .expect_get_weather()
            .returning(move |_| Ok(queue.next().expect("more snapshots than expected")));
        weather
    }

    fn targets() -> Vec<ChannelTarget> {
        vec![
            ChannelTarget::temperature(1),
            ChannelTarget::feels_like(2),
            ChannelTarget::temperature(3),
            ChannelTarget::feels_like(4),
        ]
    }

    #[tokio::test]
    async fn renames_every_target() {
        let bot = Arc::new(RecordingBot::default());
        let refresher = WeatherRefresher::new(
            Arc::new(weather_returning(vec![snapshot(-3.2, -8.0)])),
            bot.clone(),
            "Toronto",
            targets(),
        );

        let report = refresher.refresh(false).await.unwrap();

        assert_eq!(report.renamed, 4);
        let renames = bot.renames.lock().unwrap().clone();
        assert_eq!(renames[0], (1, "Toronto: -3.2°C ❄".to_string()));
        assert_eq!(renames[1], (2, "Feels like: -8.0°C ❄".to_string()));
    }

    #[tokio::test]
    async fn scheduled_tick_skips_unchanged_but_force_writes() {
        let bot = Arc::new(RecordingBot::default());
        let refresher = WeatherRefresher::new(
            Arc::new(weather_returning(vec![
                snapshot(10.0, 9.0),
                snapshot(10.0, 7.0),
                snapshot(10.0, 7.0),
            ])),
            bot.clone(),
            "Toronto",
            targets(),
        );

        refresher.refresh(false).await.unwrap();
        let second = refresher.refresh(false).await.unwrap();
        assert_eq!((second.renamed, second.unchanged), (2, 2));

        let forced = refresher.refresh(true).await.unwrap();
        assert_eq!((forced.renamed, forced.unchanged), (4, 0));
        assert_eq!(bot.renames.lock().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn partial_failure_attempts_all_and_retries_failed_next_time() {
        let bot = Arc::new(RecordingBot {
            failing: vec![2],
            ..Default::default()
        });
        let refresher = WeatherRefresher::new(
            Arc::new(weather_returning(vec![snapshot(1.0, 0.5), snapshot(1.0, 0.5)])),
            bot.clone(),
            "Toronto",
            targets(),
        );

        let first = refresher.refresh(false).await.unwrap();
        assert_eq!((first.renamed, first.failed), (3, 1));

        let second = refresher.refresh(false).await.unwrap();
        assert_eq!((second.renamed, second.unchanged, second.failed), (0, 3, 1));
    }

    #[tokio::test]
    async fn fetch_failure_renames_nothing() {
        let mut weather = MockWeather::new();
        weather
            .expect_get_weather()
            .returning(|_| Err(WeatherError::Malformed("missing field `temp`".into())));
        let bot = Arc::new(RecordingBot::default());
        let refresher = WeatherRefresher::new(Arc::new(weather), bot.clone(), "Toronto", targets());

        assert!(refresher.refresh(true).await.is_err());
        assert!(bot.renames.lock().unwrap().is_empty());
    }
}
