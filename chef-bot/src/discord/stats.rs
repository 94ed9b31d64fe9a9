//! [`StatsSource`] backed by the serenity cache.

use std::sync::{Arc, OnceLock};

use poise::serenity_prelude as serenity;

use crate::status::{BotStats, GuildStats, StatsSource};

pub struct CacheStats {
    cache: Arc<serenity::Cache>,
    /// Set from the Ready event.
    bot_name: Arc<OnceLock<String>>,
}

impl CacheStats {
    pub fn new(cache: Arc<serenity::Cache>, bot_name: Arc<OnceLock<String>>) -> Self {
        Self { cache, bot_name }
    }
}

impl StatsSource for CacheStats {
    fn snapshot(&self) -> BotStats {
        let mut guilds: Vec<GuildStats> = self
            .cache
            .guilds()
            .into_iter()
            .filter_map(|id| {
                self.cache.guild(id).map(|g| GuildStats {
                    name: g.name.clone(),
                    members: g.member_count,
                })
            })
            .collect();
        guilds.sort_by(|a, b| a.name.cmp(&b.name));
        BotStats {
            bot_name: self.bot_name.get().cloned(),
            guilds,
        }
    }
}
