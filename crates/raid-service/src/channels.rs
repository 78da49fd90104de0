//! Channel directory - memoized channel-by-name lookup
//!
//! Channel existence is effectively immutable for the bot's purposes, so
//! lookups are cached for the process lifetime. This is an explicit
//! fill-on-miss map, not unbounded automatic memoization.

use std::sync::Arc;

use dashmap::DashMap;

use raid_core::{ChatGateway, DomainError, RepoResult, Snowflake};

/// Process-lifetime cache of (guild, channel name) to channel id
#[derive(Clone, Default)]
pub struct ChannelDirectory {
    cache: Arc<DashMap<(Snowflake, String), Snowflake>>,
}

impl ChannelDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a guild text channel by name, consulting the cache first
    pub async fn get(
        &self,
        gateway: &dyn ChatGateway,
        guild_id: Snowflake,
        name: &str,
    ) -> RepoResult<Snowflake> {
        if let Some(hit) = self.cache.get(&(guild_id, name.to_string())) {
            return Ok(*hit);
        }

        let channel_id = gateway
            .find_text_channel(guild_id, name)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(name.to_string()))?;

        self.cache.insert((guild_id, name.to_string()), channel_id);
        Ok(channel_id)
    }
}
