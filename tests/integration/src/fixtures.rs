//! In-memory fakes for the ports
//!
//! Each fake implements one of the raid-core traits over plain in-process
//! state, with enough observability (sent messages, recorded jobs, lookup
//! counters) for the tests to assert on side effects.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use raid_core::{
    ChatGateway, DomainError, GatewayUser, Group, GroupRepository, GuildEmoji, JobScheduler,
    NewGroup, OutboundMessage, RepoResult, ScheduledJob, Snowflake, TrainerCard,
    TrainerCardRepository,
};

// ============================================================================
// Repositories
// ============================================================================

/// In-memory group store enforcing the (host, location) uniqueness key
#[derive(Default)]
pub struct InMemoryGroups {
    next_id: AtomicI64,
    groups: Mutex<Vec<Group>>,
}

impl InMemoryGroups {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            groups: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every live group
    pub fn all(&self) -> Vec<Group> {
        self.groups.lock().unwrap().clone()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroups {
    async fn find(&self, host_id: Snowflake, location: &str) -> RepoResult<Option<Group>> {
        Ok(self
            .groups
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.host_id == host_id && g.location == location)
            .cloned())
    }

    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>> {
        Ok(self
            .groups
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .cloned())
    }

    async fn create(&self, group: &NewGroup) -> RepoResult<Group> {
        let mut groups = self.groups.lock().unwrap();
        if groups
            .iter()
            .any(|g| g.host_id == group.host_id && g.location == group.location)
        {
            return Err(DomainError::DuplicateGroup(group.location.clone()));
        }

        let created = Group {
            id: Snowflake::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            host_id: group.host_id,
            location: group.location.clone(),
            raid_type: group.raid_type.clone(),
            time: group.time,
            channel_id: group.channel_id,
            message_id: group.message_id,
            created_at: Utc::now(),
        };
        groups.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut groups = self.groups.lock().unwrap();
        let before = groups.len();
        groups.retain(|g| g.id != id);
        Ok(groups.len() < before)
    }
}

/// In-memory trainer card store
#[derive(Default)]
pub struct InMemoryTrainerCards {
    cards: Mutex<HashMap<Snowflake, TrainerCard>>,
}

impl InMemoryTrainerCards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, card: TrainerCard) {
        self.cards.lock().unwrap().insert(card.user_id, card);
    }
}

#[async_trait]
impl TrainerCardRepository for InMemoryTrainerCards {
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<TrainerCard>> {
        Ok(self.cards.lock().unwrap().get(&user_id).cloned())
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// A message recorded by the fake gateway
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub message: OutboundMessage,
    pub deleted: bool,
}

/// In-memory chat gateway
///
/// Messages, reactions, emoji, and channels all live in process. Deleted
/// messages stay recorded (flagged) so tests can assert on retractions.
#[derive(Default)]
pub struct FakeGateway {
    next_message_id: AtomicI64,
    channel_lookups: AtomicUsize,
    messages: Mutex<Vec<SentMessage>>,
    reactions: Mutex<Vec<(Snowflake, String, GatewayUser)>>,
    emoji: Mutex<Vec<GuildEmoji>>,
    channels: Mutex<HashMap<String, Snowflake>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            next_message_id: AtomicI64::new(1000),
            ..Self::default()
        }
    }

    pub fn add_channel(&self, name: &str, id: Snowflake) {
        self.channels.lock().unwrap().insert(name.to_string(), id);
    }

    pub fn add_emoji(&self, emoji: GuildEmoji) {
        self.emoji.lock().unwrap().push(emoji);
    }

    /// Simulate a member reacting to a message
    pub fn react(&self, message_id: Snowflake, emoji_name: &str, user: GatewayUser) {
        self.reactions
            .lock()
            .unwrap()
            .push((message_id, emoji_name.to_string(), user));
    }

    /// Every message ever sent, including retracted ones
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages still standing
    pub fn live_messages(&self) -> Vec<SentMessage> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !m.deleted)
            .cloned()
            .collect()
    }

    /// Messages still standing in one channel
    pub fn live_messages_in(&self, channel_id: Snowflake) -> Vec<SentMessage> {
        self.live_messages()
            .into_iter()
            .filter(|m| m.channel_id == channel_id)
            .collect()
    }

    pub fn message(&self, id: Snowflake) -> Option<SentMessage> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    pub fn channel_lookup_count(&self) -> usize {
        self.channel_lookups.load(Ordering::SeqCst)
    }

    fn message_exists(&self, message_id: Snowflake) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.id == message_id && !m.deleted)
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn send_message(
        &self,
        channel_id: Snowflake,
        message: &OutboundMessage,
    ) -> RepoResult<Snowflake> {
        let id = Snowflake::new(self.next_message_id.fetch_add(1, Ordering::SeqCst));
        self.messages.lock().unwrap().push(SentMessage {
            id,
            channel_id,
            message: message.clone(),
            deleted: false,
        });
        Ok(id)
    }

    async fn delete_message(&self, channel_id: Snowflake, message_id: Snowflake) -> RepoResult<()> {
        let mut messages = self.messages.lock().unwrap();
        match messages
            .iter_mut()
            .find(|m| m.id == message_id && m.channel_id == channel_id && !m.deleted)
        {
            Some(message) => {
                message.deleted = true;
                Ok(())
            }
            None => Err(DomainError::ArtifactNotFound(message_id)),
        }
    }

    async fn add_reaction(
        &self,
        _channel_id: Snowflake,
        message_id: Snowflake,
        emoji_name: &str,
    ) -> RepoResult<()> {
        if !self.message_exists(message_id) {
            return Err(DomainError::ArtifactNotFound(message_id));
        }
        self.react(
            message_id,
            emoji_name,
            GatewayUser {
                id: Snowflake::new(0),
                display_name: "raid-bot".to_string(),
                is_bot: true,
            },
        );
        Ok(())
    }

    async fn remove_reaction(
        &self,
        _channel_id: Snowflake,
        message_id: Snowflake,
        emoji_name: &str,
        user_id: Snowflake,
    ) -> RepoResult<()> {
        if !self.message_exists(message_id) {
            return Err(DomainError::ArtifactNotFound(message_id));
        }
        self.reactions
            .lock()
            .unwrap()
            .retain(|(m, e, u)| !(*m == message_id && e == emoji_name && u.id == user_id));
        Ok(())
    }

    async fn reaction_users(
        &self,
        _channel_id: Snowflake,
        message_id: Snowflake,
        emoji_name: &str,
    ) -> RepoResult<Vec<GatewayUser>> {
        if !self.message_exists(message_id) {
            return Err(DomainError::ArtifactNotFound(message_id));
        }
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, e, _)| *m == message_id && e == emoji_name)
            .map(|(_, _, u)| u.clone())
            .collect())
    }

    async fn find_emoji(&self, _guild_id: Snowflake, name: &str) -> RepoResult<Option<GuildEmoji>> {
        Ok(self
            .emoji
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.name == name)
            .cloned())
    }

    async fn find_text_channel(
        &self,
        _guild_id: Snowflake,
        name: &str,
    ) -> RepoResult<Option<Snowflake>> {
        self.channel_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.channels.lock().unwrap().get(name).copied())
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Scheduler fake that records every registered job
#[derive(Default)]
pub struct RecordingScheduler {
    jobs: Mutex<Vec<ScheduledJob>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> Vec<ScheduledJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobScheduler for RecordingScheduler {
    async fn schedule(&self, job: ScheduledJob) -> RepoResult<()> {
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }
}
