//! Chat gateway port - the narrow capability surface the bot needs
//!
//! The concrete chat platform supplies users, channels, messages, reactions,
//! and emoji as opaque objects behind an async request/response and event-push
//! interface. Only what the group lifecycle needs is modeled here; the full
//! platform API surface is deliberately out of scope.

use async_trait::async_trait;

use crate::traits::repositories::RepoResult;
use crate::value_objects::Snowflake;

/// A platform user as seen in commands and reaction events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayUser {
    pub id: Snowflake,
    pub display_name: String,
    /// Automated accounts are excluded from RSVPs and ignored in events
    pub is_bot: bool,
}

impl GatewayUser {
    /// Platform mention string for this user
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// A guild-specific custom emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildEmoji {
    pub id: Snowflake,
    pub name: String,
    pub image_url: String,
}

impl GuildEmoji {
    /// Inline rendering of this emoji in message content
    pub fn render(&self) -> String {
        format!("<:{}:{}>", self.name, self.id)
    }
}

/// One name/value field of an embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

/// A rich embed attached to an outbound message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageEmbed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl MessageEmbed {
    /// Create an embed with the given accent color
    pub fn new(color: u32) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

/// A message to post through the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutboundMessage {
    pub content: String,
    pub embed: Option<MessageEmbed>,
    /// Auto-expiring notices (seconds); None means permanent
    pub delete_after_secs: Option<u32>,
}

impl OutboundMessage {
    /// Plain text message
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Embed-only message
    pub fn embed(embed: MessageEmbed) -> Self {
        Self {
            embed: Some(embed),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_embed(mut self, embed: MessageEmbed) -> Self {
        self.embed = Some(embed);
        self
    }

    pub fn delete_after(mut self, secs: u32) -> Self {
        self.delete_after_secs = Some(secs);
        self
    }
}

/// A reaction-added event pushed by the gateway
#[derive(Debug, Clone)]
pub struct ReactionEvent {
    pub guild_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub emoji_name: String,
    pub member: GatewayUser,
}

/// Permalink to a message, usable inside embeds
pub fn jump_url(guild_id: Snowflake, channel_id: Snowflake, message_id: Snowflake) -> String {
    format!("https://discord.com/channels/{guild_id}/{channel_id}/{message_id}")
}

// ============================================================================
// Gateway
// ============================================================================

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Post a message to a channel, returning the new message id
    async fn send_message(
        &self,
        channel_id: Snowflake,
        message: &OutboundMessage,
    ) -> RepoResult<Snowflake>;

    /// Delete a message
    ///
    /// Fails with [`crate::error::DomainError::ArtifactNotFound`] when the
    /// message is already gone; callers on deletion paths tolerate that.
    async fn delete_message(&self, channel_id: Snowflake, message_id: Snowflake) -> RepoResult<()>;

    /// Attach a reaction (by emoji name) to a message as the bot
    async fn add_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji_name: &str,
    ) -> RepoResult<()>;

    /// Remove one user's reaction from a message
    async fn remove_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji_name: &str,
        user_id: Snowflake,
    ) -> RepoResult<()>;

    /// List the users who reacted to a message with the given emoji
    ///
    /// Fails with `ArtifactNotFound` when the message no longer exists.
    async fn reaction_users(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji_name: &str,
    ) -> RepoResult<Vec<GatewayUser>>;

    /// Resolve a guild custom emoji by name
    async fn find_emoji(&self, guild_id: Snowflake, name: &str) -> RepoResult<Option<GuildEmoji>>;

    /// Resolve a guild text channel by name
    async fn find_text_channel(
        &self,
        guild_id: Snowflake,
        name: &str,
    ) -> RepoResult<Option<Snowflake>>;
}
