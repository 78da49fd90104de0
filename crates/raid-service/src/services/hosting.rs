//! Hosting service
//!
//! The group creation flow: profile gate, time resolution, uniqueness check,
//! raid type display resolution, invite posting, persistence, and expiration
//! scheduling. Every rejection is returned as a reply message, so the command
//! layer treats success and rejection the same way.

use chrono::Utc;
use tracing::{info, instrument, warn};

use raid_core::raid_type::canonical_raid_type;
use raid_core::time::{is_too_far_ahead, resolve};
use raid_core::{
    jump_url, normalize_location, DomainError, GatewayUser, GuildEmoji, NewGroup, OutboundMessage,
    ScheduledJob, Snowflake,
};

use crate::messages;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Hosting service
pub struct HostingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HostingService<'a> {
    /// Create a new HostingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a raid group and post its invite, returning the reply to send
    ///
    /// Gate order is fixed: profile, time, uniqueness. The invite message is
    /// posted before the record is inserted; if the insert then loses a
    /// duplicate race, the freshly posted invite is retracted.
    #[instrument(skip(self, host), fields(host_id = %host.id))]
    pub async fn create_group(
        &self,
        guild_id: Snowflake,
        host: &GatewayUser,
        raw_time: &str,
        raid_type_token: &str,
        location: &str,
    ) -> ServiceResult<OutboundMessage> {
        let settings = self.ctx.settings();
        let prefix = settings.command_prefix.as_str();

        // Profile gate
        let card = match self.ctx.trainer_cards().find_by_user(host.id).await? {
            Some(card) if card.is_complete() => card,
            _ => {
                info!(host_id = %host.id, "Hosting rejected, trainer card incomplete");
                return Ok(messages::trainer_card_instructions(host, prefix, None));
            }
        };

        // Time resolution and the near-future window, one combined rejection
        let now = self.ctx.now_local();
        let time = match resolve(raw_time, &now) {
            Ok(time) => time,
            Err(_) => {
                info!(host_id = %host.id, raw_time, "Hosting rejected, unparseable time");
                return Ok(messages::invalid_time_reply(host, raw_time));
            }
        };
        if is_too_far_ahead(&time, &now, settings.schedule_window) {
            info!(host_id = %host.id, raw_time, "Hosting rejected, time too far ahead");
            return Ok(messages::invalid_time_reply(host, raw_time));
        }

        // Uniqueness pre-check; the insert below re-enforces this under a race
        let location = normalize_location(location);
        if self.ctx.groups().find(host.id, &location).await?.is_some() {
            info!(host_id = %host.id, location, "Hosting rejected, duplicate group");
            return Ok(messages::duplicate_group_reply(host, &location, prefix));
        }

        let raid_type = self.resolve_raid_display(guild_id, raid_type_token).await?;
        let marker = self
            .ctx
            .gateway()
            .find_emoji(guild_id, &settings.marker_emoji)
            .await?;

        // Post the invite
        let channel_id = self
            .ctx
            .channels()
            .get(self.ctx.gateway(), guild_id, &settings.air_support_channel)
            .await?;
        let time_utc = time.with_timezone(&Utc);
        let time_label = messages::format_local_time(time_utc, settings.timezone);
        let invite = messages::invite_message(
            &card,
            host,
            &time_label,
            &raid_type,
            &location,
            marker.as_ref(),
            prefix,
        );
        let message_id = self.ctx.gateway().send_message(channel_id, &invite).await?;
        if marker.is_some() {
            self.ctx
                .gateway()
                .add_reaction(channel_id, message_id, &settings.marker_emoji)
                .await?;
        }

        // Persist; a lost duplicate race retracts the invite just posted
        let new_group = NewGroup::new(host.id, &location, raid_type, time_utc, channel_id, message_id);
        let group = match self.ctx.groups().create(&new_group).await {
            Ok(group) => group,
            Err(DomainError::DuplicateGroup(_)) => {
                if let Err(e) = self.ctx.gateway().delete_message(channel_id, message_id).await {
                    if !e.is_not_found() {
                        warn!(error = %e, %message_id, "Failed to retract orphaned invite");
                    }
                }
                info!(host_id = %host.id, location, "Hosting lost a duplicate race");
                return Ok(messages::duplicate_group_reply(host, &location, prefix));
            }
            Err(e) => return Err(e.into()),
        };

        self.ctx
            .scheduler()
            .schedule(ScheduledJob::expiration(&group))
            .await?;

        info!(
            group_id = %group.id,
            host_id = %host.id,
            location = %group.location,
            raid_type = %group.raid_type,
            time = %group.time,
            "Raid group created"
        );

        let url = jump_url(guild_id, channel_id, message_id);
        Ok(messages::hosting_announcement(host, &group.raid_type, &url, prefix))
    }

    /// Resolve the display form of a raid type token
    ///
    /// The canonical name is tried against the guild's custom emoji; when no
    /// emoji matches, the case-folded raw token is displayed as-is. Display is
    /// best-effort and never blocks creation.
    async fn resolve_raid_display(
        &self,
        guild_id: Snowflake,
        token: &str,
    ) -> ServiceResult<String> {
        let canonical = canonical_raid_type(token);
        let emoji = self.ctx.gateway().find_emoji(guild_id, &canonical).await?;
        Ok(emoji.as_ref().map_or_else(
            || token.trim().to_lowercase(),
            GuildEmoji::render,
        ))
    }
}
