//! Reaction service
//!
//! Handles marker reactions on invite messages: gates the joiner's trainer
//! card and broadcasts the RSVP to the raids channel. Events that are not a
//! member's marker reaction in the air-support channel are ignored.

use tracing::{info, instrument};

use raid_core::{jump_url, ReactionEvent};

use crate::messages;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Auto-expiry for the incomplete-card notice sent on a revoked RSVP
const CARD_NOTICE_TTL_SECS: u32 = 30;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a reaction-added event
    ///
    /// A marker reaction from a member with a complete trainer card becomes
    /// an RSVP notification in the raids channel. An incomplete card gets the
    /// reaction removed and a short-lived instruction notice instead.
    #[instrument(skip(self, event), fields(member_id = %event.member.id))]
    pub async fn handle_reaction_added(&self, event: &ReactionEvent) -> ServiceResult<()> {
        let settings = self.ctx.settings();

        if event.member.is_bot || event.emoji_name != settings.marker_emoji {
            return Ok(());
        }

        let air_support = self
            .ctx
            .channels()
            .get(self.ctx.gateway(), event.guild_id, &settings.air_support_channel)
            .await?;
        if event.channel_id != air_support {
            return Ok(());
        }

        let raids = self
            .ctx
            .channels()
            .get(self.ctx.gateway(), event.guild_id, &settings.raids_channel)
            .await?;

        let card = self
            .ctx
            .trainer_cards()
            .find_by_user(event.member.id)
            .await?;
        if !card.is_some_and(|c| c.is_complete()) {
            if let Err(e) = self
                .ctx
                .gateway()
                .remove_reaction(
                    event.channel_id,
                    event.message_id,
                    &settings.marker_emoji,
                    event.member.id,
                )
                .await
            {
                if !e.is_not_found() {
                    return Err(e.into());
                }
            }

            let notice = messages::trainer_card_instructions(
                &event.member,
                &settings.command_prefix,
                Some(CARD_NOTICE_TTL_SECS),
            );
            self.ctx.gateway().send_message(raids, &notice).await?;

            info!(member_id = %event.member.id, "RSVP revoked, trainer card incomplete");
            return Ok(());
        }

        let url = jump_url(event.guild_id, event.channel_id, event.message_id);
        let notification =
            messages::rsvp_notification(&event.member, &url, &settings.command_prefix);
        self.ctx.gateway().send_message(raids, &notification).await?;

        info!(member_id = %event.member.id, message_id = %event.message_id, "RSVP recorded");
        Ok(())
    }
}
