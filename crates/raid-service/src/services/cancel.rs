//! Cancel service
//!
//! Explicit group teardown by the host. Cancellation races with scheduled
//! expiration toward the same terminal state, so every not-found along the
//! way is treated as that state already having been reached.

use tracing::{info, instrument};

use raid_core::{normalize_location, GatewayUser, OutboundMessage};

use crate::messages;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::rsvp::RsvpService;

/// Cancel service
pub struct CancelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CancelService<'a> {
    /// Create a new CancelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cancel the actor's group at a location, returning the reply to send
    ///
    /// Idempotent: cancelling a group that no longer exists is answered with
    /// a benign notice, not an error. The RSVP roster is collected before the
    /// invite is retracted, so the confirmation can still name everyone who
    /// had joined.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn cancel_group(
        &self,
        actor: &GatewayUser,
        location: &str,
    ) -> ServiceResult<OutboundMessage> {
        let location = normalize_location(location);
        let Some(group) = self.ctx.groups().find(actor.id, &location).await? else {
            return Ok(messages::already_canceled_reply());
        };

        // Roster first, while the invite message still exists
        let rsvps = RsvpService::new(self.ctx).rsvp_users(&group).await?;

        if let Err(e) = self
            .ctx
            .gateway()
            .delete_message(group.channel_id, group.message_id)
            .await
        {
            if !e.is_not_found() {
                return Err(e.into());
            }
        }

        self.ctx.groups().delete(group.id).await?;

        info!(
            group_id = %group.id,
            actor_id = %actor.id,
            location = %group.location,
            rsvp_count = rsvps.len(),
            "Raid group canceled"
        );

        let time_label =
            messages::format_local_time(group.time, self.ctx.settings().timezone);
        Ok(messages::cancel_confirmation(actor, &group, &time_label, &rsvps))
    }
}
