//! Roster service
//!
//! Answers the host's roster query with the current RSVP list for one of
//! their groups, derived live from the invite message's reactions.

use tracing::instrument;

use raid_core::{normalize_location, GatewayUser, OutboundMessage};

use crate::messages;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::rsvp::RsvpService;

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the RSVPs for the actor's group at a location
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_rsvps(
        &self,
        actor: &GatewayUser,
        location: &str,
    ) -> ServiceResult<OutboundMessage> {
        let location = normalize_location(location);
        let Some(group) = self.ctx.groups().find(actor.id, &location).await? else {
            return Ok(messages::no_group_reply());
        };

        let lines = RsvpService::new(self.ctx).roster_lines(&group).await?;
        Ok(messages::roster_reply(
            actor,
            &group.location,
            &lines,
            &self.ctx.settings().command_prefix,
        ))
    }
}
