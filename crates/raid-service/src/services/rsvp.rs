//! RSVP aggregation
//!
//! The RSVP roster is never cached: it is derived on demand from the marker
//! reactions on the invite message, so the chat platform stays the single
//! source of truth for who has joined.

use tracing::instrument;

use raid_core::{GatewayUser, Group};

use crate::messages;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// RSVP aggregation service
pub struct RsvpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RsvpService<'a> {
    /// Create a new RsvpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The members who reacted to a group's invite with the marker emoji
    ///
    /// Automated accounts are excluded. An invite message that is already
    /// gone yields an empty roster rather than a fault.
    #[instrument(skip(self, group), fields(group_id = %group.id))]
    pub async fn rsvp_users(&self, group: &Group) -> ServiceResult<Vec<GatewayUser>> {
        let users = match self
            .ctx
            .gateway()
            .reaction_users(
                group.channel_id,
                group.message_id,
                &self.ctx.settings().marker_emoji,
            )
            .await
        {
            Ok(users) => users,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(users.into_iter().filter(|u| !u.is_bot).collect())
    }

    /// One roster line per RSVP, with the in-game name where a card exists
    pub async fn roster_lines(&self, group: &Group) -> ServiceResult<Vec<String>> {
        let users = self.rsvp_users(group).await?;

        let mut lines = Vec::with_capacity(users.len());
        for user in users {
            let name = match self.ctx.trainer_cards().find_by_user(user.id).await? {
                Some(card) if !card.trainer_name.trim().is_empty() => card.trainer_name,
                _ => user.display_name.clone(),
            };
            lines.push(messages::roster_line(&user, &name));
        }
        Ok(lines)
    }
}
