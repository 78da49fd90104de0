//! Bot event routing
//!
//! Dispatches parsed commands and reaction events to the service layer and
//! hands back the reply to post, if any. The router owns the service context;
//! the platform adapter drives it with raw message content and events.

use tracing::{error, instrument};

use raid_core::{GatewayUser, OutboundMessage, ReactionEvent, Snowflake};
use raid_service::{
    CancelService, HostingService, ReactionService, RosterService, ServiceContext, ServiceResult,
};

use crate::commands::{parse_command, Command, ParsedMessage};

/// Routes inbound chat activity to the services
#[derive(Clone)]
pub struct BotRouter {
    ctx: ServiceContext,
}

impl BotRouter {
    /// Create a router over a service context
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the underlying service context
    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Handle an inbound chat message
    ///
    /// Non-commands and messages from automated accounts produce no reply.
    #[instrument(skip(self, author, content), fields(author_id = %author.id))]
    pub async fn handle_message(
        &self,
        guild_id: Snowflake,
        author: &GatewayUser,
        content: &str,
    ) -> ServiceResult<Option<OutboundMessage>> {
        if author.is_bot {
            return Ok(None);
        }
        let prefix = &self.ctx.settings().command_prefix;
        let command = match parse_command(content, prefix) {
            None => return Ok(None),
            Some(ParsedMessage::Usage(usage)) => {
                return Ok(Some(OutboundMessage::text(format!(
                    "Usage: `{prefix}{usage}`"
                ))));
            }
            Some(ParsedMessage::Command(command)) => command,
        };

        let reply = match command {
            Command::Hosting {
                time,
                raid_type,
                location,
            } => {
                HostingService::new(&self.ctx)
                    .create_group(guild_id, author, &time, &raid_type, &location)
                    .await?
            }
            Command::Cancel { location } => {
                CancelService::new(&self.ctx)
                    .cancel_group(author, &location)
                    .await?
            }
            Command::Invites { location } => {
                RosterService::new(&self.ctx)
                    .list_rsvps(author, &location)
                    .await?
            }
        };
        Ok(Some(reply))
    }

    /// Handle a reaction-added event
    ///
    /// Faults are logged and swallowed; one bad event must not take down the
    /// event loop.
    #[instrument(skip(self, event))]
    pub async fn handle_reaction_added(&self, event: &ReactionEvent) {
        if let Err(e) = ReactionService::new(&self.ctx)
            .handle_reaction_added(event)
            .await
        {
            error!(
                error = %e,
                code = e.error_code(),
                message_id = %event.message_id,
                "Reaction handling failed"
            );
        }
    }
}
