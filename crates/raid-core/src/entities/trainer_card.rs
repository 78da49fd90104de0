//! Trainer card - the per-user profile record required to host or join

use crate::value_objects::Snowflake;

/// A member's trainer card, read-only from this core's perspective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerCard {
    pub user_id: Snowflake,
    pub trainer_name: String,
    pub friend_code: String,
}

impl TrainerCard {
    /// A card is complete when both required fields are filled in.
    ///
    /// Hosting and RSVP reactions are gated on this; it is re-checked on
    /// every event rather than cached so late-completed cards take effect
    /// immediately.
    pub fn is_complete(&self) -> bool {
        !self.trainer_name.trim().is_empty() && !self.friend_code.trim().is_empty()
    }
}
