//! Group entity - a hosted raid group and its posted invite

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::Snowflake;

/// How long after the scheduled raid time a group lingers before expiring.
pub const EXPIRATION_OFFSET_MINUTES: i64 = 45;

/// Case-fold a location label for comparison and storage.
///
/// `(host_id, normalize_location(location))` is the uniqueness key: at most
/// one live group may exist per key.
pub fn normalize_location(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A live raid group record
///
/// Immutable once created; destroyed by explicit cancellation or scheduled
/// expiration, both of which also retract the posted invite message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Snowflake,
    pub host_id: Snowflake,
    /// Stored case-folded
    pub location: String,
    /// Resolved display token (emoji rendering or the case-folded raw token)
    pub raid_type: String,
    pub time: DateTime<Utc>,
    /// Channel the invite message was posted in
    pub channel_id: Snowflake,
    /// The invite message itself; never zero once the group is persisted
    pub message_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// When the deferred deletion job should fire for this group
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.time + Duration::minutes(EXPIRATION_OFFSET_MINUTES)
    }
}

/// A group awaiting insertion; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub host_id: Snowflake,
    pub location: String,
    pub raid_type: String,
    pub time: DateTime<Utc>,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
}

impl NewGroup {
    /// Create a new group record, case-folding the location
    pub fn new(
        host_id: Snowflake,
        location: &str,
        raid_type: String,
        time: DateTime<Utc>,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> Self {
        Self {
            host_id,
            location: normalize_location(location),
            raid_type,
            time,
            channel_id,
            message_id,
        }
    }
}
