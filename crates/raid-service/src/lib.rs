//! # raid-service
//!
//! Application layer for the raid bot: the group lifecycle use cases
//! (hosting, cancellation, roster queries, RSVP aggregation, expiration, and
//! reaction-event handling) built on the raid-core ports.

pub mod channels;
pub mod messages;
pub mod services;
pub mod settings;

pub use channels::ChannelDirectory;
pub use services::{
    CancelService, ExpirationService, HostingService, ReactionService, RosterService, RsvpService,
    ServiceContext, ServiceError, ServiceResult,
};
pub use settings::RaidSettings;
