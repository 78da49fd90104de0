//! Service layer - the group lifecycle use cases

pub mod cancel;
pub mod context;
pub mod error;
pub mod expiration;
pub mod hosting;
pub mod reaction;
pub mod roster;
pub mod rsvp;

pub use cancel::CancelService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use expiration::ExpirationService;
pub use hosting::HostingService;
pub use reaction::ReactionService;
pub use roster::RosterService;
pub use rsvp::RsvpService;
