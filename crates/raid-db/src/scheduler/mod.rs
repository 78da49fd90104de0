//! Durable job scheduling
//!
//! Jobs are plain rows in the scheduled_jobs table. [`PgJobScheduler`]
//! persists them; [`JobRunner`] polls for due rows and dispatches each to the
//! handler registered for its name, deleting the row only after the handler
//! succeeds. That delete-on-success discipline is what makes dispatch
//! at-least-once across crashes and restarts.

mod runner;
mod store;

pub use runner::JobRunner;
pub use store::PgJobScheduler;
