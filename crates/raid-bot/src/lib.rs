//! # raid-bot
//!
//! Command-edge layer for the raid bot: parses prefixed chat commands and
//! routes them, along with reaction events, to the service layer.

pub mod commands;
pub mod router;

pub use commands::{parse_command, Command, ParsedMessage};
pub use router::BotRouter;
