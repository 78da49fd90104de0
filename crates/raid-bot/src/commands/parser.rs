//! Prefixed command parser
//!
//! Splits a raw chat message into one of the three raid commands. Command
//! names are case-insensitive and locations may contain spaces, so the
//! trailing arguments are always rejoined into a single location string.
//! A recognized command with missing arguments parses to its usage line;
//! anything else is not a command at all and stays silent.

/// Usage line for the hosting command (rendered behind the prefix)
pub const HOSTING_USAGE: &str = "hosting time pokemon/level location";

/// Usage line for the cancel command
pub const CANCEL_USAGE: &str = "cancel location";

/// Usage line for the invites command
pub const INVITES_USAGE: &str = "invites location";

/// A parsed raid command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hosting <time> <raid type> <location...>` (aliases `host`, `h`)
    Hosting {
        time: String,
        raid_type: String,
        location: String,
    },
    /// `cancel <location...>`
    Cancel { location: String },
    /// `invites <location...>`
    Invites { location: String },
}

/// The outcome of parsing a message that carried the command prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    Command(Command),
    /// A recognized command word with malformed arguments
    Usage(&'static str),
}

/// Parse a raw message into a command
///
/// Returns `None` for anything that is not addressed to the bot: the wrong
/// prefix or an unknown command word. Other bots and plain chatter share the
/// same channels, so those cases must stay silent.
pub fn parse_command(content: &str, prefix: &str) -> Option<ParsedMessage> {
    let body = content.trim().strip_prefix(prefix)?;
    let mut words = body.split_whitespace();
    let name = words.next()?.to_lowercase();

    let parsed = match name.as_str() {
        "hosting" | "host" | "h" => match (words.next(), words.next()) {
            (Some(time), Some(raid_type)) => match rejoin(words) {
                Some(location) => ParsedMessage::Command(Command::Hosting {
                    time: time.to_string(),
                    raid_type: raid_type.to_string(),
                    location,
                }),
                None => ParsedMessage::Usage(HOSTING_USAGE),
            },
            _ => ParsedMessage::Usage(HOSTING_USAGE),
        },
        "cancel" => match rejoin(words) {
            Some(location) => ParsedMessage::Command(Command::Cancel { location }),
            None => ParsedMessage::Usage(CANCEL_USAGE),
        },
        "invites" => match rejoin(words) {
            Some(location) => ParsedMessage::Command(Command::Invites { location }),
            None => ParsedMessage::Usage(INVITES_USAGE),
        },
        _ => return None,
    };
    Some(parsed)
}

fn rejoin<'a>(words: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = words.collect::<Vec<_>>().join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
