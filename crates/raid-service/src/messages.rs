//! User-facing message rendering
//!
//! All replies and broadcast messages are built here so wording, colors, and
//! the standard footer stay in one place. Two colors only: a success/neutral
//! green and a warning yellow for incomplete-profile notices.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use raid_core::{GatewayUser, Group, GuildEmoji, MessageEmbed, OutboundMessage, TrainerCard};

/// Embed accent colors
pub mod colors {
    pub const GREEN: u32 = 0x00AA44;
    pub const YELLOW: u32 = 0xCC9900;
}

/// Rendered in place of an empty RSVP roster
pub const NO_RSVPS: &str = "*No RSVPs Found*";

/// The usage footer attached to every embed
pub fn footer(prefix: &str) -> String {
    format!("{prefix}hosting time pokemon/level location")
}

/// An embed with the standard footer
fn standard_embed(color: u32, prefix: &str) -> MessageEmbed {
    MessageEmbed::new(color).with_footer(footer(prefix))
}

/// Wall-clock label in the reference timezone, e.g. `7:30PM`
pub fn format_local_time(time: DateTime<Utc>, tz: Tz) -> String {
    time.with_timezone(&tz).format("%-I:%M%p").to_string()
}

/// Instructions for completing a trainer card (warning color)
///
/// Sent as a reply when hosting is attempted with an incomplete card, and as
/// an auto-expiring notice when an RSVP reaction is revoked for the same
/// reason.
pub fn trainer_card_instructions(
    member: &GatewayUser,
    prefix: &str,
    delete_after_secs: Option<u32>,
) -> OutboundMessage {
    let embed = standard_embed(colors::YELLOW, prefix).with_description(format!(
        "You must fill out your trainer card with your trainer name and friend code.\n\
         ```\n{prefix}trainer edit your_trainer_name your_friend_code\n```\n\
         Like this\n```\n{prefix}trainer edit ZZmmrmn 1234 5678 9012\n```"
    ));

    let message = OutboundMessage::embed(embed).with_content(member.mention());
    match delete_after_secs {
        Some(secs) => message.delete_after(secs),
        None => message,
    }
}

/// The combined invalid-or-too-far time rejection
pub fn invalid_time_reply(host: &GatewayUser, raw_time: &str) -> OutboundMessage {
    OutboundMessage::text(format!(
        "{} `{raw_time}` is either not a valid time or is too far in the future.",
        host.mention()
    ))
}

/// Duplicate (host, location) rejection with the cancellation instruction
pub fn duplicate_group_reply(host: &GatewayUser, location: &str, prefix: &str) -> OutboundMessage {
    OutboundMessage::text(format!(
        "{} you've already created a group for `{location}`, \
         if it has already ended cancel it:\n```\n{prefix}cancel {location}\n```",
        host.mention()
    ))
}

/// The invite message posted to the air-support channel
///
/// The friend code goes in the raw content, as its own message body, so it is
/// easy to copy; everything else lives in the embed.
pub fn invite_message(
    card: &TrainerCard,
    host: &GatewayUser,
    time_label: &str,
    raid_type: &str,
    location: &str,
    marker: Option<&GuildEmoji>,
    prefix: &str,
) -> OutboundMessage {
    let marker_label = marker.map_or_else(|| "the invite emoji".to_string(), GuildEmoji::render);

    let mut embed = standard_embed(colors::GREEN, prefix)
        .with_title(format!("@{} is hosting a raid group!", host.display_name))
        .with_description(format!(
            "Location: {location}\nTime: {time_label}\nRaid: {raid_type}\n"
        ))
        .add_field(
            "How To Join",
            format!(
                "- React with {marker_label} to request an invite.\n\
                 - Add {} as a friend using their friend code above.",
                host.mention()
            ),
        );
    if let Some(emoji) = marker {
        embed = embed.with_thumbnail(emoji.image_url.clone());
    }

    OutboundMessage::embed(embed).with_content(card.friend_code.clone())
}

/// Success announcement with a jump link to the invite
pub fn hosting_announcement(
    host: &GatewayUser,
    raid_type: &str,
    invite_url: &str,
    prefix: &str,
) -> OutboundMessage {
    OutboundMessage::embed(standard_embed(colors::GREEN, prefix).with_description(format!(
        "{} is hosting a {raid_type} raid! You can join them [here]({invite_url}).",
        host.mention()
    )))
}

/// Idempotent reply when there is nothing to cancel
pub fn already_canceled_reply() -> OutboundMessage {
    OutboundMessage::text("Group was already canceled and was never created")
}

/// Cancellation confirmation naming the dropped RSVPs
pub fn cancel_confirmation(
    actor: &GatewayUser,
    group: &Group,
    time_label: &str,
    rsvps: &[GatewayUser],
) -> OutboundMessage {
    let dropped = if rsvps.is_empty() {
        NO_RSVPS.to_string()
    } else {
        rsvps
            .iter()
            .map(GatewayUser::mention)
            .collect::<Vec<_>>()
            .join(" ")
    };

    OutboundMessage::text(format!(
        "{} You've canceled your raid group at {} for a {} at {time_label}\n\
         Dropping RSVPs from: {dropped}",
        actor.mention(),
        group.location,
        group.raid_type
    ))
}

/// Reply when `invites` finds no group at the location
pub fn no_group_reply() -> OutboundMessage {
    OutboundMessage::text("Couldn't find a group for that location")
}

/// One line of the RSVP roster
pub fn roster_line(member: &GatewayUser, trainer_name: &str) -> String {
    format!("{} - IGN: *{trainer_name}*", member.mention())
}

/// The RSVP roster embed for `invites`
pub fn roster_reply(
    actor: &GatewayUser,
    location: &str,
    lines: &[String],
    prefix: &str,
) -> OutboundMessage {
    let description = if lines.is_empty() {
        NO_RSVPS.to_string()
    } else {
        lines.join("\n")
    };

    OutboundMessage::embed(
        standard_embed(colors::GREEN, prefix)
            .with_title(format!("RSVPs for {location}"))
            .with_description(description),
    )
    .with_content(actor.mention())
}

/// Join notification broadcast to the raids channel
pub fn rsvp_notification(member: &GatewayUser, invite_url: &str, prefix: &str) -> OutboundMessage {
    OutboundMessage::embed(standard_embed(colors::GREEN, prefix).with_description(format!(
        "{} has [RSVP'd to a raid]({invite_url})",
        member.mention()
    )))
}
