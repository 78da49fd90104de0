//! Group lifecycle integration tests
//!
//! Drives the full command and event surface through the router against the
//! in-memory fakes: hosting with its three gates, cancellation, roster
//! queries, scheduled expiration, and reaction handling.
//!
//! Run with: cargo test -p integration-tests --test lifecycle_tests

use chrono::Duration;
use integration_tests::{
    air_support_channel, bot_member, guild_id, member, raids_channel, TestHarness,
};
use raid_core::{ChatGateway, Group, JobHandler, OutboundMessage, TrainerCard, DELETE_GROUP_JOB};
use raid_service::ExpirationService;

/// Drive a command through the router, panicking on service faults
async fn run_command(h: &TestHarness, author: &raid_core::GatewayUser, content: &str) -> Option<OutboundMessage> {
    h.router()
        .handle_message(guild_id(), author, content)
        .await
        .expect("command should not fault")
}

/// The single live group, after asserting there is exactly one
fn only_group(h: &TestHarness) -> Group {
    let groups = h.groups.all();
    assert_eq!(groups.len(), 1, "expected exactly one group");
    groups.into_iter().next().unwrap()
}

// ============================================================================
// Hosting
// ============================================================================

#[tokio::test]
async fn test_hosting_posts_invite_and_schedules_expiration() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    let reply = run_command(&h, &host, "!hosting 30 legendary central park")
        .await
        .expect("hosting should reply");

    // The invite landed in the air-support channel with the friend code as content
    let invites = h.gateway.live_messages_in(air_support_channel());
    assert_eq!(invites.len(), 1);
    let invite = &invites[0];
    assert_eq!(invite.message.content, "1234 5678 9012");
    let embed = invite.message.embed.as_ref().unwrap();
    assert_eq!(embed.title.as_deref(), Some("@Ash is hosting a raid group!"));
    let description = embed.description.as_deref().unwrap();
    assert!(description.contains("Location: central park"));
    assert!(description.contains("Raid: <:legendary:901>"));
    assert_eq!(
        embed.footer.as_deref(),
        Some("!hosting time pokemon/level location")
    );

    // The record matches the posted invite
    let group = only_group(&h);
    assert_eq!(group.host_id, host.id);
    assert_eq!(group.location, "central park");
    assert_eq!(group.raid_type, "<:legendary:901>");
    assert_eq!(group.channel_id, air_support_channel());
    assert_eq!(group.message_id, invite.id);

    // Expiration is scheduled 45 minutes after the raid time
    let jobs = h.scheduler.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].name, DELETE_GROUP_JOB);
    assert_eq!(jobs[0].fire_at, group.time + Duration::minutes(45));

    // The reply links back to the invite
    let announcement = reply.embed.unwrap().description.unwrap();
    assert!(announcement.contains("is hosting a <:legendary:901> raid!"));
    assert!(announcement.contains(&format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id(),
        air_support_channel(),
        invite.id
    )));
}

#[tokio::test]
async fn test_hosting_requires_a_trainer_card() {
    let h = TestHarness::new();
    let host = member(10, "Ash");

    let reply = run_command(&h, &host, "!hosting 30 legendary park")
        .await
        .expect("gate should reply");

    let embed = reply.embed.unwrap();
    assert!(embed.description.unwrap().contains("!trainer edit"));
    assert!(h.gateway.sent_messages().is_empty());
    assert!(h.groups.all().is_empty());
    assert!(h.scheduler.jobs().is_empty());
}

#[tokio::test]
async fn test_hosting_rejects_a_blank_friend_code() {
    let h = TestHarness::new();
    let host = member(10, "Ash");
    h.cards.insert(TrainerCard {
        user_id: host.id,
        trainer_name: "Ash".to_string(),
        friend_code: "   ".to_string(),
    });

    let reply = run_command(&h, &host, "!hosting 30 legendary park")
        .await
        .expect("gate should reply");

    assert!(reply.embed.unwrap().description.unwrap().contains("!trainer edit"));
    assert!(h.groups.all().is_empty());
}

#[tokio::test]
async fn test_hosting_rejects_an_unparseable_time() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    let reply = run_command(&h, &host, "!hosting abc legendary park")
        .await
        .expect("rejection should reply");

    assert!(reply
        .content
        .contains("`abc` is either not a valid time or is too far in the future."));
    assert!(h.groups.all().is_empty());
}

#[tokio::test]
async fn test_hosting_rejects_a_time_beyond_the_window() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    // 300 minutes from now is far past the 105 minute window
    let reply = run_command(&h, &host, "!hosting 300 legendary park")
        .await
        .expect("rejection should reply");

    assert!(reply.content.contains("is either not a valid time"));
    assert!(h.groups.all().is_empty());
    assert!(h.gateway.sent_messages().is_empty());
}

#[tokio::test]
async fn test_hosting_rejects_a_duplicate_location_case_insensitively() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    run_command(&h, &host, "!hosting 30 legendary Central Park").await;
    let reply = run_command(&h, &host, "!hosting 45 rayquaza CENTRAL PARK")
        .await
        .expect("duplicate should reply");

    assert!(reply
        .content
        .contains("you've already created a group for `central park`"));
    assert!(reply.content.contains("!cancel central park"));
    assert_eq!(h.groups.all().len(), 1);
    assert_eq!(h.gateway.live_messages_in(air_support_channel()).len(), 1);
    assert_eq!(h.scheduler.jobs().len(), 1);
}

#[tokio::test]
async fn test_hosting_rejects_an_oversized_duration() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    let reply = run_command(&h, &host, "!hosting 99999999999 legendary park")
        .await
        .expect("rejection should reply");

    assert!(reply.content.contains("is either not a valid time"));
    assert!(h.groups.all().is_empty());
    assert!(h.gateway.sent_messages().is_empty());
}

#[tokio::test]
async fn test_cancel_frees_the_location_for_rehosting() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    run_command(&h, &host, "!hosting 30 legendary central park").await;
    let first = only_group(&h);
    run_command(&h, &host, "!cancel central park").await;

    let reply = run_command(&h, &host, "!hosting 45 rayquaza Central Park")
        .await
        .expect("rehosting should reply");

    // A fresh group with a fresh invite, not the duplicate rejection
    assert!(reply.embed.is_some());
    let group = only_group(&h);
    assert_ne!(group.id, first.id);
    assert_eq!(group.location, "central park");
    assert_eq!(group.raid_type, "rayquaza");
    assert_eq!(h.gateway.live_messages_in(air_support_channel()).len(), 1);
}

#[tokio::test]
async fn test_distinct_hosts_may_share_a_location() {
    let h = TestHarness::new();
    let ash = h.register_member(10, "Ash");
    let misty = h.register_member(11, "Misty");

    run_command(&h, &ash, "!hosting 30 legendary park").await;
    run_command(&h, &misty, "!hosting 30 legendary park").await;

    assert_eq!(h.groups.all().len(), 2);
    assert_eq!(h.gateway.live_messages_in(air_support_channel()).len(), 2);
}

#[tokio::test]
async fn test_unknown_raid_type_falls_back_to_the_folded_token() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    run_command(&h, &host, "!hosting 30 Mewtwo gym").await;

    assert_eq!(only_group(&h).raid_type, "mewtwo");
}

#[tokio::test]
async fn test_raid_type_aliases_resolve_to_the_guild_emoji() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    run_command(&h, &host, "!hosting 30 leg gym").await;

    assert_eq!(only_group(&h).raid_type, "<:legendary:901>");
}

#[tokio::test]
async fn test_channel_lookup_is_memoized_across_commands() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    run_command(&h, &host, "!hosting 30 legendary park").await;
    run_command(&h, &host, "!hosting 30 legendary gym").await;

    assert_eq!(h.gateway.channel_lookup_count(), 1);
}

#[tokio::test]
async fn test_non_commands_and_bot_authors_are_silent() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    assert!(run_command(&h, &host, "anyone up for a raid?").await.is_none());
    assert!(run_command(&h, &host, "!trade mewtwo").await.is_none());
    assert!(run_command(&h, &bot_member(99), "!hosting 30 leg gym")
        .await
        .is_none());
    assert!(h.groups.all().is_empty());
}

#[tokio::test]
async fn test_missing_arguments_get_a_usage_reply() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    let reply = run_command(&h, &host, "!hosting 7:30")
        .await
        .expect("usage should reply");

    assert_eq!(
        reply.content,
        "Usage: `!hosting time pokemon/level location`"
    );
    assert!(h.groups.all().is_empty());
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_cancel_retracts_the_invite_and_names_rsvps() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary central park").await;
    let group = only_group(&h);

    h.gateway.react(group.message_id, "remote", member(20, "Misty"));
    h.gateway.react(group.message_id, "remote", bot_member(99));

    let reply = run_command(&h, &host, "!cancel Central Park")
        .await
        .expect("cancel should reply");

    assert!(reply.content.contains("You've canceled your raid group at central park"));
    assert!(reply.content.contains("Dropping RSVPs from: <@20>"));
    assert!(!reply.content.contains("<@99>"));
    assert!(h.gateway.message(group.message_id).unwrap().deleted);
    assert!(h.groups.all().is_empty());
}

#[tokio::test]
async fn test_cancel_without_a_group_is_benign() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    let reply = run_command(&h, &host, "!cancel nowhere")
        .await
        .expect("cancel should reply");

    assert_eq!(
        reply.content,
        "Group was already canceled and was never created"
    );
}

#[tokio::test]
async fn test_cancel_tolerates_an_already_deleted_invite() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;
    let group = only_group(&h);

    // The invite disappears out-of-band
    h.gateway
        .delete_message(group.channel_id, group.message_id)
        .await
        .unwrap();

    let reply = run_command(&h, &host, "!cancel park")
        .await
        .expect("cancel should reply");

    assert!(reply.content.contains("You've canceled your raid group"));
    assert!(reply.content.contains("*No RSVPs Found*"));
    assert!(h.groups.all().is_empty());
}

// ============================================================================
// Roster
// ============================================================================

#[tokio::test]
async fn test_roster_lists_rsvps_with_in_game_names() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;
    let group = only_group(&h);

    let misty = h.register_member(20, "Misty");
    h.gateway.react(group.message_id, "remote", misty);
    // Brock has no trainer card; his display name stands in
    h.gateway.react(group.message_id, "remote", member(21, "Brock"));
    h.gateway.react(group.message_id, "remote", bot_member(99));

    let reply = run_command(&h, &host, "!invites park")
        .await
        .expect("roster should reply");

    let embed = reply.embed.unwrap();
    assert_eq!(embed.title.as_deref(), Some("RSVPs for park"));
    let description = embed.description.unwrap();
    assert!(description.contains("<@20> - IGN: *IGN20*"));
    assert!(description.contains("<@21> - IGN: *Brock*"));
    assert!(!description.contains("<@99>"));
}

#[tokio::test]
async fn test_roster_without_rsvps_shows_the_empty_marker() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;

    let reply = run_command(&h, &host, "!invites park")
        .await
        .expect("roster should reply");

    assert_eq!(
        reply.embed.unwrap().description.as_deref(),
        Some("*No RSVPs Found*")
    );
}

#[tokio::test]
async fn test_roster_without_a_group_reports_it() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");

    let reply = run_command(&h, &host, "!invites nowhere")
        .await
        .expect("roster should reply");

    assert_eq!(reply.content, "Couldn't find a group for that location");
}

// ============================================================================
// Expiration
// ============================================================================

#[tokio::test]
async fn test_expiration_deletes_the_group_and_its_invite() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;
    let group = only_group(&h);
    let job = h.scheduler.jobs().into_iter().next().unwrap();

    let handler = ExpirationService::new(h.ctx.clone());
    handler.handle(job.payload.clone()).await.unwrap();

    assert!(h.groups.all().is_empty());
    assert!(h.gateway.message(group.message_id).unwrap().deleted);

    // At-least-once delivery: a redelivered job is a no-op
    handler.handle(job.payload).await.unwrap();
}

#[tokio::test]
async fn test_expiration_tolerates_a_missing_invite_message() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;
    let group = only_group(&h);
    let job = h.scheduler.jobs().into_iter().next().unwrap();

    h.gateway
        .delete_message(group.channel_id, group.message_id)
        .await
        .unwrap();

    ExpirationService::new(h.ctx.clone())
        .handle(job.payload)
        .await
        .unwrap();
    assert!(h.groups.all().is_empty());
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_marker_reaction_broadcasts_the_rsvp() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;
    let group = only_group(&h);

    let misty = h.register_member(20, "Misty");
    h.gateway.react(group.message_id, "remote", misty.clone());
    h.router()
        .handle_reaction_added(&h.marker_reaction(group.message_id, &misty))
        .await;

    let broadcasts = h.gateway.live_messages_in(raids_channel());
    assert_eq!(broadcasts.len(), 1);
    let description = broadcasts[0]
        .message
        .embed
        .as_ref()
        .unwrap()
        .description
        .as_deref()
        .unwrap();
    assert!(description.contains("<@20> has [RSVP'd to a raid]"));
    assert!(description.contains(&format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id(),
        air_support_channel(),
        group.message_id
    )));
}

#[tokio::test]
async fn test_reaction_without_a_card_is_revoked_with_a_notice() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;
    let group = only_group(&h);

    let brock = member(21, "Brock");
    h.gateway.react(group.message_id, "remote", brock.clone());
    h.router()
        .handle_reaction_added(&h.marker_reaction(group.message_id, &brock))
        .await;

    // The reaction is gone and the notice auto-expires
    let remaining = h
        .gateway
        .reaction_users(group.channel_id, group.message_id, "remote")
        .await
        .unwrap();
    assert!(remaining.iter().all(|u| u.id != brock.id));

    let notices = h.gateway.live_messages_in(raids_channel());
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message.delete_after_secs, Some(30));
    assert!(notices[0]
        .message
        .embed
        .as_ref()
        .unwrap()
        .description
        .as_deref()
        .unwrap()
        .contains("!trainer edit"));
}

#[tokio::test]
async fn test_foreign_reactions_are_ignored() {
    let h = TestHarness::new();
    let host = h.register_member(10, "Ash");
    run_command(&h, &host, "!hosting 30 legendary park").await;
    let group = only_group(&h);
    let misty = h.register_member(20, "Misty");

    // A bot member
    h.router()
        .handle_reaction_added(&h.marker_reaction(group.message_id, &bot_member(99)))
        .await;

    // The wrong emoji
    let mut event = h.marker_reaction(group.message_id, &misty);
    event.emoji_name = "thumbsup".to_string();
    h.router().handle_reaction_added(&event).await;

    // The wrong channel
    let mut event = h.marker_reaction(group.message_id, &misty);
    event.channel_id = raids_channel();
    h.router().handle_reaction_added(&event).await;

    assert!(h.gateway.live_messages_in(raids_channel()).is_empty());
}
