use super::*;

fn check(
    registry: &RequestRegistry,
    guild: &GuildSnapshot,
    players: i64,
) -> Result<(), RequestRejection> {
    check_can_start_request(registry, GUILD, AUTHOR, players, &guild.requester_voice(AUTHOR))
        .map(|_| ())
}

/// Tests the accepted player counts.
///
/// Expected: 1 and 2 accepted, anything else rejected
#[test]
fn accepts_only_one_or_two_players() {
    let registry = RequestRegistry::new();
    let guild = guild_with(&[AUTHOR]);

    assert_eq!(check(&registry, &guild, 1), Ok(()));
    assert_eq!(check(&registry, &guild, 2), Ok(()));
    assert_eq!(
        check(&registry, &guild, 0),
        Err(RequestRejection::InvalidPlayerCount(0))
    );
    assert_eq!(
        check(&registry, &guild, 3),
        Err(RequestRejection::InvalidPlayerCount(3))
    );
}

/// Tests that a second request by the same user is refused.
///
/// Expected: Err(AlreadyActive), checked before the player count
#[test]
fn rejects_second_request_of_user() {
    let mut registry = RequestRegistry::new();
    register(&mut registry, AUTHOR, OTHER_VOICE, 1);
    let guild = guild_with(&[AUTHOR]);

    assert_eq!(check(&registry, &guild, 2), Err(RequestRejection::AlreadyActive));
    assert_eq!(check(&registry, &guild, 7), Err(RequestRejection::AlreadyActive));
}

/// Tests a requester who is not connected to voice.
///
/// Expected: Err(NotInVoice)
#[test]
fn rejects_requester_outside_voice() {
    let registry = RequestRegistry::new();

    assert_eq!(
        check(&registry, &guild_with(&[]), 1),
        Err(RequestRejection::NotInVoice)
    );
}

/// Tests a requester connected to a channel the bot cannot resolve.
///
/// Expected: Err(UnresolvedChannel) with the administrator message
#[test]
fn rejects_unresolved_channel() {
    let registry = RequestRegistry::new();
    let hidden = ChannelId::new(77);
    let guild = guild_with(&[]).with_connected(AUTHOR, hidden);

    let rejection = check(&registry, &guild, 1).unwrap_err();

    assert_eq!(rejection, RequestRejection::UnresolvedChannel(hidden));
    assert!(rejection.to_string().contains("contact an administrator"));
}

/// Tests a channel already holding a full party.
///
/// Expected: Err(PartyFull) when occupancy reaches players + 1
#[test]
fn rejects_full_party() {
    let registry = RequestRegistry::new();
    let guild = guild_with(&[AUTHOR, SECOND]);

    assert_eq!(
        check(&registry, &guild, 1),
        Err(RequestRejection::PartyFull {
            channel: VOICE,
            occupancy: 2
        })
    );
    assert_eq!(check(&registry, &guild, 2), Ok(()));
}

/// Tests a channel already bound to another member's request.
///
/// Expected: Err(ChannelTaken) naming the owner
#[test]
fn rejects_channel_with_existing_request() {
    let mut registry = RequestRegistry::new();
    register(&mut registry, SECOND, VOICE, 2);
    let guild = guild_with(&[AUTHOR, SECOND]);

    let rejection = check(&registry, &guild, 2).unwrap_err();

    assert_eq!(
        rejection,
        RequestRejection::ChannelTaken {
            owner: SECOND,
            channel: VOICE
        }
    );
    assert!(rejection.to_string().starts_with("<@11>"));
}

/// Tests that the successful check returns the channel to bind.
///
/// Expected: Ok with the validated count and the requester's channel
#[test]
fn returns_channel_to_bind() {
    let registry = RequestRegistry::new();
    let guild = guild_with(&[AUTHOR]);

    let (looking_for, channel) =
        check_can_start_request(&registry, GUILD, AUTHOR, 2, &guild.requester_voice(AUTHOR))
            .unwrap();

    assert_eq!(looking_for.get(), 2);
    assert_eq!(channel.id, VOICE);
    assert_eq!(channel.occupants, vec![AUTHOR]);
}
