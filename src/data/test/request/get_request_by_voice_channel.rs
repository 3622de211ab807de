use super::*;

/// Tests finding the request bound to a voice channel.
///
/// Expected: the request whose captured channel matches
#[test]
fn finds_request_bound_to_channel() {
    let mut registry = RequestRegistry::new();
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 2));
    registry.push(GUILD, UserId::new(11), make_request(GUILD, 11, 101, 1));

    let found = registry
        .get_request_by_voice_channel(GUILD, ChannelId::new(101))
        .unwrap();

    assert_eq!(found.author, UserId::new(11));
}

/// Tests a channel without a bound request.
///
/// Expected: None
#[test]
fn returns_none_for_unbound_channel() {
    let mut registry = RequestRegistry::new();
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 2));

    assert!(registry
        .get_request_by_voice_channel(GUILD, ChannelId::new(555))
        .is_none());
}

/// Tests that the channel lookup does not cross guilds.
///
/// Expected: None when the channel is bound in another guild only
#[test]
fn lookup_is_scoped_to_guild() {
    let mut registry = RequestRegistry::new();
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 2));

    assert!(registry
        .get_request_by_voice_channel(OTHER_GUILD, ChannelId::new(100))
        .is_none());
}

/// Tests that a popped request is no longer found by channel.
///
/// Expected: None after pop
#[test]
fn popped_request_is_not_found() {
    let mut registry = RequestRegistry::new();
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 2));
    registry.pop(GUILD, UserId::new(10));

    assert!(registry
        .get_request_by_voice_channel(GUILD, ChannelId::new(100))
        .is_none());
}
