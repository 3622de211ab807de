use super::*;

/// Tests that a pushed request can be queried back.
///
/// Expected: has_request true and get_request returns the pushed request
#[test]
fn pushed_request_is_retrievable() {
    let mut registry = RequestRegistry::new();
    let request = make_request(GUILD, 10, 100, 2);

    registry.push(GUILD, UserId::new(10), request.clone());

    assert!(registry.has_request(GUILD, UserId::new(10)));
    assert_eq!(registry.get_request(GUILD, UserId::new(10)), Some(&request));
    assert_eq!(registry.len(), 1);
}

/// Tests that requests are isolated per guild.
///
/// Expected: the same user has no request in another guild
#[test]
fn requests_are_scoped_to_guild() {
    let mut registry = RequestRegistry::new();

    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 1));

    assert!(!registry.has_request(OTHER_GUILD, UserId::new(10)));
    assert!(registry.get_request(OTHER_GUILD, UserId::new(10)).is_none());
}

/// Tests that pushing for the same author overwrites the stale entry.
///
/// Expected: single entry holding the latest request
#[test]
fn push_overwrites_existing_entry() {
    let mut registry = RequestRegistry::new();

    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 1));
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 101, 2));

    let stored = registry.get_request(GUILD, UserId::new(10)).unwrap();
    assert_eq!(stored.voice_channel, ChannelId::new(101));
    assert_eq!(stored.looking_for.get(), 2);
    assert_eq!(registry.len(), 1);
}
