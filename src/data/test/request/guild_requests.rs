use super::*;

/// Tests listing the requests of a single guild.
///
/// Expected: only that guild's requests, and authors match
#[test]
fn lists_only_requests_of_guild() {
    let mut registry = RequestRegistry::new();
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 2));
    registry.push(GUILD, UserId::new(11), make_request(GUILD, 11, 101, 1));
    registry.push(
        OTHER_GUILD,
        UserId::new(12),
        make_request(OTHER_GUILD, 12, 102, 1),
    );

    let requests = registry.guild_requests(GUILD);
    let mut authors: Vec<UserId> = requests.iter().map(|request| request.author).collect();
    authors.sort();

    assert_eq!(authors, vec![UserId::new(10), UserId::new(11)]);
    assert_eq!(registry.len(), 3);

    let mut listed = registry.authors(GUILD);
    listed.sort();
    assert_eq!(listed, authors);
}

/// Tests listing a guild with no requests.
///
/// Expected: empty list
#[test]
fn empty_guild_lists_nothing() {
    let registry = RequestRegistry::new();

    assert!(registry.guild_requests(GUILD).is_empty());
    assert!(registry.authors(GUILD).is_empty());
}
