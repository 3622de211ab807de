use super::*;

/// Tests that pop removes and returns the request.
///
/// Expected: returned request matches, subsequent queries are empty
#[test]
fn pop_removes_request() {
    let mut registry = RequestRegistry::new();
    let request = make_request(GUILD, 10, 100, 2);
    registry.push(GUILD, UserId::new(10), request.clone());

    let popped = registry.pop(GUILD, UserId::new(10));

    assert_eq!(popped, Some(request));
    assert!(!registry.has_request(GUILD, UserId::new(10)));
    assert!(registry.get_request(GUILD, UserId::new(10)).is_none());
    assert!(registry.is_empty());
}

/// Tests popping a request that does not exist.
///
/// Expected: None and the registry is unchanged
#[test]
fn pop_missing_request_returns_none() {
    let mut registry = RequestRegistry::new();
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 2));

    assert!(registry.pop(GUILD, UserId::new(11)).is_none());
    assert!(registry.pop(OTHER_GUILD, UserId::new(10)).is_none());
    assert_eq!(registry.len(), 1);
}

/// Tests that popping leaves other authors untouched.
///
/// Expected: the second author's request survives
#[test]
fn pop_keeps_other_requests() {
    let mut registry = RequestRegistry::new();
    registry.push(GUILD, UserId::new(10), make_request(GUILD, 10, 100, 2));
    registry.push(GUILD, UserId::new(11), make_request(GUILD, 11, 101, 1));

    registry.pop(GUILD, UserId::new(10));

    assert!(registry.has_request(GUILD, UserId::new(11)));
    assert_eq!(registry.len(), 1);
}
