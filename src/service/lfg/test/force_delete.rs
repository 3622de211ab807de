use super::*;

/// Tests force-deleting an active request.
///
/// Expected: request returned and removed, notification deleted
#[tokio::test]
async fn removes_request_and_notification() {
    let mut registry = RequestRegistry::new();
    let request = register(&mut registry, AUTHOR, VOICE, 2);
    let notifier = RecordingNotifier::new();

    let removed = LfgService::new(&mut registry, &notifier, false)
        .force_delete(GUILD, AUTHOR)
        .await;

    assert_eq!(removed, Some(request.clone()));
    assert!(registry.is_empty());
    assert_eq!(
        notifier.calls(),
        vec![NotifierCall::Deleted(request.notification.unwrap())]
    );
}

/// Tests force-deleting for a user without a request.
///
/// Expected: None, registry and notifier untouched
#[tokio::test]
async fn missing_request_is_noop() {
    let mut registry = RequestRegistry::new();
    let request = register(&mut registry, AUTHOR, VOICE, 2);
    let notifier = RecordingNotifier::new();

    let removed = LfgService::new(&mut registry, &notifier, false)
        .force_delete(GUILD, SECOND)
        .await;

    assert_eq!(removed, None);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get_request(GUILD, AUTHOR), Some(&request));
    assert!(notifier.calls().is_empty());
}

/// Tests that a request only lives in its own guild.
///
/// Expected: None when deleting the same user in another guild
#[tokio::test]
async fn other_guild_is_untouched() {
    let mut registry = RequestRegistry::new();
    register(&mut registry, AUTHOR, VOICE, 2);
    let notifier = RecordingNotifier::new();

    let removed = LfgService::new(&mut registry, &notifier, false)
        .force_delete(GuildId::new(99), AUTHOR)
        .await;

    assert!(removed.is_none());
    assert!(registry.has_request(GUILD, AUTHOR));
}
