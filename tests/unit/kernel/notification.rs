use super::*;

#[test]
fn setting_arms_five_second_deadline() {
    let now = Instant::now();
    let mut slot = NotificationSlot::default();

    slot.success("saved", now);

    assert_eq!(slot.current().map(|n| n.kind), Some(NotificationKind::Success));
    assert_eq!(slot.expires_at(), Some(now + NOTIFICATION_TTL));
}

#[test]
fn expire_before_deadline_keeps_message() {
    let now = Instant::now();
    let mut slot = NotificationSlot::default();
    slot.error("boom", now);

    assert!(!slot.expire(now + Duration::from_millis(4999)));
    assert_eq!(slot.current().map(|n| n.text.as_str()), Some("boom"));

    assert!(slot.expire(now + NOTIFICATION_TTL));
    assert!(slot.is_empty());
    assert!(slot.expires_at().is_none());
}

#[test]
fn second_message_replaces_first_and_rearms() {
    let start = Instant::now();
    let mut slot = NotificationSlot::default();
    slot.success("first", start);

    let second_at = start + Duration::from_secs(3);
    slot.error("second", second_at);

    // The first window ends, but only the second message's deadline counts.
    assert!(!slot.expire(start + NOTIFICATION_TTL));
    let current = slot.current().unwrap();
    assert_eq!(current.text, "second");
    assert_eq!(current.kind, NotificationKind::Error);

    assert!(slot.expire(second_at + NOTIFICATION_TTL));
    assert!(slot.is_empty());
}

#[test]
fn empty_text_clears_slot() {
    let now = Instant::now();
    let mut slot = NotificationSlot::default();
    slot.success("x", now);
    slot.success("", now);
    assert!(slot.is_empty());
    assert!(slot.expires_at().is_none());
}

#[test]
fn expire_on_empty_slot_is_noop() {
    let mut slot = NotificationSlot::default();
    assert!(!slot.expire(Instant::now()));
}
