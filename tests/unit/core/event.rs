use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event() {
    let event = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
    };
    let key: Key = event.into();
    assert_eq!(key.code, KeyCode::Enter);
}

#[test]
fn test_uppercase_char_normalizes_to_shift() {
    let key: Key = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::NONE).into();
    assert_eq!(key, Key::shift(KeyCode::Char('d')));
}

#[test]
fn test_modifier_bits_compose() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn test_input_event_accessors() {
    let input = InputEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

    assert!(input.as_key().is_some());
    assert!(input.as_mouse().is_none());
}
