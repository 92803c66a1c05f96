use super::*;
use tempfile::tempdir;

#[test]
fn parse_keybinding_reads_modifiers() {
    assert_eq!(
        parse_keybinding("Ctrl+Shift+R"),
        Some(Key::new(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(
        parse_keybinding("alt + enter"),
        Some(Key::new(KeyCode::Enter, KeyModifiers::ALT))
    );
}

#[test]
fn parse_keybinding_uppercase_char_implies_shift() {
    assert_eq!(parse_keybinding("G"), Some(Key::shift(KeyCode::Char('g'))));
}

#[test]
fn parse_keybinding_function_keys_and_single_f() {
    assert_eq!(parse_keybinding("F5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("space"), Some(Key::simple(KeyCode::Char(' '))));
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+banana"), None);
}

#[test]
fn ensure_settings_file_at_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".filedeck").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.api_base, "http://localhost:8080");

    std::fs::write(&path, r#"{"api_base":"http://files.local:9000"}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.api_base, "http://files.local:9000");
    assert!(settings.keybindings.is_empty());
}

#[test]
fn load_settings_from_invalid_json_is_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(load_settings_from(&path).is_none());
    assert!(load_settings_from(&dir.path().join("missing.json")).is_none());
}

#[test]
fn settings_path_lives_under_app_dir() {
    if let Some(path) = get_settings_path() {
        let text = path.to_string_lossy();
        assert!(text.contains(SETTINGS_DIR));
        assert!(text.ends_with(SETTINGS_FILE));
    }
}
