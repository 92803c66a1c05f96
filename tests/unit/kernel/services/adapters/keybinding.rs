use super::*;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn list_has_navigation_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::List, &Key::simple(KeyCode::Down)),
        Some(&Command::CursorDown)
    );
    assert_eq!(
        service.resolve(KeybindingContext::List, &Key::shift(KeyCode::Char('g'))),
        Some(&Command::CursorLast)
    );
}

#[test]
fn global_quit_falls_through_in_every_context() {
    let service = KeybindingService::new();
    let quit = Key::ctrl(KeyCode::Char('q'));
    for context in [
        KeybindingContext::Global,
        KeybindingContext::List,
        KeybindingContext::Confirm,
        KeybindingContext::Input,
    ] {
        assert_eq!(service.resolve(context, &quit), Some(&Command::Quit));
    }
}

#[test]
fn plain_q_only_quits_from_the_list() {
    let service = KeybindingService::new();
    let q = Key::simple(KeyCode::Char('q'));
    assert_eq!(service.resolve(KeybindingContext::List, &q), Some(&Command::Quit));
    assert_eq!(service.resolve(KeybindingContext::Input, &q), None);
}

#[test]
fn enter_means_different_things_per_context() {
    let service = KeybindingService::new();
    let enter = Key::simple(KeyCode::Enter);
    assert_eq!(
        service.resolve(KeybindingContext::List, &enter),
        Some(&Command::DownloadSelected)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Confirm, &enter),
        Some(&Command::Confirm)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Input, &enter),
        Some(&Command::Confirm)
    );
}

#[test]
fn context_parse_accepts_aliases() {
    assert_eq!(KeybindingContext::parse(" List "), Some(KeybindingContext::List));
    assert_eq!(
        KeybindingContext::parse("confirm_dialog"),
        Some(KeybindingContext::Confirm)
    );
    assert_eq!(KeybindingContext::parse("upload"), Some(KeybindingContext::Input));
    assert_eq!(KeybindingContext::parse("editor"), None);
}

#[test]
fn apply_rules_binds_and_unbinds() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        rule("ctrl+r", "refresh", Some("list")),
        rule("x", "", Some("list")),
        rule("not a key", "quit", None),
    ]);

    assert_eq!(
        service.resolve(KeybindingContext::List, &Key::ctrl(KeyCode::Char('r'))),
        Some(&Command::Refresh)
    );
    assert_eq!(
        service.resolve(KeybindingContext::List, &Key::simple(KeyCode::Char('x'))),
        None
    );
}

#[test]
fn apply_rules_defaults_to_global_context() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[rule("F1", "upload", None)]);

    assert_eq!(
        service
            .bindings(KeybindingContext::Global)
            .get(&Key::simple(KeyCode::F(1))),
        Some(&Command::PickUpload)
    );
}

#[test]
fn unknown_command_names_become_custom() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[rule("z", "frobnicate", Some("list"))]);
    assert_eq!(
        service.resolve(KeybindingContext::List, &Key::simple(KeyCode::Char('z'))),
        Some(&Command::Custom("frobnicate".to_string()))
    );
}
