use super::*;

#[test]
fn parse_color_accepts_names_and_hex() {
    assert_eq!(parse_color("Green"), Some(Color::Indexed(2)));
    assert_eq!(parse_color(" dark_gray "), Some(Color::Indexed(8)));
    assert_eq!(parse_color("#1e90ff"), Some(Color::Rgb(0x1e, 0x90, 0xff)));
}

#[test]
fn parse_color_rejects_unknown_values() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn default_theme_settings_match_builtin_theme() {
    let mut theme = UiTheme::default();
    let before = theme.clone();
    theme.apply_settings(&ThemeSettings::default());

    assert_eq!(theme.border, before.border);
    assert_eq!(theme.drop_active_border, before.drop_active_border);
    assert_eq!(theme.success_fg, before.success_fg);
    assert_eq!(theme.error_fg, before.error_fg);
    assert_eq!(theme.selected_fg, before.selected_fg);
}

#[test]
fn apply_settings_keeps_colour_for_bad_entries() {
    let mut theme = UiTheme::default();
    let settings = ThemeSettings {
        error_fg: Some("#ff0000".to_string()),
        success_fg: Some("not-a-colour".to_string()),
        border: None,
        ..ThemeSettings::default()
    };

    theme.apply_settings(&settings);

    assert_eq!(theme.error_fg, Color::Rgb(0xff, 0, 0));
    assert_eq!(theme.success_fg, Color::Indexed(2));
    assert_eq!(theme.border, Color::Indexed(8));
}
