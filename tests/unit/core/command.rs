use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Refresh.name(), "refresh");
    assert_eq!(Command::PickUpload.name(), "upload");
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn test_from_name_round_trips_builtin_commands() {
    for cmd in [
        Command::CursorUp,
        Command::CursorDown,
        Command::PageUp,
        Command::PageDown,
        Command::CursorFirst,
        Command::CursorLast,
        Command::Refresh,
        Command::PickUpload,
        Command::DownloadSelected,
        Command::DeleteSelected,
        Command::Confirm,
        Command::Cancel,
        Command::Quit,
    ] {
        assert_eq!(Command::from_name(cmd.name()), cmd);
    }
}

#[test]
fn test_unknown_name_is_custom() {
    assert_eq!(
        Command::from_name("rename"),
        Command::Custom("rename".to_string())
    );
}
