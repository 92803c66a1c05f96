//! Semantic commands: what a key means, independent of which key it is.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // list navigation
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorFirst,
    CursorLast,

    // transfers
    Refresh,
    PickUpload,
    DownloadSelected,
    DeleteSelected,

    // dialogs
    Confirm,
    Cancel,

    Quit,

    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::CursorFirst => "cursorFirst",
            Command::CursorLast => "cursorLast",
            Command::Refresh => "refresh",
            Command::PickUpload => "upload",
            Command::DownloadSelected => "download",
            Command::DeleteSelected => "delete",
            Command::Confirm => "confirm",
            Command::Cancel => "cancel",
            Command::Quit => "quit",
            Command::Custom(name) => name.as_str(),
        }
    }

    pub fn from_name(name: &str) -> Command {
        match name {
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "cursorFirst" => Command::CursorFirst,
            "cursorLast" => Command::CursorLast,
            "refresh" => Command::Refresh,
            "upload" => Command::PickUpload,
            "download" => Command::DownloadSelected,
            "delete" => Command::DeleteSelected,
            "confirm" => Command::Confirm,
            "cancel" => Command::Cancel,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
