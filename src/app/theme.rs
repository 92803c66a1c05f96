//! UI colours, kept in one place and overridable from the settings file.

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub border: Color,
    pub drop_active_border: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    pub success_fg: Color,
    pub error_fg: Color,
    pub image_icon_fg: Color,
    pub document_icon_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(8),             // DarkGray
            drop_active_border: Color::Indexed(4), // Blue
            header_fg: Color::Indexed(6),          // Cyan
            muted_fg: Color::Indexed(8),
            success_fg: Color::Indexed(2), // Green
            error_fg: Color::Indexed(1),   // Red
            image_icon_fg: Color::Indexed(4),
            document_icon_fg: Color::Indexed(2),
            selected_bg: Color::Indexed(8),
            selected_fg: Color::Indexed(15), // White
        }
    }
}

impl UiTheme {
    /// Unset or unparseable entries keep the current colour.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let pairs: [(&mut Color, &Option<String>); 10] = [
            (&mut self.border, &settings.border),
            (&mut self.drop_active_border, &settings.drop_active_border),
            (&mut self.header_fg, &settings.header_fg),
            (&mut self.muted_fg, &settings.muted_fg),
            (&mut self.success_fg, &settings.success_fg),
            (&mut self.error_fg, &settings.error_fg),
            (&mut self.image_icon_fg, &settings.image_icon_fg),
            (&mut self.document_icon_fg, &settings.document_icon_fg),
            (&mut self.selected_bg, &settings.selected_bg),
            (&mut self.selected_fg, &settings.selected_fg),
        ];
        for (slot, value) in pairs {
            if let Some(color) = value.as_deref().and_then(parse_color) {
                *slot = color;
            }
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
