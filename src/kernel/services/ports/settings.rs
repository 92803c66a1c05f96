use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::transfer::DEFAULT_API_BASE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_active_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_icon_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_icon_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            border: Some("dark_gray".to_string()),
            drop_active_border: Some("blue".to_string()),
            header_fg: Some("cyan".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            success_fg: Some("green".to_string()),
            error_fg: Some("red".to_string()),
            image_icon_fg: Some("blue".to_string()),
            document_icon_fg: Some("green".to_string()),
            selected_bg: Some("dark_gray".to_string()),
            selected_fg: Some("white".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            download_dir: None,
            keybindings: Vec::new(),
            theme: ThemeSettings::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
