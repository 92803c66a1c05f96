//! Key bindings: key → command, resolved per focus context with a global fallback.

use super::settings::parse_keybinding;
use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    List,
    Confirm,
    Input,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "list" | "files" | "filelist" | "file_list" => Some(Self::List),
            "confirm" | "confirmdialog" | "confirm_dialog" => Some(Self::Confirm),
            "input" | "inputdialog" | "input_dialog" | "upload" => Some(Self::Input),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    list: FxHashMap<Key, Command>,
    confirm: FxHashMap<Key, Command>,
    input: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            list: default_list_keybindings(),
            confirm: default_confirm_keybindings(),
            input: default_input_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            _ => self
                .map(context)
                .get(key)
                .or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        self.map(context)
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies user rules in order. Unparseable keys are skipped; an empty command unbinds.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring unparseable keybinding");
                continue;
            };
            let context = rule
                .context
                .as_deref()
                .and_then(KeybindingContext::parse)
                .unwrap_or(KeybindingContext::Global);
            if rule.command.trim().is_empty() {
                let _ = self.unbind(context, &key);
            } else {
                self.bind(context, key, Command::from_name(&rule.command));
            }
        }
    }

    fn map(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::List => &self.list,
            KeybindingContext::Confirm => &self.confirm,
            KeybindingContext::Input => &self.input,
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::List => &mut self.list,
            KeybindingContext::Confirm => &mut self.confirm,
            KeybindingContext::Input => &mut self.input,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(4);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);

    bindings
}

fn default_list_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(24);

    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorFirst);
    bindings.insert(Key::simple(KeyCode::Char('g')), Command::CursorFirst);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLast);
    bindings.insert(Key::shift(KeyCode::Char('g')), Command::CursorLast);

    bindings.insert(Key::simple(KeyCode::Char('r')), Command::Refresh);
    bindings.insert(Key::simple(KeyCode::F(5)), Command::Refresh);
    bindings.insert(Key::simple(KeyCode::Char('u')), Command::PickUpload);
    bindings.insert(Key::simple(KeyCode::Enter), Command::DownloadSelected);
    bindings.insert(Key::simple(KeyCode::Char('d')), Command::DownloadSelected);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteSelected);
    bindings.insert(Key::simple(KeyCode::Char('x')), Command::DeleteSelected);
    bindings.insert(Key::simple(KeyCode::Char('q')), Command::Quit);

    bindings
}

fn default_confirm_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(6);

    bindings.insert(Key::simple(KeyCode::Char('y')), Command::Confirm);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Confirm);
    bindings.insert(Key::simple(KeyCode::Char('n')), Command::Cancel);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Cancel);

    bindings
}

fn default_input_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(2);

    bindings.insert(Key::simple(KeyCode::Enter), Command::Confirm);
    bindings.insert(Key::simple(KeyCode::Esc), Command::Cancel);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
