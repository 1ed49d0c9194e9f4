//! Key -> command map.
//!
//! - defaults matching the menu accelerators
//! - one platform check: the font-size-up key
//! - user overrides from settings

use crate::core::{Command, Key};
use crate::services::settings::KeybindingRule;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// macOS keyboards put `+` on the `=` key; bind the unshifted one there.
    pub fn zoom_in_key(self) -> Key {
        match self {
            Platform::MacOs => Key::ctrl(KeyCode::Char('=')),
            Platform::Other => Key::ctrl(KeyCode::Char('+')),
        }
    }
}

pub struct KeybindingService {
    bindings: HashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults(Platform::current())
    }

    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn with_defaults(platform: Platform) -> Self {
        let mut bindings = HashMap::new();
        let ch = |c: char| KeyCode::Char(c);

        // ==================== File ====================
        bindings.insert(Key::ctrl(ch('n')), Command::NewDocument);
        bindings.insert(Key::ctrl(ch('o')), Command::OpenDocument);
        bindings.insert(Key::ctrl(ch('s')), Command::Save);
        bindings.insert(Key::ctrl_shift(ch('s')), Command::SaveAs);
        bindings.insert(Key::ctrl(ch('q')), Command::Exit);

        // ==================== Edit ====================
        bindings.insert(Key::ctrl(ch('z')), Command::Undo);
        bindings.insert(Key::ctrl(ch('y')), Command::Redo);
        bindings.insert(Key::ctrl(ch('f')), Command::Find);
        bindings.insert(Key::ctrl(ch('r')), Command::Replace);
        bindings.insert(Key::ctrl(ch('c')), Command::Copy);
        bindings.insert(Key::ctrl(ch('x')), Command::Cut);
        bindings.insert(Key::ctrl(ch('v')), Command::Paste);
        bindings.insert(Key::ctrl(ch('a')), Command::SelectAll);

        // ==================== Format ====================
        bindings.insert(Key::ctrl(ch('b')), Command::ToggleBold);
        bindings.insert(Key::ctrl(ch('i')), Command::ToggleItalic);
        bindings.insert(Key::ctrl(ch('u')), Command::ToggleUnderline);
        bindings.insert(platform.zoom_in_key(), Command::IncreaseFontSize);
        bindings.insert(Key::ctrl(ch('-')), Command::DecreaseFontSize);

        // ==================== Menu ====================
        bindings.insert(Key::simple(KeyCode::F(10)), Command::OpenMenu);

        // ==================== Text area ====================
        bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
        bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
        bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
        bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
        bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
        bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
        bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
        bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
        bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
        bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

        bindings.insert(Key::shift(KeyCode::Left), Command::SelectLeft);
        bindings.insert(Key::shift(KeyCode::Right), Command::SelectRight);
        bindings.insert(Key::shift(KeyCode::Up), Command::SelectUp);
        bindings.insert(Key::shift(KeyCode::Down), Command::SelectDown);
        bindings.insert(Key::shift(KeyCode::Home), Command::SelectLineStart);
        bindings.insert(Key::shift(KeyCode::End), Command::SelectLineEnd);

        bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
        bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
        bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
        bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

        Self { bindings }
    }

    pub fn get(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    pub fn keys_for_command(&self, command: &Command) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .bindings
            .iter()
            .filter(|(_, cmd)| *cmd == command)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|k| format_key(k));
        keys
    }

    /// Apply user rules. Returns the rules that could not be understood.
    pub fn apply_rules<'a>(&mut self, rules: &'a [KeybindingRule]) -> Vec<&'a KeybindingRule> {
        let mut rejected = Vec::new();
        for rule in rules {
            match (parse_keybinding(&rule.key), Command::from_name(&rule.command)) {
                (Some(key), Some(command)) => self.bind(key, command),
                _ => rejected.push(rule),
            }
        }
        rejected
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `"ctrl+shift+s"`, `"ctrl++"`, `"f10"` and the like.
pub fn parse_keybinding(value: &str) -> Option<Key> {
    let value = value.trim();
    let (mods_part, key_part) = if let Some(head) = value.strip_suffix("++") {
        (head, "+")
    } else if value == "+" {
        ("", "+")
    } else {
        match value.rsplit_once('+') {
            Some((head, tail)) => (head, tail),
            None => ("", value),
        }
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods_part.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" => modifiers |= KeyModifiers::SUPER,
            _ => return None,
        }
    }

    Some(Key::new(parse_key_code(key_part)?, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "" => return None,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        "plus" => KeyCode::Char('+'),
        "minus" => KeyCode::Char('-'),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => KeyCode::F(v_lc[1..].parse().ok()?),
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(code)
}

/// Human label for a key, e.g. `Ctrl+Shift+S`.
pub fn format_key(key: &Key) -> String {
    let mut parts: Vec<String> = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SUPER) {
        parts.push("Super".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    let code = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        other => format!("{other:?}"),
    };
    parts.push(code);
    parts.join("+")
}

#[cfg(test)]
#[path = "../../tests/unit/services/keybinding.rs"]
mod tests;
