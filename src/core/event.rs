use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A normalized key chord, usable as a map key.
///
/// Letters are stored lowercase with SHIFT carried in the modifiers. For
/// other printable characters SHIFT is dropped, since the character itself
/// already reflects it and terminals disagree on reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::normalize(code, modifiers)
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    pub fn ctrl_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL | KeyModifiers::SHIFT)
    }

    fn normalize(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let mut modifiers = modifiers & !(KeyModifiers::HYPER | KeyModifiers::META);
        let code = match code {
            KeyCode::Char(ch) if ch.is_ascii_uppercase() => {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::Char(ch.to_ascii_lowercase())
            }
            KeyCode::Char(ch) if !ch.is_ascii_alphabetic() => {
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::Char(ch)
            }
            KeyCode::BackTab => {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::Tab
            }
            other => other,
        };
        Self { code, modifiers }
    }

    /// The character to insert for a plain (or shifted) printable key.
    pub fn printable(&self) -> Option<char> {
        let KeyCode::Char(ch) = self.code else {
            return None;
        };
        let extra = self.modifiers - KeyModifiers::SHIFT;
        if !extra.is_empty() {
            return None;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            Some(ch.to_ascii_uppercase())
        } else {
            Some(ch)
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Key releases are reported by some terminals; only presses and repeats act.
pub fn is_actionable(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
