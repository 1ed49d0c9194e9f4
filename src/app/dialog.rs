//! Modal dialogs: unsaved-changes confirm, text prompts, message boxes.
//!
//! A dialog swallows every key while open and reports what happened through
//! `DialogOutcome`; the editor decides what to do with it.

use crate::core::Key;
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const UNSAVED_TITLE: &str = "Unsaved Changes";
pub const UNSAVED_MESSAGE: &str = "Do you want to save the changes?";

/// What to resume once the unsaved-changes question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    NewDocument,
    OpenDocument,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
    Cancel,
}

impl ConfirmChoice {
    pub const ALL: [ConfirmChoice; 3] = [ConfirmChoice::Yes, ConfirmChoice::No, ConfirmChoice::Cancel];

    pub fn label(self) -> &'static str {
        match self {
            ConfirmChoice::Yes => "Yes",
            ConfirmChoice::No => "No",
            ConfirmChoice::Cancel => "Cancel",
        }
    }

    fn next(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Cancel,
            ConfirmChoice::Cancel => ConfirmChoice::Yes,
        }
    }

    fn prev(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::Cancel,
            ConfirmChoice::No => ConfirmChoice::Yes,
            ConfirmChoice::Cancel => ConfirmChoice::No,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Find,
    ReplaceFind,
    ReplaceWith { find: String },
    OpenPath,
    /// `then` resumes a pending action once the save succeeds.
    SavePath { then: Option<Pending> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// Single-line text input. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
            cursor: initial.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\r' => {}
                '\n' | '\t' => self.insert(' '),
                ch => self.insert(ch),
            }
        }
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
            .unwrap_or(self.value.len())
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let next = self.next_boundary();
        self.value.drain(self.cursor..next);
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// The part of the value that fits in `width` cells with the cursor
    /// visible, and the cursor's cell offset inside it.
    pub fn visible(&self, width: usize) -> (&str, usize) {
        if width == 0 {
            return ("", 0);
        }
        // Keep one cell for the cursor itself.
        let budget = width.saturating_sub(1);
        let before = &self.value[..self.cursor];
        let mut start = 0;
        if before.width() > budget {
            let mut used = 0;
            start = self.cursor;
            for (idx, ch) in before.char_indices().rev() {
                let w = ch.width().unwrap_or(0);
                if used + w > budget {
                    break;
                }
                used += w;
                start = idx;
            }
        }

        let mut end = start;
        let mut used = 0;
        for (idx, ch) in self.value[start..].char_indices() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end = start + idx + ch.len_utf8();
        }

        let cursor_col = self.value[start..self.cursor].width();
        (&self.value[start..end], cursor_col)
    }

    /// Edit keys. Returns false for keys the field does not handle.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.left(),
            KeyCode::Right => self.right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => self.clear(),
            _ => match key.printable() {
                Some(ch) => self.insert(ch),
                None => return false,
            },
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Confirm {
        title: String,
        message: String,
        pending: Pending,
        choice: ConfirmChoice,
    },
    Prompt {
        kind: PromptKind,
        title: String,
        label: String,
        input: InputField,
        hint: Option<String>,
    },
    Message {
        title: String,
        body: String,
        level: MessageLevel,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open.
    Open,
    Answered {
        choice: ConfirmChoice,
        pending: Pending,
    },
    Submitted {
        kind: PromptKind,
        value: String,
    },
    Cancelled,
    Dismissed,
}

impl Dialog {
    pub fn unsaved_changes(pending: Pending) -> Self {
        Dialog::Confirm {
            title: UNSAVED_TITLE.to_string(),
            message: UNSAVED_MESSAGE.to_string(),
            pending,
            choice: ConfirmChoice::Yes,
        }
    }

    pub fn prompt(
        kind: PromptKind,
        title: impl Into<String>,
        label: impl Into<String>,
        initial: &str,
    ) -> Self {
        Dialog::Prompt {
            kind,
            title: title.into(),
            label: label.into(),
            input: InputField::new(initial),
            hint: None,
        }
    }

    pub fn with_hint(mut self, text: impl Into<String>) -> Self {
        if let Dialog::Prompt { hint, .. } = &mut self {
            *hint = Some(text.into());
        }
        self
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Dialog::Message {
            title: title.into(),
            body: body.into(),
            level: MessageLevel::Info,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Dialog::Message {
            title: title.into(),
            body: body.into(),
            level: MessageLevel::Error,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Dialog::Confirm { title, .. }
            | Dialog::Prompt { title, .. }
            | Dialog::Message { title, .. } => title,
        }
    }

    pub fn handle_key(&mut self, key: &Key) -> DialogOutcome {
        match self {
            Dialog::Confirm {
                pending, choice, ..
            } => {
                let answer = |choice| DialogOutcome::Answered {
                    choice,
                    pending: *pending,
                };
                if let Some(ch) = key.printable() {
                    return match ch.to_ascii_lowercase() {
                        'y' => answer(ConfirmChoice::Yes),
                        'n' => answer(ConfirmChoice::No),
                        'c' => answer(ConfirmChoice::Cancel),
                        _ => DialogOutcome::Open,
                    };
                }
                match key.code {
                    KeyCode::Esc => answer(ConfirmChoice::Cancel),
                    KeyCode::Enter => answer(*choice),
                    KeyCode::Left => {
                        *choice = choice.prev();
                        DialogOutcome::Open
                    }
                    KeyCode::Right | KeyCode::Tab => {
                        *choice = choice.next();
                        DialogOutcome::Open
                    }
                    _ => DialogOutcome::Open,
                }
            }
            Dialog::Prompt { kind, input, .. } => match key.code {
                KeyCode::Enter => DialogOutcome::Submitted {
                    kind: kind.clone(),
                    value: input.value().to_string(),
                },
                KeyCode::Esc => DialogOutcome::Cancelled,
                _ => {
                    input.handle_key(key);
                    DialogOutcome::Open
                }
            },
            Dialog::Message { .. } => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => DialogOutcome::Dismissed,
                _ => DialogOutcome::Open,
            },
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Dialog::Prompt { input, .. } = self {
            input.insert_str(text);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/dialog.rs"]
mod tests;
