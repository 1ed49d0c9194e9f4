//! Save-state message and live word count.

use regex::Regex;
use std::sync::OnceLock;

pub const SAVED_MESSAGE: &str = "Your Document Has Been Saved!";
pub const IDLE_BANNER: &str = "Scribe Text Editor - Version 2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Saved,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    kind: StatusKind,
    word_count: usize,
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Number of `\w+` runs in `text`.
pub fn count_words(text: &str) -> usize {
    word_regex().find_iter(text).count()
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: IDLE_BANNER.to_string(),
            kind: StatusKind::Idle,
            word_count: 0,
        }
    }

    /// Show the saved message or the idle banner, and recount words.
    pub fn update_status(&mut self, saved: bool, text: &str) {
        self.show_saved(saved);
        self.refresh_word_count(text);
    }

    pub fn show_saved(&mut self, saved: bool) {
        if saved {
            self.message = SAVED_MESSAGE.to_string();
            self.kind = StatusKind::Saved;
        } else {
            self.message = IDLE_BANNER.to_string();
            self.kind = StatusKind::Idle;
        }
    }

    pub fn refresh_word_count(&mut self, text: &str) {
        self.word_count = count_words(text);
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.kind = StatusKind::Info;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.kind = StatusKind::Error;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn word_count_label(&self) -> String {
        format!("Word Count: {}", self.word_count)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/status_bar.rs"]
mod tests;
