use super::{Editor, TerminalRequest};
use crate::app::dialog::{ConfirmChoice, Dialog, DialogOutcome, Pending, PromptKind};
use crate::core::Command;
use crate::models::FormatTag;
use crate::services::file;

pub const RELEASE_NOTES: &str = "Version 2.0 - Text Editor";
pub const ABOUT_TITLE: &str = "About Scribe";
pub const ABOUT_TEXT: &str = "A simple Rust Text Editor";

impl Editor {
    pub fn dispatch(&mut self, command: Command) {
        tracing::debug!(command = command.name(), "dispatch");
        if command.is_edit_command() || command.is_cursor_command() {
            self.follow_cursor = true;
        }

        match command {
            // ==================== File ====================
            Command::NewDocument => self.guard_unsaved(Pending::NewDocument),
            Command::OpenDocument => self.guard_unsaved(Pending::OpenDocument),
            Command::Exit => self.guard_unsaved(Pending::Exit),
            Command::Save => {
                self.save(None);
            }
            Command::SaveAs => self.prompt_save_as(None),

            // ==================== Edit ====================
            Command::Undo => {
                if self.document.undo() {
                    self.status.show_saved(false);
                }
            }
            Command::Redo => {
                if self.document.redo() {
                    self.status.show_saved(false);
                }
            }
            Command::Find => {
                self.dialog = Some(Dialog::prompt(PromptKind::Find, "Find", "Find what:", ""));
            }
            Command::Replace => {
                self.dialog = Some(Dialog::prompt(
                    PromptKind::ReplaceFind,
                    "Replace",
                    "Find what:",
                    "",
                ));
            }
            Command::Copy => self.copy_selection(),
            Command::Cut => {
                if let Some(text) = self.document.cut_selection() {
                    self.set_clipboard(text);
                    self.status.show_saved(false);
                }
            }
            Command::Paste => {
                if let Some(text) = self.clipboard.clone() {
                    self.insert_text(&text);
                }
            }
            Command::SelectAll => self.document.buffer_mut().select_all(),

            // ==================== Format ====================
            Command::ToggleBold => self.toggle_tag(FormatTag::Bold),
            Command::ToggleItalic => self.toggle_tag(FormatTag::Italic),
            Command::ToggleUnderline => self.toggle_tag(FormatTag::Underline),
            Command::IncreaseFontSize => {
                let size = self.document.increase_font_size();
                tracing::debug!(size, "font size");
            }
            Command::DecreaseFontSize => {
                let size = self.document.decrease_font_size();
                tracing::debug!(size, "font size");
            }

            // ==================== About ====================
            Command::ShowReleaseNotes => {
                self.dialog = Some(Dialog::info("Release Notes", RELEASE_NOTES));
            }
            Command::ShowAbout => {
                self.dialog = Some(Dialog::info(ABOUT_TITLE, ABOUT_TEXT));
            }

            // ==================== Text area ====================
            Command::CursorLeft => self.document.buffer_mut().move_left(false),
            Command::CursorRight => self.document.buffer_mut().move_right(false),
            Command::CursorUp => self.document.buffer_mut().move_up(1, false),
            Command::CursorDown => self.document.buffer_mut().move_down(1, false),
            Command::CursorLineStart => self.document.buffer_mut().move_line_start(false),
            Command::CursorLineEnd => self.document.buffer_mut().move_line_end(false),
            Command::CursorFileStart => self.document.buffer_mut().move_file_start(false),
            Command::CursorFileEnd => self.document.buffer_mut().move_file_end(false),
            Command::PageUp => {
                let lines = self.page_lines();
                self.document.buffer_mut().move_up(lines, false);
            }
            Command::PageDown => {
                let lines = self.page_lines();
                self.document.buffer_mut().move_down(lines, false);
            }
            Command::SelectLeft => self.document.buffer_mut().move_left(true),
            Command::SelectRight => self.document.buffer_mut().move_right(true),
            Command::SelectUp => self.document.buffer_mut().move_up(1, true),
            Command::SelectDown => self.document.buffer_mut().move_down(1, true),
            Command::SelectLineStart => self.document.buffer_mut().move_line_start(true),
            Command::SelectLineEnd => self.document.buffer_mut().move_line_end(true),
            Command::InsertChar(ch) => {
                let mut buf = [0u8; 4];
                self.insert_text(ch.encode_utf8(&mut buf));
            }
            Command::InsertNewline => self.insert_text("\n"),
            Command::InsertTab => self.insert_text("\t"),
            Command::DeleteBackward => {
                self.document.delete_backward();
                self.status.show_saved(false);
            }
            Command::DeleteForward => {
                self.document.delete_forward();
                self.status.show_saved(false);
            }

            // ==================== Menu ====================
            Command::OpenMenu => self.menu.open(0),
        }
    }

    fn insert_text(&mut self, text: &str) {
        self.document.insert_text(text);
        self.status.show_saved(false);
    }

    fn toggle_tag(&mut self, tag: FormatTag) {
        if let Some(applied) = self.document.toggle_tag(tag) {
            tracing::debug!(tag = tag.name(), applied, "toggle format");
        }
    }

    fn copy_selection(&mut self) {
        if let Some(text) = self.document.buffer().selected_text() {
            self.set_clipboard(text);
        }
    }

    fn set_clipboard(&mut self, text: String) {
        self.requests
            .push(TerminalRequest::CopyToClipboard(text.clone()));
        self.clipboard = Some(text);
    }

    pub(super) fn apply_dialog_outcome(&mut self, outcome: DialogOutcome) {
        if outcome == DialogOutcome::Open {
            return;
        }
        // Handlers below may open a follow-up dialog.
        self.dialog = None;
        match outcome {
            DialogOutcome::Answered { choice, pending } => self.answer_unsaved(choice, pending),
            DialogOutcome::Submitted { kind, value } => self.submit_prompt(kind, value),
            DialogOutcome::Open | DialogOutcome::Cancelled | DialogOutcome::Dismissed => {}
        }
    }

    fn answer_unsaved(&mut self, choice: ConfirmChoice, pending: Pending) {
        tracing::debug!(?choice, ?pending, "unsaved changes answered");
        match choice {
            ConfirmChoice::Yes => {
                if self.save(Some(pending)) {
                    self.run_pending(pending);
                }
            }
            ConfirmChoice::No => self.run_pending(pending),
            ConfirmChoice::Cancel => {}
        }
    }

    fn submit_prompt(&mut self, kind: PromptKind, value: String) {
        match kind {
            PromptKind::Find => {
                if value.is_empty() {
                    return;
                }
                self.follow_cursor = true;
                if self.document.find(&value).is_none() {
                    self.status.set_info(format!("Not found: {value}"));
                }
            }
            PromptKind::ReplaceFind => {
                if value.is_empty() {
                    return;
                }
                self.dialog = Some(Dialog::prompt(
                    PromptKind::ReplaceWith { find: value },
                    "Replace",
                    "Replace with:",
                    "",
                ));
            }
            PromptKind::ReplaceWith { find } => {
                if value.is_empty() {
                    return;
                }
                let count = self.document.replace_all(&find, &value);
                tracing::info!(count, "replace all");
                self.follow_cursor = true;
                if count == 0 {
                    self.status.set_info(format!("Not found: {find}"));
                } else {
                    self.status.set_info(format!("Replaced {count} occurrence(s)"));
                }
            }
            PromptKind::OpenPath => match file::resolve_open_path(&value) {
                Ok(path) => self.open_path(path),
                Err(file::FileError::EmptyPath) => {}
                Err(err) => {
                    self.dialog = Some(Dialog::error(
                        "Error",
                        format!("An error occurred while opening the document: {err}"),
                    ));
                }
            },
            PromptKind::SavePath { then } => match file::resolve_save_path(&value) {
                Ok(path) => {
                    if self.write_to(path) {
                        if let Some(pending) = then {
                            self.run_pending(pending);
                        }
                    }
                }
                Err(file::FileError::EmptyPath) => {}
                Err(err) => {
                    self.dialog = Some(Dialog::error(
                        "Error",
                        format!("An error occurred while saving the document: {err}"),
                    ));
                }
            },
        }
    }
}
