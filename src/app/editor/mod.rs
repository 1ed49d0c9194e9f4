//! The editor: owns the document and routes input to commands, menus and
//! dialogs.

use super::dialog::{Dialog, Pending, PromptKind};
use super::document::Document;
use super::menu::MenuBar;
use super::status_bar::StatusBar;
use super::theme::UiTheme;
use crate::core::Command;
use crate::services::file::{self, FileService};
use crate::services::{KeybindingService, Settings};
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod commands;
mod input;
mod render;
mod util;

const MENU_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const DEFAULT_PAGE_LINES: usize = 20;

/// Side effects the editor cannot perform itself; the terminal loop applies
/// them after each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalRequest {
    SetTitle(String),
    CopyToClipboard(String),
}

#[derive(Debug, Clone, Copy)]
struct LastClick {
    pos: (usize, usize),
    at: Instant,
}

pub struct Editor {
    document: Document,
    keybindings: KeybindingService,
    menu: MenuBar,
    dialog: Option<Dialog>,
    status: StatusBar,
    theme: UiTheme,
    clipboard: Option<String>,
    tab_size: usize,
    scroll_lines: usize,
    /// First visible row and display column of the text area.
    scroll: (usize, usize),
    follow_cursor: bool,
    dragging: bool,
    last_click: Option<LastClick>,
    last_text_area: Option<Rect>,
    last_dropdown_area: Option<Rect>,
    requests: Vec<TerminalRequest>,
    last_title: Option<String>,
    should_quit: bool,
}

impl Editor {
    pub fn new(settings: &Settings, keybindings: KeybindingService) -> Self {
        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);

        let mut editor = Self {
            document: Document::new(settings.font_size),
            keybindings,
            menu: MenuBar::new(),
            dialog: None,
            status: StatusBar::new(),
            theme,
            clipboard: None,
            tab_size: usize::from(settings.tab_size.max(1)),
            scroll_lines: settings.scroll_lines.max(1),
            scroll: (0, 0),
            follow_cursor: true,
            dragging: false,
            last_click: None,
            last_text_area: None,
            last_dropdown_area: None,
            requests: Vec::new(),
            last_title: None,
            should_quit: false,
        };
        editor.sync_title();
        editor
    }

    pub fn with_theme(mut self, theme: UiTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn menu(&self) -> &MenuBar {
        &self.menu
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a menu entry for `command` can do anything right now.
    pub fn command_enabled(&self, command: Command) -> bool {
        match command {
            Command::Undo => self.document.can_undo(),
            Command::Redo => self.document.can_redo(),
            _ => true,
        }
    }

    /// Drain pending terminal side effects.
    pub fn take_requests(&mut self) -> Vec<TerminalRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Open `path` at startup. A file that does not exist yet starts an
    /// empty document bound to that path.
    pub fn open_initial(&mut self, path: PathBuf) {
        if path.exists() {
            self.open_path(path);
        } else {
            tracing::info!(path = %path.display(), "starting new file");
            self.document.bind_path(path);
            self.sync_title();
        }
    }

    fn sync_title(&mut self) {
        let title = self.document.title();
        if self.last_title.as_deref() != Some(title.as_str()) {
            self.last_title = Some(title.clone());
            self.requests.push(TerminalRequest::SetTitle(title));
        }
    }

    fn refresh_word_count(&mut self) {
        let text = self.document.text();
        self.status.refresh_word_count(&text);
    }

    fn reset_view(&mut self) {
        self.scroll = (0, 0);
        self.follow_cursor = true;
        self.dragging = false;
        self.last_click = None;
    }

    // ==================== file lifecycle ====================

    /// Run `pending` now, or ask about unsaved changes first.
    fn guard_unsaved(&mut self, pending: Pending) {
        if self.document.is_dirty() {
            self.dialog = Some(Dialog::unsaved_changes(pending));
        } else {
            self.run_pending(pending);
        }
    }

    fn run_pending(&mut self, pending: Pending) {
        match pending {
            Pending::NewDocument => self.new_document(),
            Pending::OpenDocument => self.prompt_open(),
            Pending::Exit => {
                tracing::info!("exit requested");
                self.should_quit = true;
            }
        }
    }

    fn new_document(&mut self) {
        tracing::info!("new document");
        self.document.reset();
        self.reset_view();
        self.status.update_status(false, "");
        self.sync_title();
    }

    fn prompt_open(&mut self) {
        self.dialog = Some(
            Dialog::prompt(PromptKind::OpenPath, "Open Document", "File path:", "")
                .with_hint(file::filter_hint()),
        );
    }

    fn prompt_save_as(&mut self, then: Option<Pending>) {
        let initial = self
            .document
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| file::DEFAULT_FILE_NAME.to_string());
        self.dialog = Some(
            Dialog::prompt(PromptKind::SavePath { then }, "Save As", "File path:", &initial)
                .with_hint(file::filter_hint()),
        );
    }

    /// Save to the current path, or ask for one. Returns true only when the
    /// file was written now.
    fn save(&mut self, then: Option<Pending>) -> bool {
        match self.document.path().map(Path::to_path_buf) {
            Some(path) => self.write_to(path),
            None => {
                self.prompt_save_as(then);
                false
            }
        }
    }

    fn write_to(&mut self, path: PathBuf) -> bool {
        match FileService::write_buffer(&path, self.document.buffer()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "document saved");
                self.document.mark_saved(path);
                let text = self.document.text();
                self.status.update_status(true, &text);
                self.sync_title();
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "save failed");
                self.status.set_error(format!("Save failed: {}", path.display()));
                self.dialog = Some(Dialog::error(
                    "Error",
                    format!("An error occurred while saving the document: {err}"),
                ));
                false
            }
        }
    }

    fn open_path(&mut self, path: PathBuf) {
        match FileService::read_text(&path) {
            Ok(text) => {
                tracing::info!(
                    path = %path.display(),
                    bytes = text.len(),
                    kind = file::file_type_label(&path),
                    "document opened"
                );
                self.document.load(path, &text);
                self.reset_view();
                self.status.update_status(false, &text);
                self.sync_title();
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "open failed");
                self.status.set_error(format!("Open failed: {}", path.display()));
                self.dialog = Some(Dialog::error(
                    "Error",
                    format!("An error occurred while opening the document: {err}"),
                ));
            }
        }
    }

    fn page_lines(&self) -> usize {
        self.last_text_area
            .map(|area| usize::from(area.height).max(1))
            .unwrap_or(DEFAULT_PAGE_LINES)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/editor.rs"]
mod tests;
