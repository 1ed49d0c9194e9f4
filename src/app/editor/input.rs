use super::util::{grapheme_at_cell, rect_contains};
use super::{Editor, LastClick, MENU_HEIGHT};
use crate::app::menu::MenuOutcome;
use crate::core::event::is_actionable;
use crate::core::{Command, Key};
use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

const DOUBLE_CLICK: Duration = Duration::from_millis(400);

impl Editor {
    /// Entry point for every terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if is_actionable(key) => self.handle_key(Key::from(*key)),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(text),
            _ => return,
        }
        self.refresh_word_count();
        self.sync_title();
    }

    pub fn handle_key(&mut self, key: Key) {
        if let Some(dialog) = self.dialog.as_mut() {
            let outcome = dialog.handle_key(&key);
            self.apply_dialog_outcome(outcome);
            return;
        }

        match self.menu.handle_key(&key) {
            MenuOutcome::Ignored => {}
            MenuOutcome::Activate(command) => {
                self.dispatch(command);
                return;
            }
            MenuOutcome::Consumed | MenuOutcome::Closed => return,
        }

        if let Some(command) = self.keybindings.get(&key).copied() {
            self.dispatch(command);
            return;
        }

        if let (KeyCode::Char(c), m) = (key.code, key.modifiers) {
            if m.contains(KeyModifiers::ALT) && self.menu.open_by_mnemonic(c) {
                return;
            }
        }

        if key.code == KeyCode::Esc {
            self.document.buffer_mut().clear_selection();
            return;
        }

        if let Some(ch) = key.printable() {
            self.dispatch(Command::InsertChar(ch));
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.handle_paste(text);
            return;
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        if text.is_empty() {
            return;
        }
        self.follow_cursor = true;
        self.document.insert_text(&text);
        self.status.show_saved(false);
    }

    pub fn handle_mouse(&mut self, event: &MouseEvent) {
        if self.dialog.is_some() {
            return;
        }
        if self.menu.is_open() {
            self.handle_menu_mouse(event);
            return;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if event.row < MENU_HEIGHT {
                    if let Some(index) = self.menu.title_at(event.column) {
                        self.menu.open(index);
                    }
                    return;
                }
                let Some(pos) = self.text_pos_at(event.column, event.row) else {
                    return;
                };
                self.follow_cursor = true;
                let now = Instant::now();
                let double = self
                    .last_click
                    .is_some_and(|c| c.pos == pos && now.duration_since(c.at) <= DOUBLE_CLICK);
                if double {
                    self.document.buffer_mut().select_word_at(pos);
                    self.last_click = None;
                    self.dragging = false;
                } else {
                    self.document.buffer_mut().place_cursor(pos);
                    self.last_click = Some(LastClick { pos, at: now });
                    self.dragging = true;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                if let Some(pos) = self.text_pos_clamped(event.column, event.row) {
                    self.follow_cursor = true;
                    self.document.buffer_mut().drag_to(pos);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dragging = false;
            }
            MouseEventKind::ScrollUp => {
                self.follow_cursor = false;
                self.scroll.0 = self.scroll.0.saturating_sub(self.scroll_lines);
            }
            MouseEventKind::ScrollDown => {
                self.follow_cursor = false;
                let max_top = self.document.buffer().len_lines().saturating_sub(1);
                self.scroll.0 = (self.scroll.0 + self.scroll_lines).min(max_top);
            }
            _ => {}
        }
    }

    fn handle_menu_mouse(&mut self, event: &MouseEvent) {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if y < MENU_HEIGHT {
                    match self.menu.title_at(x) {
                        Some(index) if self.menu.open_index() == Some(index) => self.menu.close(),
                        Some(index) => self.menu.open(index),
                        None => self.menu.close(),
                    }
                    return;
                }
                let hit = self
                    .last_dropdown_area
                    .filter(|area| rect_contains(*area, x, y))
                    .map(|area| self.menu.entry_at(area, x, y));
                match hit {
                    Some(Some(index)) => {
                        self.menu.set_highlighted(index);
                        if let Some(command) = self.menu.activate() {
                            self.dispatch(command);
                        }
                    }
                    // separator or border
                    Some(None) => {}
                    None => self.menu.close(),
                }
            }
            MouseEventKind::Moved => {
                if let Some(area) = self.last_dropdown_area {
                    if let Some(index) = self.menu.entry_at(area, x, y) {
                        self.menu.set_highlighted(index);
                    }
                }
            }
            _ => {}
        }
    }

    /// Buffer position under a screen cell inside the text area.
    fn text_pos_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let area = self.last_text_area?;
        if !rect_contains(area, x, y) {
            return None;
        }
        Some(self.pos_from_cell(usize::from(x - area.x), usize::from(y - area.y)))
    }

    /// Like `text_pos_at`, but clamps cells outside the area onto its edge
    /// so a drag past the border keeps selecting.
    fn text_pos_clamped(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let area = self.last_text_area?;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let cx = usize::from(x.clamp(area.x, area.right() - 1) - area.x);
        if y < area.y {
            let (row, col) = self.pos_from_cell(cx, 0);
            return Some((row.saturating_sub(1), col));
        }
        if y >= area.bottom() {
            let (row, col) = self.pos_from_cell(cx, usize::from(area.height - 1));
            return Some((row + 1, col));
        }
        Some(self.pos_from_cell(cx, usize::from(y - area.y)))
    }

    fn pos_from_cell(&self, cell_x: usize, cell_y: usize) -> (usize, usize) {
        let buffer = self.document.buffer();
        let last_row = buffer.len_lines().saturating_sub(1);
        let row = (self.scroll.0 + cell_y).min(last_row);
        let line = buffer.line_content(row);
        let col = grapheme_at_cell(&line, self.scroll.1 + cell_x, self.tab_size);
        (row, col)
    }
}
