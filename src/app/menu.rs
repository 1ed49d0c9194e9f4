//! Menu bar: File / Edit / About.
//!
//! State is only which menu is open and which item is highlighted. Item
//! accelerators are looked up in the keybinding service, so user overrides
//! show up in the menus.

use crate::core::{Command, Key};
use crate::services::keybinding::format_key;
use crate::services::KeybindingService;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        label: &'static str,
        command: Command,
    },
    Separator,
}

impl MenuEntry {
    pub fn is_selectable(&self) -> bool {
        matches!(self, MenuEntry::Item { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: &'static str,
    /// Alt+<mnemonic> opens this menu.
    pub mnemonic: char,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Ignored,
    Consumed,
    Closed,
    Activate(Command),
}

fn item(label: &'static str, command: Command) -> MenuEntry {
    MenuEntry::Item { label, command }
}

fn default_menus() -> Vec<Menu> {
    vec![
        Menu {
            title: "File",
            mnemonic: 'f',
            entries: vec![
                item("New Document", Command::NewDocument),
                item("Open Document", Command::OpenDocument),
                item("Save", Command::Save),
                item("Save As", Command::SaveAs),
                MenuEntry::Separator,
                item("Exit", Command::Exit),
            ],
        },
        Menu {
            title: "Edit",
            mnemonic: 'e',
            entries: vec![
                item("Undo", Command::Undo),
                item("Redo", Command::Redo),
                MenuEntry::Separator,
                item("Find", Command::Find),
                item("Replace", Command::Replace),
                MenuEntry::Separator,
                item("Bold", Command::ToggleBold),
                item("Italic", Command::ToggleItalic),
                item("Underline", Command::ToggleUnderline),
                MenuEntry::Separator,
                item("Increase Font Size", Command::IncreaseFontSize),
                item("Decrease Font Size", Command::DecreaseFontSize),
            ],
        },
        Menu {
            title: "About",
            mnemonic: 'a',
            entries: vec![
                item("Release Notes", Command::ShowReleaseNotes),
                MenuEntry::Separator,
                item("About", Command::ShowAbout),
            ],
        },
    ]
}

/// Accelerator label for `command`, e.g. `Ctrl+S`.
pub fn accelerator(keys: &KeybindingService, command: &Command) -> Option<String> {
    keys.keys_for_command(command).first().map(format_key)
}

pub struct MenuBar {
    menus: Vec<Menu>,
    open: Option<usize>,
    highlighted: usize,
}

impl MenuBar {
    pub fn new() -> Self {
        Self {
            menus: default_menus(),
            open: None,
            highlighted: 0,
        }
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.menus.len() {
            return;
        }
        self.open = Some(index);
        self.highlighted = self.first_selectable(index).unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = None;
        self.highlighted = 0;
    }

    /// Open the menu whose mnemonic is `c` (case-insensitive).
    pub fn open_by_mnemonic(&mut self, c: char) -> bool {
        let c = c.to_ascii_lowercase();
        match self.menus.iter().position(|m| m.mnemonic == c) {
            Some(index) => {
                self.open(index);
                true
            }
            None => false,
        }
    }

    fn first_selectable(&self, menu: usize) -> Option<usize> {
        self.menus[menu].entries.iter().position(MenuEntry::is_selectable)
    }

    fn step_menu(&mut self, forward: bool) {
        let Some(current) = self.open else {
            return;
        };
        let len = self.menus.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.open(next);
    }

    fn step_item(&mut self, forward: bool) {
        let Some(menu) = self.open else {
            return;
        };
        let entries = &self.menus[menu].entries;
        let len = entries.len();
        let mut index = self.highlighted;
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if entries[index].is_selectable() {
                self.highlighted = index;
                return;
            }
        }
    }

    /// Command of the highlighted item; closes the menu.
    pub fn activate(&mut self) -> Option<Command> {
        let menu = self.open?;
        let command = match self.menus[menu].entries.get(self.highlighted) {
            Some(MenuEntry::Item { command, .. }) => Some(*command),
            _ => None,
        };
        self.close();
        command
    }

    pub fn handle_key(&mut self, key: &Key) -> MenuOutcome {
        if !self.is_open() {
            return MenuOutcome::Ignored;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::F(10), _) => {
                self.close();
                MenuOutcome::Closed
            }
            (KeyCode::Left, _) => {
                self.step_menu(false);
                MenuOutcome::Consumed
            }
            (KeyCode::Right, _) => {
                self.step_menu(true);
                MenuOutcome::Consumed
            }
            (KeyCode::Up, _) => {
                self.step_item(false);
                MenuOutcome::Consumed
            }
            (KeyCode::Down, _) => {
                self.step_item(true);
                MenuOutcome::Consumed
            }
            (KeyCode::Enter, _) => match self.activate() {
                Some(command) => MenuOutcome::Activate(command),
                None => MenuOutcome::Closed,
            },
            (KeyCode::Char(c), m) if m.contains(KeyModifiers::ALT) => {
                self.open_by_mnemonic(c);
                MenuOutcome::Consumed
            }
            _ => MenuOutcome::Consumed,
        }
    }

    // ==================== layout ====================

    /// `(x, width)` of every title, laid out left to right from column 0.
    pub fn title_spans(&self) -> Vec<(u16, u16)> {
        let mut x = 0u16;
        self.menus
            .iter()
            .map(|menu| {
                let width = menu.title.width() as u16 + 2;
                let span = (x, width);
                x = x.saturating_add(width);
                span
            })
            .collect()
    }

    pub fn title_at(&self, x: u16) -> Option<usize> {
        self.title_spans()
            .iter()
            .position(|&(start, width)| x >= start && x < start + width)
    }

    /// Bordered dropdown under title `index`, clipped to `area`.
    pub fn dropdown_rect(&self, index: usize, keys: &KeybindingService, area: Rect) -> Rect {
        let Some(menu) = self.menus.get(index) else {
            return Rect::default();
        };
        let inner_width = menu
            .entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Item { label, command } => {
                    let accel = accelerator(keys, command).map(|a| a.width() + 2).unwrap_or(0);
                    label.width() + accel
                }
                MenuEntry::Separator => 0,
            })
            .max()
            .unwrap_or(0) as u16
            + 2;

        let x = area.x + self.title_spans()[index].0;
        let y = area.y + 1;
        let width = (inner_width + 2).min(area.right().saturating_sub(x));
        let height = (menu.entries.len() as u16 + 2).min(area.bottom().saturating_sub(y));
        Rect::new(x, y, width, height)
    }

    /// Entry index under row `y` inside `dropdown`, if it is a selectable item.
    pub fn entry_at(&self, dropdown: Rect, x: u16, y: u16) -> Option<usize> {
        let menu = self.menus.get(self.open?)?;
        if x <= dropdown.x || x + 1 >= dropdown.right() {
            return None;
        }
        if y <= dropdown.y || y + 1 >= dropdown.bottom() {
            return None;
        }
        let index = (y - dropdown.y - 1) as usize;
        menu.entries
            .get(index)
            .filter(|entry| entry.is_selectable())
            .map(|_| index)
    }

    pub fn set_highlighted(&mut self, index: usize) {
        let Some(menu) = self.open else {
            return;
        };
        if self.menus[menu]
            .entries
            .get(index)
            .is_some_and(MenuEntry::is_selectable)
        {
            self.highlighted = index;
        }
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/menu.rs"]
mod tests;
