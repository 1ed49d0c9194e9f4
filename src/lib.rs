//! scribe - a single-window terminal text editor.
//!
//! Modules:
//! - core: commands and normalized key chords
//! - models: text buffer, selection, edit history, formatting tags
//! - services: files, settings, keybindings, search
//! - app: document, editor, menus, dialogs, status bar
//! - tui: terminal setup/restore and clipboard escapes

pub mod app;
pub mod core;
pub mod models;
pub mod services;
pub mod tui;
