//! Application layer: the document, the editor and its chrome.

pub mod dialog;
pub mod document;
pub mod editor;
pub mod menu;
pub mod status_bar;
pub mod theme;

pub use document::Document;
pub use editor::{Editor, TerminalRequest};
pub use theme::UiTheme;
