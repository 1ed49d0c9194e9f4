//! Services: file I/O, search, key bindings, settings

pub mod file;
pub mod keybinding;
pub mod search;
pub mod settings;

pub use file::{FileError, FileService};
pub use keybinding::{KeybindingService, Platform};
pub use settings::Settings;
