//! Core vocabulary shared by every layer:
//! - Command: what the user asked for
//! - Key: normalized key chords

pub mod command;
pub mod event;

pub use command::Command;
pub use event::Key;
