//! Terminal integration: setup/restore and clipboard escapes.

pub mod osc52;
pub mod terminal_guard;
