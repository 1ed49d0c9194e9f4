//! Data models

pub mod edit_history;
pub mod edit_op;
pub mod format;
pub mod selection;
pub mod text_buffer;

pub use edit_history::{EditHistory, HistoryStep};
pub use edit_op::{EditOp, OpId, OpKind};
pub use format::{FormatTag, TagMask, TagSet};
pub use selection::{Granularity, Selection};
pub use text_buffer::{slice_to_cow, TextBuffer};
