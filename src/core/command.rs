//! Semantic commands, independent of the key or menu item that triggers them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== File ====================
    NewDocument,
    OpenDocument,
    Save,
    SaveAs,
    Exit,

    // ==================== Edit ====================
    Undo,
    Redo,
    Find,
    Replace,
    Copy,
    Cut,
    Paste,
    SelectAll,

    // ==================== Format ====================
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    IncreaseFontSize,
    DecreaseFontSize,

    // ==================== About ====================
    ShowReleaseNotes,
    ShowAbout,

    // ==================== Text area ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectLineStart,
    SelectLineEnd,
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== Menu ====================
    OpenMenu,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::NewDocument => "newDocument",
            Command::OpenDocument => "openDocument",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Exit => "exit",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Find => "find",
            Command::Replace => "replace",
            Command::Copy => "copy",
            Command::Cut => "cut",
            Command::Paste => "paste",
            Command::SelectAll => "selectAll",
            Command::ToggleBold => "toggleBold",
            Command::ToggleItalic => "toggleItalic",
            Command::ToggleUnderline => "toggleUnderline",
            Command::IncreaseFontSize => "increaseFontSize",
            Command::DecreaseFontSize => "decreaseFontSize",
            Command::ShowReleaseNotes => "showReleaseNotes",
            Command::ShowAbout => "showAbout",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::SelectLeft => "selectLeft",
            Command::SelectRight => "selectRight",
            Command::SelectUp => "selectUp",
            Command::SelectDown => "selectDown",
            Command::SelectLineStart => "selectLineStart",
            Command::SelectLineEnd => "selectLineEnd",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::OpenMenu => "openMenu",
        }
    }

    /// Reverse of [`Command::name`] for commands that can be bound to keys.
    /// Accepts camelCase or snake_case.
    pub fn from_name(name: &str) -> Option<Command> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let command = match normalized.as_str() {
            "newdocument" | "new" => Command::NewDocument,
            "opendocument" | "open" => Command::OpenDocument,
            "save" => Command::Save,
            "saveas" => Command::SaveAs,
            "exit" | "quit" => Command::Exit,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "find" => Command::Find,
            "replace" => Command::Replace,
            "copy" => Command::Copy,
            "cut" => Command::Cut,
            "paste" => Command::Paste,
            "selectall" => Command::SelectAll,
            "togglebold" | "bold" => Command::ToggleBold,
            "toggleitalic" | "italic" => Command::ToggleItalic,
            "toggleunderline" | "underline" => Command::ToggleUnderline,
            "increasefontsize" => Command::IncreaseFontSize,
            "decreasefontsize" => Command::DecreaseFontSize,
            "showreleasenotes" => Command::ShowReleaseNotes,
            "showabout" | "about" => Command::ShowAbout,
            "cursorleft" => Command::CursorLeft,
            "cursorright" => Command::CursorRight,
            "cursorup" => Command::CursorUp,
            "cursordown" => Command::CursorDown,
            "cursorlinestart" => Command::CursorLineStart,
            "cursorlineend" => Command::CursorLineEnd,
            "cursorfilestart" => Command::CursorFileStart,
            "cursorfileend" => Command::CursorFileEnd,
            "pageup" => Command::PageUp,
            "pagedown" => Command::PageDown,
            "selectleft" => Command::SelectLeft,
            "selectright" => Command::SelectRight,
            "selectup" => Command::SelectUp,
            "selectdown" => Command::SelectDown,
            "selectlinestart" => Command::SelectLineStart,
            "selectlineend" => Command::SelectLineEnd,
            "insertnewline" => Command::InsertNewline,
            "inserttab" => Command::InsertTab,
            "deletebackward" => Command::DeleteBackward,
            "deleteforward" => Command::DeleteForward,
            "openmenu" => Command::OpenMenu,
            _ => return None,
        };
        Some(command)
    }

    /// Commands that change the text.
    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
                | Command::Paste
                | Command::Cut
                | Command::Undo
                | Command::Redo
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorFileStart
                | Command::CursorFileEnd
                | Command::PageUp
                | Command::PageDown
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
