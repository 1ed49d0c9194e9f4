use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::CursorLeft.name(), "cursorLeft");
    assert_eq!(Command::InsertChar('a').name(), "insertChar");
    assert_eq!(Command::SaveAs.name(), "saveAs");
    assert_eq!(Command::Exit.name(), "exit");
}

#[test]
fn test_from_name_round_trips_bindable_commands() {
    let commands = [
        Command::NewDocument,
        Command::OpenDocument,
        Command::Save,
        Command::SaveAs,
        Command::Undo,
        Command::Redo,
        Command::Find,
        Command::Replace,
        Command::ToggleBold,
        Command::ToggleItalic,
        Command::ToggleUnderline,
        Command::IncreaseFontSize,
        Command::DecreaseFontSize,
        Command::ShowAbout,
        Command::OpenMenu,
    ];
    for command in commands {
        assert_eq!(Command::from_name(command.name()), Some(command));
    }
}

#[test]
fn test_from_name_accepts_snake_case_and_aliases() {
    assert_eq!(Command::from_name("save_as"), Some(Command::SaveAs));
    assert_eq!(Command::from_name("toggle_bold"), Some(Command::ToggleBold));
    assert_eq!(Command::from_name("quit"), Some(Command::Exit));
    assert_eq!(Command::from_name("insertChar"), None);
    assert_eq!(Command::from_name("launchRockets"), None);
}

#[test]
fn test_is_edit_command() {
    assert!(Command::InsertChar('a').is_edit_command());
    assert!(Command::DeleteBackward.is_edit_command());
    assert!(Command::Paste.is_edit_command());
    assert!(!Command::CursorLeft.is_edit_command());
    assert!(!Command::Save.is_edit_command());
    assert!(!Command::ToggleBold.is_edit_command());
}

#[test]
fn test_is_cursor_command() {
    assert!(Command::CursorLeft.is_cursor_command());
    assert!(Command::PageDown.is_cursor_command());
    assert!(!Command::SelectLeft.is_cursor_command());
}
