use super::*;
use crossterm::event::KeyEventState;

fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_uppercase_letter_becomes_shift() {
    let key: Key = event(KeyCode::Char('S'), KeyModifiers::CONTROL).into();
    assert_eq!(key, Key::ctrl_shift(KeyCode::Char('s')));
}

#[test]
fn test_shift_dropped_for_symbols() {
    let key: Key = event(KeyCode::Char('+'), KeyModifiers::CONTROL | KeyModifiers::SHIFT).into();
    assert_eq!(key, Key::ctrl(KeyCode::Char('+')));
}

#[test]
fn test_printable() {
    assert_eq!(Key::simple(KeyCode::Char('a')).printable(), Some('a'));
    assert_eq!(Key::shift(KeyCode::Char('a')).printable(), Some('A'));
    assert_eq!(Key::simple(KeyCode::Char('?')).printable(), Some('?'));
    assert_eq!(Key::ctrl(KeyCode::Char('a')).printable(), None);
    assert_eq!(Key::simple(KeyCode::Enter).printable(), None);
}

#[test]
fn test_release_is_not_actionable() {
    let mut ev = event(KeyCode::Char('a'), KeyModifiers::NONE);
    assert!(is_actionable(&ev));
    ev.kind = KeyEventKind::Release;
    assert!(!is_actionable(&ev));
}
