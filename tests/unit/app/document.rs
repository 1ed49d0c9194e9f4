use super::*;

fn doc_with(text: &str) -> Document {
    let mut doc = Document::new(18);
    doc.load(PathBuf::from("/tmp/notes.txt"), text);
    doc
}

#[test]
fn test_new_document_is_clean_and_untitled() {
    let doc = Document::new(18);
    assert!(!doc.is_dirty());
    assert!(doc.path().is_none());
    assert_eq!(doc.title(), "Untitled - Scribe");
    assert_eq!(doc.file_name(), "Untitled");
    assert_eq!(doc.text(), "");
}

#[test]
fn test_load_binds_path_and_clears_history() {
    let mut doc = Document::new(18);
    doc.insert_text("scratch");
    assert!(doc.is_dirty());

    doc.load(PathBuf::from("/tmp/notes.txt"), "hello");
    assert!(!doc.is_dirty());
    assert!(!doc.can_undo());
    assert_eq!(doc.text(), "hello");
    assert_eq!(doc.title(), "/tmp/notes.txt - Scribe");
    assert_eq!(doc.file_name(), "notes.txt");
}

#[test]
fn test_typing_sets_dirty_and_undo_back_to_saved_clears_it() {
    let mut doc = doc_with("");
    doc.insert_char('a');
    doc.insert_char('b');
    assert!(doc.is_dirty());
    assert_eq!(doc.text(), "ab");

    doc.undo();
    doc.undo();
    assert_eq!(doc.text(), "");
    assert!(!doc.is_dirty());

    doc.redo();
    assert_eq!(doc.text(), "a");
    assert!(doc.is_dirty());
}

#[test]
fn test_mark_saved_moves_clean_point() {
    let mut doc = doc_with("");
    doc.insert_text("one");
    doc.mark_saved(PathBuf::from("/tmp/other.txt"));
    assert!(!doc.is_dirty());
    assert_eq!(doc.file_name(), "other.txt");

    doc.insert_text(" two");
    assert!(doc.is_dirty());
    doc.undo();
    assert!(!doc.is_dirty());
    doc.undo();
    assert!(doc.is_dirty());
}

#[test]
fn test_insert_replaces_selection_as_one_step() {
    let mut doc = doc_with("hello world");
    doc.buffer_mut().select_chars(0, 5);
    doc.insert_text("howdy");
    assert_eq!(doc.text(), "howdy world");

    doc.undo();
    assert_eq!(doc.text(), "hello world");
    assert!(!doc.can_undo());
}

#[test]
fn test_backspace_removes_selection_first() {
    let mut doc = doc_with("abcdef");
    doc.buffer_mut().select_chars(1, 4);
    doc.delete_backward();
    assert_eq!(doc.text(), "aef");
    assert_eq!(doc.buffer().cursor(), (0, 1));
}

#[test]
fn test_delete_forward_at_end_is_noop() {
    let mut doc = doc_with("ab");
    doc.buffer_mut().move_file_end(false);
    doc.delete_forward();
    assert_eq!(doc.text(), "ab");
    assert!(!doc.is_dirty());
}

#[test]
fn test_cut_selection_returns_text() {
    let mut doc = doc_with("cut me please");
    doc.buffer_mut().select_chars(0, 7);
    assert_eq!(doc.cut_selection().as_deref(), Some("cut me "));
    assert_eq!(doc.text(), "please");
    assert!(doc.cut_selection().is_none());
}

#[test]
fn test_find_selects_first_match_from_top() {
    let mut doc = doc_with("one two one two");
    doc.buffer_mut().move_file_end(false);

    let range = doc.find("two");
    assert_eq!(range, Some(4..7));
    assert_eq!(doc.buffer().selection_char_range(), Some(4..7));
    assert_eq!(doc.buffer().cursor(), (0, 4));
}

#[test]
fn test_find_missing_pattern_leaves_selection() {
    let mut doc = doc_with("abc");
    doc.buffer_mut().select_chars(0, 1);
    assert!(doc.find("zzz").is_none());
    assert_eq!(doc.buffer().selection_char_range(), Some(0..1));
}

#[test]
fn test_replace_all_is_single_undo_step() {
    let mut doc = doc_with("cat hat cat\ncat");
    let count = doc.replace_all("cat", "dog");
    assert_eq!(count, 3);
    assert_eq!(doc.text(), "dog hat dog\ndog");
    assert!(doc.is_dirty());

    doc.undo();
    assert_eq!(doc.text(), "cat hat cat\ncat");
    assert!(!doc.is_dirty());
}

#[test]
fn test_replace_all_terminates_when_replacement_contains_pattern() {
    let mut doc = doc_with("a-a");
    assert_eq!(doc.replace_all("a", "aa"), 2);
    assert_eq!(doc.text(), "aa-aa");
}

#[test]
fn test_replace_all_rescans_matches_joined_by_replacement() {
    let mut doc = doc_with("aaaa");
    assert_eq!(doc.replace_all("aa", "a"), 3);
    assert_eq!(doc.text(), "a");

    let mut doc = doc_with("aab");
    assert_eq!(doc.replace_all("ab", "bxa"), 2);
    assert_eq!(doc.text(), "bxaxa");
    assert!(!doc.text().contains("ab"));

    doc.undo();
    assert_eq!(doc.text(), "aab");
    assert!(!doc.can_undo());
}

#[test]
fn test_replace_all_with_different_lengths() {
    let mut doc = doc_with("xx yy xx");
    assert_eq!(doc.replace_all("xx", "z"), 2);
    assert_eq!(doc.text(), "z yy z");

    let mut doc = doc_with("é-é-é");
    assert_eq!(doc.replace_all("é", "ee"), 3);
    assert_eq!(doc.text(), "ee-ee-ee");
}

#[test]
fn test_replace_all_without_matches_changes_nothing() {
    let mut doc = doc_with("abc");
    assert_eq!(doc.replace_all("zz", "y"), 0);
    assert!(!doc.is_dirty());
    assert!(!doc.can_undo());
}

#[test]
fn test_toggle_tag_requires_selection() {
    let mut doc = doc_with("bold text");
    assert_eq!(doc.toggle_tag(FormatTag::Bold), None);
    assert!(doc.tags().is_empty());

    doc.buffer_mut().select_chars(0, 4);
    assert_eq!(doc.toggle_tag(FormatTag::Bold), Some(true));
    assert_eq!(doc.tags().ranges(FormatTag::Bold), &[0..4]);
    assert!(!doc.is_dirty());

    assert_eq!(doc.toggle_tag(FormatTag::Bold), Some(false));
    assert!(doc.tags().ranges(FormatTag::Bold).is_empty());
}

#[test]
fn test_tags_follow_edits_and_undo() {
    let mut doc = doc_with("abc def");
    doc.buffer_mut().select_chars(4, 7);
    doc.toggle_tag(FormatTag::Italic);

    doc.buffer_mut().place_cursor((0, 0));
    doc.insert_text(">> ");
    assert_eq!(doc.tags().ranges(FormatTag::Italic), &[7..10]);

    doc.undo();
    assert_eq!(doc.tags().ranges(FormatTag::Italic), &[4..7]);
}

#[test]
fn test_font_size_steps_and_clamps() {
    let mut doc = Document::new(18);
    assert_eq!(doc.increase_font_size(), 20);
    assert_eq!(doc.decrease_font_size(), 18);

    for _ in 0..20 {
        doc.increase_font_size();
    }
    assert_eq!(doc.font_size(), 36);

    for _ in 0..20 {
        doc.decrease_font_size();
    }
    assert_eq!(doc.font_size(), 6);
}

#[test]
fn test_new_clamps_initial_font_size() {
    assert_eq!(Document::new(2).font_size(), 6);
    assert_eq!(Document::new(99).font_size(), 36);
}

#[test]
fn test_reset_forgets_path_and_tags() {
    let mut doc = doc_with("text");
    doc.buffer_mut().select_all();
    doc.toggle_tag(FormatTag::Underline);
    doc.reset();
    assert!(doc.path().is_none());
    assert!(doc.tags().is_empty());
    assert_eq!(doc.text(), "");
    assert!(!doc.is_dirty());
}

#[test]
fn test_undo_of_deletion_restores_formatting() {
    let mut doc = doc_with("abc def");
    doc.buffer_mut().select_chars(4, 7);
    doc.toggle_tag(FormatTag::Bold);

    doc.buffer_mut().select_chars(3, 7);
    doc.delete_backward();
    assert_eq!(doc.text(), "abc");
    assert!(doc.tags().ranges(FormatTag::Bold).is_empty());

    doc.undo();
    assert_eq!(doc.text(), "abc def");
    assert_eq!(doc.tags().ranges(FormatTag::Bold), &[4..7]);

    doc.redo();
    assert!(doc.tags().ranges(FormatTag::Bold).is_empty());
}

#[test]
fn test_undo_of_replace_all_restores_formatting() {
    let mut doc = doc_with("cat cat");
    doc.buffer_mut().select_chars(4, 7);
    doc.toggle_tag(FormatTag::Italic);

    doc.replace_all("cat", "dog");
    assert!(doc.tags().ranges(FormatTag::Italic).is_empty());

    doc.undo();
    assert_eq!(doc.text(), "cat cat");
    assert_eq!(doc.tags().ranges(FormatTag::Italic), &[4..7]);
}
