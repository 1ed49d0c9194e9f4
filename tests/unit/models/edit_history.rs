use super::*;

fn push_insert(history: &mut EditHistory, rope: &mut Rope, at: usize, text: &str) -> OpId {
    let op = EditOp::insert(history.head(), at, text.to_string(), (0, at), (0, at + text.len()));
    let id = op.id;
    op.apply(rope);
    history.push(op, rope);
    id
}

#[test]
fn test_undo_redo() {
    let mut rope = Rope::from_str("hello");
    let mut history = EditHistory::new(rope.clone());

    push_insert(&mut history, &mut rope, 5, " world");

    assert!(history.can_undo());
    assert!(!history.can_redo());

    let step = history.undo().unwrap();
    assert_eq!(step.rope.to_string(), "hello");
    assert_eq!(step.cursor, (0, 5));
    assert_eq!(
        step.change,
        OpKind::Delete {
            start: 5,
            end: 11,
            deleted: " world".to_string()
        }
    );

    assert!(!history.can_undo());
    assert!(history.can_redo());

    let step = history.redo().unwrap();
    assert_eq!(step.rope.to_string(), "hello world");
    assert_eq!(step.cursor, (0, 11));
}

#[test]
fn test_undo_at_root_is_none() {
    let mut history = EditHistory::new(Rope::from_str("abc"));
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn test_branch_on_edit_after_undo() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone());

    push_insert(&mut history, &mut rope, 0, "a");
    push_insert(&mut history, &mut rope, 1, "b");

    let step = history.undo().unwrap();
    rope = step.rope;
    push_insert(&mut history, &mut rope, 1, "c");

    history.undo().unwrap();
    let step = history.redo().unwrap();
    assert_eq!(step.rope.to_string(), "ac");
    assert!(!history.can_redo());
}

#[test]
fn test_rebuild_uses_checkpoints() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone());

    let total = CHECKPOINT_INTERVAL + 2;
    for i in 0..total {
        push_insert(&mut history, &mut rope, i, "x");
    }

    let step = history.undo().unwrap();
    assert_eq!(step.rope.len_chars(), total - 1);
    let step = history.undo().unwrap();
    assert_eq!(step.rope.len_chars(), CHECKPOINT_INTERVAL);
    let step = history.undo().unwrap();
    assert_eq!(step.rope.len_chars(), CHECKPOINT_INTERVAL - 1);
}

#[test]
fn test_clear_resets_to_root() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new(rope.clone());
    push_insert(&mut history, &mut rope, 0, "abc");

    history.clear(&rope);
    assert!(history.head().is_root());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
