use super::*;
use ropey::Rope;

#[test]
fn test_insert_apply() {
    let mut rope = Rope::from_str("hello");
    let op = EditOp::insert(OpId::root(), 5, " world".to_string(), (0, 5), (0, 11));
    op.apply(&mut rope);
    assert_eq!(rope.to_string(), "hello world");
}

#[test]
fn test_delete_apply() {
    let mut rope = Rope::from_str("hello world");
    let op = EditOp::delete(OpId::root(), 5, 11, " world".to_string(), (0, 11), (0, 5));
    op.apply(&mut rope);
    assert_eq!(rope.to_string(), "hello");
}

#[test]
fn test_inverse_restores_text() {
    let insert_op = EditOp::insert(OpId::root(), 0, "hello".to_string(), (0, 0), (0, 5));

    let mut rope = Rope::new();
    insert_op.apply(&mut rope);
    assert_eq!(rope.to_string(), "hello");

    insert_op.kind.inverse().apply(&mut rope);
    assert_eq!(rope.to_string(), "");
}

#[test]
fn test_batch_inverse_runs_in_reverse() {
    let batch = OpKind::Batch(vec![
        OpKind::Delete {
            start: 0,
            end: 3,
            deleted: "cat".to_string(),
        },
        OpKind::Insert {
            char_offset: 0,
            text: "dog".to_string(),
        },
    ]);

    let mut rope = Rope::from_str("cat nap");
    batch.apply(&mut rope);
    assert_eq!(rope.to_string(), "dog nap");

    batch.inverse().apply(&mut rope);
    assert_eq!(rope.to_string(), "cat nap");
}

#[test]
fn test_empty_ops() {
    assert!(OpKind::Insert {
        char_offset: 3,
        text: String::new()
    }
    .is_empty());
    assert!(OpKind::Batch(Vec::new()).is_empty());
    assert!(!OpKind::Delete {
        start: 0,
        end: 1,
        deleted: "x".to_string()
    }
    .is_empty());
}

#[test]
fn test_opid_uniqueness() {
    let id1 = OpId::new();
    let id2 = OpId::new();
    assert_ne!(id1, id2);
    assert!(!id1.is_root());
    assert!(OpId::root().is_root());
}
