use super::*;

#[test]
fn test_add_merges_overlapping_and_adjacent() {
    let mut tags = TagSet::new();
    tags.add(FormatTag::Bold, 0..3);
    tags.add(FormatTag::Bold, 5..8);
    tags.add(FormatTag::Bold, 3..5);

    assert_eq!(tags.ranges(FormatTag::Bold), &[0..8]);
    assert!(tags.ranges(FormatTag::Italic).is_empty());
}

#[test]
fn test_remove_splits_range() {
    let mut tags = TagSet::new();
    tags.add(FormatTag::Italic, 0..10);
    tags.remove(FormatTag::Italic, 3..6);

    assert_eq!(tags.ranges(FormatTag::Italic), &[0..3, 6..10]);
    assert!(!tags.has_at(FormatTag::Italic, 4));
    assert!(tags.has_at(FormatTag::Italic, 6));
}

#[test]
fn test_toggle_checks_first_char() {
    let mut tags = TagSet::new();
    assert!(tags.toggle(FormatTag::Underline, 2..5));
    assert!(tags.has_at(FormatTag::Underline, 2));

    assert!(!tags.toggle(FormatTag::Underline, 2..5));
    assert!(tags.is_empty());

    // First char untagged: the whole selection gets the tag.
    tags.add(FormatTag::Bold, 4..6);
    assert!(tags.toggle(FormatTag::Bold, 0..5));
    assert_eq!(tags.ranges(FormatTag::Bold), &[0..6]);
}

#[test]
fn test_mask_at() {
    let mut tags = TagSet::new();
    tags.add(FormatTag::Bold, 0..4);
    tags.add(FormatTag::Underline, 2..6);

    let mask = tags.mask_at(3);
    assert!(mask.bold && mask.underline && !mask.italic);
    assert!(tags.mask_at(7).is_plain());
}

#[test]
fn test_insert_before_and_inside_range() {
    let mut tags = TagSet::new();
    tags.add(FormatTag::Bold, 4..8);

    tags.apply_edit(&OpKind::Insert {
        char_offset: 0,
        text: "ab".to_string(),
    });
    assert_eq!(tags.ranges(FormatTag::Bold), &[6..10]);

    tags.apply_edit(&OpKind::Insert {
        char_offset: 7,
        text: "xyz".to_string(),
    });
    assert_eq!(tags.ranges(FormatTag::Bold), &[6..13]);

    tags.apply_edit(&OpKind::Insert {
        char_offset: 13,
        text: "!".to_string(),
    });
    assert_eq!(tags.ranges(FormatTag::Bold), &[6..13]);
}

#[test]
fn test_delete_shrinks_and_drops_ranges() {
    let mut tags = TagSet::new();
    tags.add(FormatTag::Bold, 2..4);
    tags.add(FormatTag::Bold, 6..10);

    tags.apply_edit(&OpKind::Delete {
        start: 1,
        end: 7,
        deleted: "xxxxxx".to_string(),
    });
    assert_eq!(tags.ranges(FormatTag::Bold), &[1..4]);

    tags.apply_edit(&OpKind::Delete {
        start: 0,
        end: 4,
        deleted: "xxxx".to_string(),
    });
    assert!(tags.is_empty());
}

#[test]
fn test_apply_undo_restores_tags_on_reinserted_text() {
    // "abc def" with "def" bold, then "c def" deleted
    let mut before = TagSet::new();
    before.add(FormatTag::Bold, 4..7);
    let delete = OpKind::Delete {
        start: 2,
        end: 7,
        deleted: "c def".to_string(),
    };
    let mut tags = before.clone();
    tags.apply_edit(&delete);
    assert!(tags.is_empty());

    tags.add(FormatTag::Italic, 0..1);
    tags.apply_undo(&delete.inverse(), &before);
    assert_eq!(tags.ranges(FormatTag::Bold), &[4..7]);
    assert_eq!(tags.ranges(FormatTag::Italic), &[0..1]);
}

#[test]
fn test_apply_undo_maps_spans_through_batches() {
    // "x-x" -> "yy-yy" by replacing each "x"; "x" at 2 was underlined
    let mut before = TagSet::new();
    before.add(FormatTag::Underline, 2..3);
    let forward = OpKind::Batch(vec![
        OpKind::Delete { start: 0, end: 1, deleted: "x".to_string() },
        OpKind::Insert { char_offset: 0, text: "yy".to_string() },
        OpKind::Delete { start: 3, end: 4, deleted: "x".to_string() },
        OpKind::Insert { char_offset: 3, text: "yy".to_string() },
    ]);
    let mut tags = before.clone();
    tags.apply_edit(&forward);
    assert!(tags.is_empty());

    tags.apply_undo(&forward.inverse(), &before);
    assert_eq!(tags.ranges(FormatTag::Underline), &[2..3]);
}
