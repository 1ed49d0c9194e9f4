use super::*;

#[test]
fn tabs_expand_to_next_stop() {
    assert_eq!(grapheme_cells("\t", 0, 4), 4);
    assert_eq!(grapheme_cells("\t", 3, 4), 1);
    assert_eq!(cell_of_grapheme("a\tb", 2, 4), 4);
    assert_eq!(cell_of_grapheme("a\tb", 3, 4), 5);
}

#[test]
fn wide_chars_take_two_cells() {
    assert_eq!(cell_of_grapheme("你好x", 2, 4), 4);
    assert_eq!(grapheme_at_cell("你好x", 1, 4), 0);
    assert_eq!(grapheme_at_cell("你好x", 2, 4), 1);
    assert_eq!(grapheme_at_cell("你好x", 4, 4), 2);
    assert_eq!(grapheme_at_cell("你好x", 40, 4), 3);
}

#[test]
fn click_inside_tab_lands_on_the_tab() {
    assert_eq!(grapheme_at_cell("\tx", 2, 4), 0);
    assert_eq!(grapheme_at_cell("\tx", 4, 4), 1);
}

#[test]
fn centered_rect_is_clamped_to_area() {
    let area = Rect::new(0, 0, 40, 10);
    assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
    assert_eq!(centered_rect(100, 100, area), area);
    assert!(rect_contains(area, 39, 9));
    assert!(!rect_contains(area, 40, 0));
}
