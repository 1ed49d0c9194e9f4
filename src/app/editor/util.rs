use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.max(10.min(area.width)).min(area.width);
    let height = height.max(3.min(area.height)).min(area.height);

    let x = area.x + (area.width.saturating_sub(width) / 2);
    let y = area.y + (area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Cells taken by grapheme `g` drawn at display column `col`; tabs run to
/// the next tab stop.
pub(super) fn grapheme_cells(g: &str, col: usize, tab_size: usize) -> usize {
    if g == "\t" {
        let tab_size = tab_size.max(1);
        tab_size - col % tab_size
    } else {
        g.width()
    }
}

/// Display column of grapheme index `grapheme_col` in `line`.
pub(super) fn cell_of_grapheme(line: &str, grapheme_col: usize, tab_size: usize) -> usize {
    line.graphemes(true)
        .take(grapheme_col)
        .fold(0, |col, g| col + grapheme_cells(g, col, tab_size))
}

/// Grapheme index under display column `cell`; past the end clamps to the
/// line length.
pub(super) fn grapheme_at_cell(line: &str, cell: usize, tab_size: usize) -> usize {
    let mut col = 0usize;
    for (index, g) in line.graphemes(true).enumerate() {
        let w = grapheme_cells(g, col, tab_size);
        if cell < col + w.max(1) {
            return index;
        }
        col += w;
    }
    line.graphemes(true).count()
}

#[cfg(test)]
#[path = "../../../tests/unit/app/editor/util.rs"]
mod tests;
