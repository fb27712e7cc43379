//! Visual line layout and dimensional constants for the InputBox.
//!
//! The buffer is broken into rows by explicit newlines first, then hard-wrapped
//! at the inner width character by character. Unlike word wrapping this keeps
//! every space exactly where it was typed, so a byte offset maps to exactly one
//! (row, column) pair.

use unicode_width::UnicodeWidthChar;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Offset from area edge to content (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Inner content width after subtracting border/padding. 0 if too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// A visual row as a byte range `start..end` into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Row {
    pub start: usize,
    pub end: usize,
}

/// Split `text` into visual rows no wider than `width` display columns.
///
/// Always returns at least one row. A trailing newline yields a final empty
/// row so the cursor has somewhere to sit.
pub(super) fn visual_rows(text: &str, width: u16) -> Vec<Row> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let mut row_start = line_start;
        let mut row_width = 0;
        for (offset, c) in line.char_indices() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width && row_width > 0 {
                rows.push(Row {
                    start: row_start,
                    end: line_start + offset,
                });
                row_start = line_start + offset;
                row_width = 0;
            }
            row_width += w;
        }
        let line_end = line_start + line.len();
        rows.push(Row {
            start: row_start,
            end: line_end,
        });
        line_start = line_end + 1; // skip '\n'
    }

    rows
}

/// Row index and display column of byte offset `pos`.
///
/// At a soft-wrap boundary the cursor belongs to the start of the next row.
pub(super) fn locate(text: &str, rows: &[Row], pos: usize) -> (usize, u16) {
    let index = rows
        .iter()
        .rposition(|row| row.start <= pos)
        .unwrap_or(0);
    let row = rows[index.min(rows.len().saturating_sub(1))];
    let end = pos.min(row.end).max(row.start);
    let column: usize = text[row.start..end]
        .chars()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    (index, column.min(u16::MAX as usize) as u16)
}

/// Byte offset of the previous character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
