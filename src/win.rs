//! Win detection: completed rows, columns and diagonals over checked cells.

use std::fmt;

/// A completed line on a card. `Display` yields the user-facing labels:
/// `Row 3`, `Column 1`, `Diagonal \`, `Diagonal /`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    DiagonalMain,
    /// Top-right to bottom-left.
    DiagonalAnti,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(r) => write!(f, "Row {r}"),
            Line::Column(c) => write!(f, "Column {c}"),
            Line::DiagonalMain => write!(f, "Diagonal \\"),
            Line::DiagonalAnti => write!(f, "Diagonal /"),
        }
    }
}

/// All completed lines for a row-major checked-state of length `size²`.
///
/// Pure full recomputation, scanned in a fixed order (rows, then columns,
/// then the two diagonals) so the output is reproducible for a given state.
/// Callers re-invoke this on every check change; a single toggle can
/// complete several lines at once.
pub fn completed_lines(size: usize, checked: &[bool]) -> Vec<Line> {
    debug_assert_eq!(checked.len(), size * size);
    let mut lines = Vec::new();

    for row in 0..size {
        if (0..size).all(|col| checked[row * size + col]) {
            lines.push(Line::Row(row + 1));
        }
    }
    for col in 0..size {
        if (0..size).all(|row| checked[row * size + col]) {
            lines.push(Line::Column(col + 1));
        }
    }
    if (0..size).all(|i| checked[i * size + i]) {
        lines.push(Line::DiagonalMain);
    }
    if (0..size).all(|i| checked[i * size + (size - 1 - i)]) {
        lines.push(Line::DiagonalAnti);
    }
    lines
}

/// A bingo is any non-empty set of completed lines.
pub fn has_bingo(size: usize, checked: &[bool]) -> bool {
    !completed_lines(size, checked).is_empty()
}
