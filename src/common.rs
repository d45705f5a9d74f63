//! Common types: crate-wide errors shared by generation, play and import.

use std::fmt;

/// Errors returned by card generation, evaluation and file handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    /// No items available to fill a card.
    EmptyPool,
    /// Grid size outside the supported range (must be at least 1).
    InvalidGridSize(usize),
    /// A loaded file failed format, version or structure validation.
    InvalidFormat(String),
    /// Traditional-mode column bucket is below its required count.
    /// Triggers fallback to random-pool mode, not a user-facing failure.
    InsufficientBucket {
        column: char,
        have: usize,
        need: usize,
    },
    /// Imported cell count is not a perfect square.
    MalformedGrid(usize),
}

impl fmt::Display for BingoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BingoError::EmptyPool => write!(f, "item pool is empty, nothing to place on a card"),
            BingoError::InvalidGridSize(n) => write!(f, "invalid grid size {n}, must be at least 1"),
            BingoError::InvalidFormat(reason) => write!(f, "invalid bingo file: {reason}"),
            BingoError::InsufficientBucket { column, have, need } => write!(
                f,
                "column {column} has {have} items but needs {need} for a traditional card"
            ),
            BingoError::MalformedGrid(cells) => {
                write!(f, "cell count {cells} is not a perfect square")
            }
        }
    }
}

impl std::error::Error for BingoError {}
