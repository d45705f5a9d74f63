//! Card and cell state: the immutable layout plus mutable check marks.

use crate::grid::GridSpec;

/// One grid cell. `content` is opaque display text; the single center cell
/// of an odd grid starts checked and stays checked for the whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub content: String,
    pub is_center: bool,
    pub checked: bool,
}

impl Cell {
    /// A regular, unchecked item cell.
    pub fn item(content: String) -> Self {
        Cell {
            content,
            is_center: false,
            checked: false,
        }
    }

    /// The pre-checked center free cell.
    pub fn center(free_text: &str) -> Self {
        Cell {
            content: free_text.to_string(),
            is_center: true,
            checked: true,
        }
    }
}

/// A single generated card: a row-major cell sequence of length `size²`.
/// The layout is fixed once built; only `checked` flags change during play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    card_number: usize,
    grid: GridSpec,
    cells: Vec<Cell>,
}

impl Card {
    /// Assemble a card from already-placed cells. Callers guarantee
    /// `cells.len() == grid.cell_count()`; the builder and importers do.
    pub(crate) fn new(card_number: usize, grid: GridSpec, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), grid.cell_count());
        Card {
            card_number,
            grid,
            cells,
        }
    }

    /// 1-based number of this card within its set.
    pub fn card_number(&self) -> usize {
        self.card_number
    }

    /// Grid shape of this card.
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a row-major index, if in range.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Toggle the check mark at `index`. The center cell is locked; toggling
    /// it is a no-op. Returns `true` when the state actually changed.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if !cell.is_center => {
                cell.checked = !cell.checked;
                true
            }
            _ => false,
        }
    }

    /// Uncheck every cell except the locked center.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_center {
                cell.checked = false;
            }
        }
    }

    /// Row-major checked flags, the input shape the win evaluator expects.
    pub fn checked_states(&self) -> Vec<bool> {
        self.cells.iter().map(|c| c.checked).collect()
    }
}

/// An ordered run of cards generated together from one pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSet {
    pub title: String,
    pub free_text: String,
    pub grid: GridSpec,
    pub cards: Vec<Card>,
}

impl CardSet {
    /// Display title for one card: `"{title} | Card #{n}"`.
    pub fn card_title(&self, card_number: usize) -> String {
        format!("{} | Card #{}", self.title, card_number)
    }
}
