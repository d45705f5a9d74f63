//! Grid geometry: size, center free cell and row-major index math.

use crate::common::BingoError;

/// Shape of a card grid. Odd sizes reserve the exact center cell as a free
/// cell; even sizes have no free cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    size: usize,
}

impl GridSpec {
    /// Create a grid spec; `size` must be at least 1.
    pub fn new(size: usize) -> Result<Self, BingoError> {
        if size == 0 {
            return Err(BingoError::InvalidGridSize(size));
        }
        Ok(GridSpec { size })
    }

    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, `size * size`.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Whether the center cell is a pre-checked free cell (odd sizes only).
    pub fn has_center_free(&self) -> bool {
        self.size % 2 == 1
    }

    /// Row-major index of the center cell: floor of the cell-count midpoint,
    /// landing at row `size / 2`, column `size / 2` for odd sizes.
    pub fn center_index(&self) -> usize {
        self.cell_count() / 2
    }

    /// Number of pool items needed to fill one card.
    pub fn required_items(&self) -> usize {
        self.cell_count() - usize::from(self.has_center_free())
    }

    /// (row, col) of a row-major cell index.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Row-major cell index of (row, col).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Recover a grid spec from a raw cell count, e.g. when importing a
    /// rendered card. Fails unless the count is a perfect square.
    pub fn from_cell_count(cells: usize) -> Result<Self, BingoError> {
        let size = (cells as f64).sqrt().round() as usize;
        if size == 0 || size * size != cells {
            return Err(BingoError::MalformedGrid(cells));
        }
        Ok(GridSpec { size })
    }
}
