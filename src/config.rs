//! Fixed configuration for card generation and the `.bingo` file format.

/// Grid size used by traditional B-I-N-G-O cards.
pub const TRADITIONAL_SIZE: usize = 5;
/// Pool size required for traditional mode: 15 items per column.
pub const TRADITIONAL_POOL_SIZE: usize = 75;
/// Items per traditional column letter.
pub const TRADITIONAL_ITEMS_PER_COLUMN: usize = 15;
/// Column letters in board order.
pub const TRADITIONAL_LETTERS: [char; 5] = ['B', 'I', 'N', 'G', 'O'];

/// Default center free-cell text.
pub const DEFAULT_FREE_TEXT: &str = "FREE";
/// Default card title when the user supplies none.
pub const DEFAULT_TITLE: &str = "BINGO";

/// Version tag every exported `.bingo` file carries.
pub const FORMAT_TAG: &str = "bingo-card-generator-v1";
/// Tool identifier written into exported metadata.
pub const GENERATED_WITH: &str = "Bingo Card Generator";

/// Inclusive number range for a traditional column, e.g. B is 1-15.
pub const fn traditional_range(column: usize) -> (u32, u32) {
    let lo = (column * TRADITIONAL_ITEMS_PER_COLUMN + 1) as u32;
    (lo, lo + TRADITIONAL_ITEMS_PER_COLUMN as u32 - 1)
}
