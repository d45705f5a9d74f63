//! Card building and card-set generation.
//!
//! The builder turns a pool (or the traditional column buckets) into one
//! card's row-major cell sequence; the generator runs it N times with
//! independent randomness to produce a set.

use log::{debug, warn};
use rand::Rng;

use crate::card::{Card, CardSet, Cell};
use crate::common::BingoError;
use crate::config::{TRADITIONAL_LETTERS, TRADITIONAL_SIZE};
use crate::grid::GridSpec;
use crate::pool::Pool;
use crate::shuffle::{shuffle_in_place, shuffled};

/// Requested generation mode. Traditional mode is a request, not a
/// guarantee: eligibility is re-checked against the current pool on every
/// build and falls back to random-pool mode when it does not hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GenerationMode {
    #[default]
    RandomPool,
    Traditional,
}

/// Build one card from the pool.
///
/// Random-pool mode shuffles and takes the first `required_items`. When the
/// pool is smaller than that, the shuffled pool is cycled to length and then
/// shuffled a second time; the reshuffle scatters the repeats instead of
/// leaving them in a predictable block at the tail.
pub fn build_card<R: Rng>(
    pool: &Pool,
    grid: GridSpec,
    free_text: &str,
    card_number: usize,
    mode: GenerationMode,
    rng: &mut R,
) -> Result<Card, BingoError> {
    if pool.is_empty() {
        return Err(BingoError::EmptyPool);
    }
    if mode == GenerationMode::Traditional {
        match build_traditional_card(pool, grid, free_text, card_number, rng) {
            Ok(card) => return Ok(card),
            Err(e) => {
                warn!("traditional mode unavailable ({e}), falling back to random pool");
            }
        }
    }
    build_random_card(pool, grid, free_text, card_number, rng)
}

fn build_random_card<R: Rng>(
    pool: &Pool,
    grid: GridSpec,
    free_text: &str,
    card_number: usize,
    rng: &mut R,
) -> Result<Card, BingoError> {
    let required = grid.required_items();
    let mut picks = shuffled(pool.items(), rng);
    if picks.len() >= required {
        picks.truncate(required);
    } else {
        // Cycle the shuffled pool to length, then reshuffle so the repeats
        // are scattered across the card rather than clustered.
        let mut filled = Vec::with_capacity(required);
        for i in 0..required {
            filled.push(picks[i % picks.len()].clone());
        }
        shuffle_in_place(&mut filled, rng);
        picks = filled;
    }
    debug!(
        "card #{card_number}: {}x{} grid filled from {} pool items",
        grid.size(),
        grid.size(),
        pool.len()
    );
    Ok(place_cells(grid, free_text, card_number, picks))
}

/// Traditional 5x5 build: shuffle each letter bucket and deal it down its
/// column, skipping the center row in the N column.
fn build_traditional_card<R: Rng>(
    pool: &Pool,
    grid: GridSpec,
    free_text: &str,
    card_number: usize,
    rng: &mut R,
) -> Result<Card, BingoError> {
    if grid.size() != TRADITIONAL_SIZE {
        return Err(BingoError::InvalidFormat(format!(
            "traditional cards need a {TRADITIONAL_SIZE}x{TRADITIONAL_SIZE} grid, got {}",
            grid.size()
        )));
    }
    let buckets = pool
        .traditional_buckets()
        .ok_or_else(|| BingoError::InvalidFormat("pool is not a 75-item B-I-N-G-O set".into()))?;

    let size = grid.size();
    let center = size / 2;
    let mut cells = vec![Cell::item(String::new()); grid.cell_count()];
    for (col, bucket) in buckets.iter().enumerate() {
        let need = if col == center { size - 1 } else { size };
        if bucket.len() < need {
            return Err(BingoError::InsufficientBucket {
                column: TRADITIONAL_LETTERS[col],
                have: bucket.len(),
                need,
            });
        }
        let picks = shuffled(bucket, rng);
        for row in 0..size {
            let index = grid.index(row, col);
            if col == center && row == center {
                cells[index] = Cell::center(free_text);
            } else {
                // The N column skips its center slot, so rows below it pull
                // from one pick earlier.
                let pick = if col == center && row > center {
                    row - 1
                } else {
                    row
                };
                cells[index] = Cell::item(picks[pick].to_string());
            }
        }
    }
    debug!("card #{card_number}: traditional 5x5 build");
    Ok(Card::new(card_number, grid, cells))
}

/// Lay picked items row-major into cells, reserving the center free cell of
/// odd grids before filling so no item is displaced.
fn place_cells(grid: GridSpec, free_text: &str, card_number: usize, picks: Vec<String>) -> Card {
    debug_assert_eq!(picks.len(), grid.required_items());
    let center = grid.center_index();
    let mut cells = Vec::with_capacity(grid.cell_count());
    let mut next = picks.into_iter();
    for i in 0..grid.cell_count() {
        if grid.has_center_free() && i == center {
            cells.push(Cell::center(free_text));
        } else {
            cells.push(Cell::item(next.next().unwrap_or_default()));
        }
    }
    Card::new(card_number, grid, cells)
}

/// Generate a set of `count` cards sharing one grid, free text and title.
/// Each card is shuffled independently; cards in a set are uncorrelated and
/// no de-duplication is performed across them.
pub fn generate<R: Rng>(
    pool: &Pool,
    grid: GridSpec,
    free_text: &str,
    title: &str,
    count: usize,
    mode: GenerationMode,
    rng: &mut R,
) -> Result<CardSet, BingoError> {
    let mut cards = Vec::with_capacity(count);
    for number in 1..=count {
        cards.push(build_card(pool, grid, free_text, number, mode, rng)?);
    }
    Ok(CardSet {
        title: title.to_string(),
        free_text: free_text.to_string(),
        grid,
        cards,
    })
}
