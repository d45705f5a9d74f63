//! The `.bingo` JSON exchange format: typed schema, export and validated
//! import.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardSet, Cell};
use crate::common::BingoError;
use crate::config::{FORMAT_TAG, GENERATED_WITH};
use crate::grid::GridSpec;
use crate::pool::Pool;

/// Top-level `.bingo` document. Loose JSON from disk is deserialized into
/// this strict record and rejected early on any mismatch rather than
/// accessed field by field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BingoFile {
    pub format: String,
    pub metadata: Metadata,
    #[serde(rename = "masterList")]
    pub master_list: Vec<String>,
    #[serde(rename = "callerList", default)]
    pub caller_list: Vec<String>,
    pub cards: Vec<CardData>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    #[serde(rename = "cardSize")]
    pub card_size: usize,
    #[serde(rename = "centerText")]
    pub center_text: String,
    #[serde(rename = "numCards")]
    pub num_cards: usize,
    #[serde(rename = "cardNumber", skip_serializing_if = "Option::is_none")]
    pub card_number: Option<usize>,
    #[serde(rename = "generatedDate")]
    pub generated_date: String,
    #[serde(rename = "generatedWith")]
    pub generated_with: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardData {
    #[serde(rename = "cardNumber")]
    pub card_number: usize,
    #[serde(rename = "gridSize")]
    pub grid_size: usize,
    pub cells: Vec<CellData>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CellData {
    pub content: String,
    #[serde(rename = "isCenter")]
    pub is_center: bool,
    pub checked: bool,
}

impl From<&Cell> for CellData {
    fn from(cell: &Cell) -> Self {
        CellData {
            content: cell.content.clone(),
            is_center: cell.is_center,
            checked: cell.checked,
        }
    }
}

impl From<CellData> for Cell {
    fn from(data: CellData) -> Self {
        Cell {
            content: data.content,
            is_center: data.is_center,
            checked: data.checked,
        }
    }
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        CardData {
            card_number: card.card_number(),
            grid_size: card.grid().size(),
            cells: card.cells().iter().map(CellData::from).collect(),
        }
    }
}

impl CardData {
    /// Rebuild a playable card, validating the grid shape first.
    pub fn into_card(self) -> Result<Card, BingoError> {
        let grid = GridSpec::from_cell_count(self.cells.len())?;
        if grid.size() != self.grid_size {
            return Err(BingoError::InvalidFormat(format!(
                "card #{} declares grid size {} but has {} cells",
                self.card_number,
                self.grid_size,
                self.cells.len()
            )));
        }
        let cells = self.cells.into_iter().map(Cell::from).collect();
        Ok(Card::new(self.card_number, grid, cells))
    }
}

impl BingoFile {
    /// Document holding every card of a set. The caller list seeds the draw
    /// engine and mirrors the master list.
    pub fn for_set(set: &CardSet, pool: &Pool) -> Self {
        let single = set.cards.len() == 1;
        let title = if single {
            set.card_title(1)
        } else {
            format!("{} | All Cards", set.title)
        };
        BingoFile {
            format: FORMAT_TAG.to_string(),
            metadata: Metadata {
                title,
                card_size: set.grid.size(),
                center_text: set.free_text.clone(),
                num_cards: set.cards.len(),
                card_number: single.then_some(1),
                generated_date: Utc::now().to_rfc3339(),
                generated_with: GENERATED_WITH.to_string(),
            },
            master_list: pool.items().to_vec(),
            caller_list: pool.items().to_vec(),
            cards: set.cards.iter().map(CardData::from).collect(),
        }
    }

    /// Document holding one card of a set, for per-player sharing.
    pub fn for_card(set: &CardSet, pool: &Pool, card: &Card) -> Self {
        BingoFile {
            format: FORMAT_TAG.to_string(),
            metadata: Metadata {
                title: set.card_title(card.card_number()),
                card_size: set.grid.size(),
                center_text: set.free_text.clone(),
                num_cards: 1,
                card_number: Some(card.card_number()),
                generated_date: Utc::now().to_rfc3339(),
                generated_with: GENERATED_WITH.to_string(),
            },
            master_list: pool.items().to_vec(),
            caller_list: pool.items().to_vec(),
            cards: vec![CardData::from(card)],
        }
    }

    /// Pretty-printed JSON, the on-disk `.bingo` encoding.
    pub fn to_json(&self) -> Result<String, BingoError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BingoError::InvalidFormat(e.to_string()))
    }

    /// Parse and validate a `.bingo` document. Fails on a format tag
    /// mismatch or an absent/empty card list; nothing is partially loaded.
    pub fn parse(json: &str) -> Result<Self, BingoError> {
        let file: BingoFile = serde_json::from_str(json)
            .map_err(|e| BingoError::InvalidFormat(e.to_string()))?;
        if file.format != FORMAT_TAG {
            return Err(BingoError::InvalidFormat(format!(
                "unsupported format tag {:?}, expected {:?}",
                file.format, FORMAT_TAG
            )));
        }
        if file.cards.is_empty() {
            return Err(BingoError::InvalidFormat(
                "no cards found in file".to_string(),
            ));
        }
        Ok(file)
    }

    /// Caller list for seeding the draw engine. Loading a file without one
    /// into caller mode is an error.
    pub fn caller_list(&self) -> Result<&[String], BingoError> {
        if self.caller_list.is_empty() {
            return Err(BingoError::InvalidFormat(
                "no caller list found in file".to_string(),
            ));
        }
        Ok(&self.caller_list)
    }

    /// Rebuild all playable cards, validating each grid.
    pub fn into_cards(self) -> Result<Vec<Card>, BingoError> {
        self.cards.into_iter().map(CardData::into_card).collect()
    }
}
