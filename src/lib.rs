mod builder;
mod caller;
mod card;
mod common;
mod config;
mod format;
mod grid;
mod logging;
mod pool;
mod render;
mod shuffle;
mod win;

pub use builder::{build_card, generate, GenerationMode};
pub use caller::Caller;
pub use card::{Card, CardSet, Cell};
pub use common::BingoError;
pub use config::*;
pub use format::{BingoFile, CardData, CellData, Metadata};
pub use grid::GridSpec;
pub use logging::init_logging;
pub use pool::Pool;
pub use render::{parse_card, render_all, render_card, slug};
pub use shuffle::{shuffle_in_place, shuffled};
pub use win::{completed_lines, has_bingo, Line};
