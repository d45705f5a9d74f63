//! Printable HTML export and the matching import path.
//!
//! Exports are self-contained documents (inline styling, one page per card)
//! that open and print on their own. Importing one only needs to recover
//! each cell's text and center flag; the grid size is inferred from the
//! cell count.

use regex::Regex;

use crate::card::{Card, CardSet, Cell};
use crate::common::BingoError;
use crate::grid::GridSpec;

const CARD_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; color: #333; background: white; padding: 20px; }
.preview-card { background: white; border: 2px solid #333; border-radius: 10px; padding: 20px; margin: 20px auto; max-width: 600px; page-break-after: always; }
.preview-card h4 { text-align: center; margin-bottom: 20px; font-size: 1.5rem; }
.bingo-card { display: grid; gap: 2px; background: #333; border: 3px solid #333; border-radius: 10px; overflow: hidden; margin: 0 auto; max-width: 500px; }
.bingo-cell { background: white; padding: 15px 5px; text-align: center; font-size: 0.8rem; font-weight: 500; display: flex; align-items: center; justify-content: center; min-height: 60px; word-wrap: break-word; }
.bingo-cell.center { background: linear-gradient(135deg, #ffd89b 0%, #19547b 100%); color: white; font-weight: bold; font-size: 1rem; }
@media print { body { padding: 0; } .preview-card { margin: 0; max-width: none; } }";

/// Standalone printable document for one card.
pub fn render_card(set: &CardSet, card: &Card) -> String {
    let title = set.card_title(card.card_number());
    document(&title, &card_markup(&title, card))
}

/// Standalone printable document with every card of the set, one per page.
pub fn render_all(set: &CardSet) -> String {
    let title = format!("{} | All Cards", set.title);
    let body: String = set
        .cards
        .iter()
        .map(|card| card_markup(&set.card_title(card.card_number()), card))
        .collect();
    document(&title, &body)
}

fn card_markup(title: &str, card: &Card) -> String {
    let size = card.grid().size();
    let mut html = format!(
        "<div class=\"preview-card\">\n<h4>{}</h4>\n\
         <div class=\"bingo-card\" style=\"grid-template-columns: repeat({size}, 1fr);\">\n",
        escape(title)
    );
    for cell in card.cells() {
        let class = if cell.is_center {
            "bingo-cell center"
        } else {
            "bingo-cell"
        };
        html.push_str(&format!(
            "<div class=\"{class}\">{}</div>\n",
            escape(&cell.content)
        ));
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{}</title>\n<style>\n{CARD_CSS}\n</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

/// Recover the first card from an exported document. Cells come back
/// unchecked apart from the pre-checked center; the grid size must be a
/// perfect square of the cell count.
pub fn parse_card(html: &str) -> Result<Card, BingoError> {
    // Scope to the first card block; all-cards documents hold several.
    let marker = "class=\"bingo-card\"";
    let start = html
        .find(marker)
        .ok_or_else(|| BingoError::InvalidFormat("no bingo card found in file".to_string()))?;
    let rest = &html[start + marker.len()..];
    let first_card = match rest.find(marker) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let cell_re = Regex::new(r#"<div class="bingo-cell( center)?">([^<]*)</div>"#)
        .map_err(|e| BingoError::InvalidFormat(e.to_string()))?;
    let cells: Vec<Cell> = cell_re
        .captures_iter(first_card)
        .map(|cap| {
            let content = unescape(cap.get(2).map_or("", |m| m.as_str()).trim());
            if cap.get(1).is_some() {
                Cell::center(&content)
            } else {
                Cell::item(content)
            }
        })
        .collect();
    if cells.is_empty() {
        return Err(BingoError::InvalidFormat(
            "no bingo cells found in file".to_string(),
        ));
    }
    let grid = GridSpec::from_cell_count(cells.len())?;
    Ok(Card::new(1, grid, cells))
}

/// File-name slug for export: lowercase, runs of non-alphanumerics
/// collapsed to single hyphens.
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        "bingo-card".to_string()
    } else {
        out
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
