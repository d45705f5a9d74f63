use bingo::{
    generate, parse_card, render_all, render_card, slug, BingoError, BingoFile, GenerationMode,
    GridSpec, Pool,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn sample_set(cards: usize) -> (bingo::CardSet, Pool) {
    let pool = Pool::new(
        (0..12).map(|i| format!("Item {i}")),
        "FREE",
    );
    let grid = GridSpec::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let set = generate(
        &pool,
        grid,
        "FREE",
        "Office Party",
        cards,
        GenerationMode::RandomPool,
        &mut rng,
    )
    .unwrap();
    (set, pool)
}

#[test]
fn bingo_roundtrip_preserves_cells() {
    let (set, pool) = sample_set(3);
    let json = BingoFile::for_set(&set, &pool).to_json().unwrap();
    let loaded = BingoFile::parse(&json).unwrap();

    assert_eq!(loaded.metadata.title, "Office Party | All Cards");
    assert_eq!(loaded.metadata.num_cards, 3);
    assert_eq!(loaded.metadata.card_size, 3);
    assert_eq!(loaded.metadata.center_text, "FREE");
    assert_eq!(loaded.master_list, pool.items());
    assert_eq!(loaded.caller_list().unwrap(), pool.items());

    let cards = loaded.into_cards().unwrap();
    assert_eq!(cards, set.cards);
}

#[test]
fn single_card_file_carries_card_number() {
    let (set, pool) = sample_set(2);
    let json = BingoFile::for_card(&set, &pool, &set.cards[1])
        .to_json()
        .unwrap();
    let loaded = BingoFile::parse(&json).unwrap();
    assert_eq!(loaded.metadata.title, "Office Party | Card #2");
    assert_eq!(loaded.metadata.card_number, Some(2));
    assert_eq!(loaded.metadata.num_cards, 1);
    let cards = loaded.into_cards().unwrap();
    assert_eq!(cards, vec![set.cards[1].clone()]);
}

#[test]
fn wrong_format_tag_is_rejected() {
    let (set, pool) = sample_set(1);
    let json = BingoFile::for_set(&set, &pool)
        .to_json()
        .unwrap()
        .replace("bingo-card-generator-v1", "bingo-card-generator-v2");
    match BingoFile::parse(&json) {
        Err(BingoError::InvalidFormat(reason)) => {
            assert!(reason.contains("format tag"), "{reason}")
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn missing_cards_are_rejected() {
    let json = r#"{
        "format": "bingo-card-generator-v1",
        "metadata": {
            "title": "T", "cardSize": 3, "centerText": "FREE", "numCards": 0,
            "generatedDate": "2026-01-01T00:00:00Z", "generatedWith": "x"
        },
        "masterList": ["a"],
        "callerList": ["a"],
        "cards": []
    }"#;
    assert!(matches!(
        BingoFile::parse(json),
        Err(BingoError::InvalidFormat(_))
    ));
}

#[test]
fn missing_caller_list_blocks_caller_mode_only() {
    let (set, pool) = sample_set(1);
    let mut file = BingoFile::for_set(&set, &pool);
    file.caller_list.clear();
    let loaded = BingoFile::parse(&file.to_json().unwrap()).unwrap();
    // play mode still works
    assert!(loaded.clone().into_cards().is_ok());
    // caller mode does not
    assert!(matches!(
        loaded.caller_list(),
        Err(BingoError::InvalidFormat(_))
    ));
}

#[test]
fn bad_cell_count_is_malformed() {
    let json = r#"{
        "format": "bingo-card-generator-v1",
        "metadata": {
            "title": "T", "cardSize": 3, "centerText": "FREE", "numCards": 1,
            "generatedDate": "2026-01-01T00:00:00Z", "generatedWith": "x"
        },
        "masterList": ["a"],
        "callerList": ["a"],
        "cards": [{
            "cardNumber": 1, "gridSize": 3,
            "cells": [
                {"content": "a", "isCenter": false, "checked": false},
                {"content": "b", "isCenter": false, "checked": false},
                {"content": "c", "isCenter": false, "checked": false}
            ]
        }]
    }"#;
    let loaded = BingoFile::parse(json).unwrap();
    assert_eq!(
        loaded.into_cards().unwrap_err(),
        BingoError::MalformedGrid(3)
    );
}

#[test]
fn html_roundtrip_recovers_text_and_center() {
    let (set, _) = sample_set(1);
    let html = render_card(&set, &set.cards[0]);
    let parsed = parse_card(&html).unwrap();

    assert_eq!(parsed.grid().size(), 3);
    for (original, recovered) in set.cards[0].cells().iter().zip(parsed.cells()) {
        assert_eq!(original.content, recovered.content);
        assert_eq!(original.is_center, recovered.is_center);
    }
}

#[test]
fn all_cards_html_parses_to_first_card() {
    let (set, _) = sample_set(3);
    let html = render_all(&set);
    let parsed = parse_card(&html).unwrap();
    // parse-back only recovers a single playable card; the first one wins
    assert_eq!(parsed.cells().len(), 9);
}

#[test]
fn html_without_cells_is_rejected() {
    assert!(matches!(
        parse_card("<html><body>nothing here</body></html>"),
        Err(BingoError::InvalidFormat(_))
    ));
}

#[test]
fn slug_collapses_punctuation() {
    assert_eq!(slug("Office Party 2026!"), "office-party-2026");
    assert_eq!(slug("  --  "), "bingo-card");
    assert_eq!(slug("BINGO"), "bingo");
}
