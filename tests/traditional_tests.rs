use std::collections::HashSet;

use bingo::{
    build_card, traditional_range, GenerationMode, GridSpec, Pool, TRADITIONAL_LETTERS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn full_traditional_items() -> Vec<String> {
    (0..5)
        .flat_map(|c| {
            let (lo, hi) = traditional_range(c);
            (lo..=hi).map(move |n| format!("{}{}", TRADITIONAL_LETTERS[c], n))
        })
        .collect()
}

fn column_of(item: &str) -> usize {
    TRADITIONAL_LETTERS
        .iter()
        .position(|&l| item.starts_with(l))
        .unwrap()
}

#[test]
fn traditional_card_respects_column_ranges() {
    let pool = Pool::new(full_traditional_items(), "FREE");
    let grid = GridSpec::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let card = build_card(&pool, grid, "FREE", 1, GenerationMode::Traditional, &mut rng).unwrap();

    assert_eq!(card.cells().len(), 25);
    let mut seen = HashSet::new();
    for (i, cell) in card.cells().iter().enumerate() {
        let (row, col) = grid.position(i);
        if row == 2 && col == 2 {
            assert!(cell.is_center);
            assert_eq!(cell.content, "FREE");
            continue;
        }
        assert!(!cell.is_center);
        // every item sits in the column its letter names
        assert_eq!(column_of(&cell.content), col, "{} in column {col}", cell.content);
        let number: u32 = cell.content[1..].parse().unwrap();
        let (lo, hi) = traditional_range(col);
        assert!((lo..=hi).contains(&number));
        assert!(seen.insert(cell.content.clone()), "no item repeats on one card");
    }
    assert_eq!(seen.len(), 24);
}

#[test]
fn traditional_column_counts() {
    let pool = Pool::new(full_traditional_items(), "FREE");
    let grid = GridSpec::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let card = build_card(&pool, grid, "FREE", 1, GenerationMode::Traditional, &mut rng).unwrap();

    for col in 0..5 {
        let items = (0..5)
            .map(|row| &card.cells()[grid.index(row, col)])
            .filter(|c| !c.is_center)
            .count();
        let expected = if col == 2 { 4 } else { 5 };
        assert_eq!(items, expected, "column {col}");
    }
}

#[test]
fn short_pool_falls_back_to_random() {
    let mut items = full_traditional_items();
    items.pop(); // 74 items, not eligible
    let pool = Pool::new(items, "FREE");
    let grid = GridSpec::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    let card = build_card(&pool, grid, "FREE", 1, GenerationMode::Traditional, &mut rng).unwrap();

    // still a valid 5x5 card with a free center
    assert_eq!(card.cells().len(), 25);
    assert!(card.cells()[12].is_center);
}

#[test]
fn mislabeled_pool_falls_back_to_random() {
    let mut items = full_traditional_items();
    items[10] = "Pineapple".to_string();
    let pool = Pool::new(items, "FREE");
    let grid = GridSpec::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(4);
    let card = build_card(&pool, grid, "FREE", 1, GenerationMode::Traditional, &mut rng).unwrap();
    assert_eq!(card.cells().len(), 25);
    // fallback draws from the whole pool, so the swapped-in item can land anywhere
    assert!(card.cells().iter().all(|c| c.is_center || !c.content.is_empty()));
}

#[test]
fn short_bucket_falls_back_to_random() {
    // 75 correctly labeled items, but only 3 land in column O: the O bucket
    // cannot fill its 5 rows, so the build falls back to random mode.
    let mut items: Vec<String> = Vec::new();
    for _ in 0..9 {
        items.push("B1".to_string());
        items.push("B2".to_string());
    }
    for c in 1..4 {
        let (lo, hi) = traditional_range(c);
        for n in lo..=hi {
            items.push(format!("{}{}", TRADITIONAL_LETTERS[c], n));
        }
    }
    items.push("B3".to_string());
    items.push("B4".to_string());
    items.push("B5".to_string());
    items.push("B6".to_string());
    items.push("B7".to_string());
    items.push("B8".to_string());
    items.push("B9".to_string());
    items.push("B10".to_string());
    items.push("B11".to_string());
    items.push("O61".to_string());
    items.push("O62".to_string());
    items.push("O63".to_string());
    assert_eq!(items.len(), 75);

    let pool = Pool::new(items, "FREE");
    assert!(pool.traditional_buckets().is_some());
    let grid = GridSpec::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let card = build_card(&pool, grid, "FREE", 1, GenerationMode::Traditional, &mut rng).unwrap();

    // random fallback: column 5 is no longer restricted to O-range items
    assert_eq!(card.cells().len(), 25);
    assert!(card.cells()[12].is_center);
}

#[test]
fn non_five_grid_falls_back_to_random() {
    let pool = Pool::new(full_traditional_items(), "FREE");
    let grid = GridSpec::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(6);
    let card = build_card(&pool, grid, "FREE", 1, GenerationMode::Traditional, &mut rng).unwrap();
    assert_eq!(card.cells().len(), 9);
    assert!(card.cells()[4].is_center);
}

#[test]
fn eligibility_is_rederived_per_build() {
    // Same requested mode, different pools: mode must follow the pool, not a
    // remembered flag from the previous generation.
    let grid = GridSpec::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(8);

    let eligible = Pool::new(full_traditional_items(), "FREE");
    let card = build_card(&eligible, grid, "FREE", 1, GenerationMode::Traditional, &mut rng)
        .unwrap();
    assert_eq!(column_of(&card.cells()[0].content), 0);

    let edited = Pool::new(
        (0..80).map(|i| format!("edited-{i}")),
        "FREE",
    );
    let card = build_card(&edited, grid, "FREE", 2, GenerationMode::Traditional, &mut rng)
        .unwrap();
    assert!(card.cells()[0].content.starts_with("edited-"));
}
