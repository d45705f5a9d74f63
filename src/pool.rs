//! Item pool and the traditional-mode column partition.

use crate::config::{
    traditional_range, TRADITIONAL_LETTERS, TRADITIONAL_POOL_SIZE,
};

/// User-supplied item pool. The configured free-cell text never lives in the
/// pool; it is reinserted structurally at the center by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    items: Vec<String>,
}

impl Pool {
    /// Build a pool from raw items, dropping any occurrence of `free_text`.
    /// Duplicates are kept as distinct slots.
    pub fn new<I>(items: I, free_text: &str) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let items = items.into_iter().filter(|v| v != free_text).collect();
        Pool { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Partition into the five B-I-N-G-O column buckets. Returns `None`
    /// unless the pool holds exactly 75 items and every item is a column
    /// letter followed by a number inside that letter's range (B:1-15,
    /// I:16-30, N:31-45, G:46-60, O:61-75).
    ///
    /// Eligibility is re-derived from the current pool contents on every
    /// call; nothing is cached, so editing the pool between generations
    /// cannot leave a stale traditional flag behind.
    pub fn traditional_buckets(&self) -> Option<[Vec<&str>; 5]> {
        if self.items.len() != TRADITIONAL_POOL_SIZE {
            return None;
        }
        let mut buckets: [Vec<&str>; 5] = Default::default();
        for item in &self.items {
            let column = traditional_column(item)?;
            buckets[column].push(item.as_str());
        }
        Some(buckets)
    }
}

/// Column index (0..5) of a correctly labeled traditional item, or `None`
/// if the label does not parse or the number is out of the letter's range.
fn traditional_column(item: &str) -> Option<usize> {
    let mut chars = item.chars();
    let letter = chars.next()?;
    let column = TRADITIONAL_LETTERS.iter().position(|&l| l == letter)?;
    let number: u32 = chars.as_str().parse().ok()?;
    let (lo, hi) = traditional_range(column);
    (lo..=hi).contains(&number).then_some(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_traditional_pool() -> Vec<String> {
        (0..5)
            .flat_map(|c| {
                let (lo, hi) = traditional_range(c);
                (lo..=hi).map(move |n| format!("{}{}", TRADITIONAL_LETTERS[c], n))
            })
            .collect()
    }

    #[test]
    fn free_text_is_excluded() {
        let pool = Pool::new(
            vec!["A".to_string(), "FREE".to_string(), "B".to_string()],
            "FREE",
        );
        assert_eq!(pool.items(), ["A", "B"]);
    }

    #[test]
    fn traditional_buckets_from_full_pool() {
        let pool = Pool::new(full_traditional_pool(), "FREE");
        let buckets = pool.traditional_buckets().unwrap();
        for bucket in &buckets {
            assert_eq!(bucket.len(), 15);
        }
        assert!(buckets[0].contains(&"B1"));
        assert!(buckets[4].contains(&"O75"));
    }

    #[test]
    fn wrong_count_disables_traditional() {
        let mut items = full_traditional_pool();
        items.pop();
        let pool = Pool::new(items, "FREE");
        assert!(pool.traditional_buckets().is_none());
    }

    #[test]
    fn out_of_range_label_disables_traditional() {
        let mut items = full_traditional_pool();
        items[0] = "B16".to_string(); // B range ends at 15
        let pool = Pool::new(items, "FREE");
        assert!(pool.traditional_buckets().is_none());
    }

    #[test]
    fn unlabeled_item_disables_traditional() {
        let mut items = full_traditional_pool();
        items[40] = "Cat".to_string();
        let pool = Pool::new(items, "FREE");
        assert!(pool.traditional_buckets().is_none());
    }
}
