//! Caller draw engine: without-replacement draws over a loaded item list.

use rand::Rng;

/// Stateful draw-without-replacement over a caller list.
///
/// `remaining` and `drawn` always partition the originally loaded list; no
/// draw or reset can duplicate or lose an item. The "spin the wheel"
/// presentation around this is cosmetic; the engine is a single uniform
/// index pick per draw. Session-scoped: not for sharing across concurrent
/// callers without external serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller {
    remaining: Vec<String>,
    drawn: Vec<String>,
}

impl Caller {
    /// Load a caller list, moving from idle to active with everything
    /// remaining and nothing drawn.
    pub fn load(items: &[String]) -> Self {
        Caller {
            remaining: items.to_vec(),
            drawn: Vec::new(),
        }
    }

    /// Items not yet drawn, in load order.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Items drawn so far, most recent first.
    pub fn drawn(&self) -> &[String] {
        &self.drawn
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Draw one item uniformly at random from the remaining set, moving it
    /// to the front of `drawn` and returning it. Returns `None` without
    /// mutating anything when the remaining set is empty; the UI disables
    /// drawing then.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<String> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        let item = self.remaining.remove(index);
        self.drawn.insert(0, item.clone());
        Some(item)
    }

    /// Return every drawn item to the remaining set and clear the draw
    /// history. The resulting order (old remaining, then drawn) carries no
    /// meaning since draws pick uniformly, but the set union is exact.
    pub fn reset(&mut self) {
        self.remaining.append(&mut self.drawn);
    }
}
