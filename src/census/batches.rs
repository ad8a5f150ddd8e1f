use crate::cards::Hand;
use crate::cards::HandIterator;

/// Chops a lazy hand sequence into owned, fixed-size batches.
///
/// Only one batch exists at a time per consumer; the last may be short.
#[derive(Debug, Clone)]
pub struct Batches {
    hands: HandIterator,
    size: usize,
}

impl Batches {
    /// Number of batches remaining, counting a short final batch.
    pub fn remaining(&self) -> usize {
        self.hands.len().div_ceil(self.size)
    }
}

impl From<(HandIterator, usize)> for Batches {
    fn from((hands, size): (HandIterator, usize)) -> Self {
        debug_assert!(size > 0);
        Self { hands, size }
    }
}

impl Iterator for Batches {
    type Item = Vec<Hand>;
    fn next(&mut self) -> Option<Self::Item> {
        let batch = self.hands.by_ref().take(self.size).collect::<Vec<_>>();
        if batch.is_empty() { None } else { Some(batch) }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}
