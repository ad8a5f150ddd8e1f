use super::hand::Hand;

/// Iterates over every k-card Hand drawable from the cards outside a mask.
///
/// Only the current bitstring is held, so the full population is never
/// materialized. Combinations are walked in a compact index space over the
/// unmasked cards (Gosper's hack: the next larger integer with the same
/// number of set bits) and then scattered onto real card positions, so masked
/// cards cost nothing to skip. The order is ascending as u64, which makes
/// every enumeration restartable and reproducible.
#[derive(Debug, Clone)]
pub struct HandIterator {
    next: u64,
    free: [u8; 52],
    n: usize,
    k: usize,
    remaining: usize,
}

impl HandIterator {
    /// C(n, k) for n unmasked cards and k cards per hand.
    pub fn combinations(&self) -> usize {
        Self::choose(self.n, self.k)
    }

    fn choose(n: usize, k: usize) -> usize {
        if k > n {
            0
        } else {
            (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
        }
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >> self.n != 0
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    /// scatter the compact combination onto unmasked card positions
    fn current(&self) -> Hand {
        let mut bits = self.next;
        let mut hand = 0u64;
        while bits > 0 {
            let i = bits.trailing_zeros() as usize;
            hand |= 1 << self.free[i];
            bits &= bits - 1;
        }
        Hand::from(hand)
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.current();
            self.next = self.permute();
            self.remaining = self.remaining.saturating_sub(1);
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for HandIterator {}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((k, mask): (usize, Hand)) -> Self {
        let mask = u64::from(mask);
        let mut free = [0u8; 52];
        let mut n = 0;
        for card in (0..52u8).filter(|c| mask & (1 << c) == 0) {
            free[n] = card;
            n += 1;
        }
        let next = match k {
            0 => 0,
            k if k > n => 0,
            k => (1 << k) - 1,
        };
        let remaining = match next {
            0 => 0,
            _ => Self::choose(n, k),
        };
        Self {
            next,
            free,
            n,
            k,
            remaining,
        }
    }
}
