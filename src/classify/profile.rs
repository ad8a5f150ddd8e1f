use crate::cards::AceLow;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::cards::Values;

/// Nine through Ace as a u16 Rank mask
const ROYAL_LONG: u16 = 0b_1111110000000;
/// Ten through Ace as a u16 Rank mask
const ROYAL_SHORT: u16 = 0b_1111100000000;

/// Rank and suit groupings of one hand, recomputed for every hand.
///
/// Both classifiers ask the same questions of a hand (how many ranks repeat
/// how often, how many cards share a suit, which ranks each suit holds) and
/// differ only in thresholds and ace handling. The answers live here.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    hand: Hand,
    ranks: [u8; 13],
    suits: [u8; 4],
}

impl From<Hand> for Profile {
    fn from(hand: Hand) -> Self {
        Self {
            hand,
            ranks: Rank::all().map(|r| hand.rank_count(&r)),
            suits: Suit::all().map(|s| hand.of(&s).size() as u8),
        }
    }
}

impl Profile {
    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// ranks appearing exactly n times
    pub fn exactly(&self, n: u8) -> usize {
        self.ranks.iter().filter(|&&k| k == n).count()
    }
    /// ranks appearing n or more times
    pub fn at_least(&self, n: u8) -> usize {
        self.ranks.iter().filter(|&&k| k >= n).count()
    }
    /// some rank appears at least `n` times and a different rank at least `m` times
    pub fn apart(&self, n: u8, m: u8) -> bool {
        self.ranks.iter().enumerate().any(|(i, &a)| {
            a >= n
                && self
                    .ranks
                    .iter()
                    .enumerate()
                    .any(|(j, &b)| i != j && b >= m)
        })
    }

    /// some suit holds at least n cards
    pub fn flush(&self, n: u8) -> bool {
        self.suits.iter().any(|&k| k >= n)
    }
    /// the whole hand's rank values contain a run of n
    pub fn straight(&self, n: usize, ace: AceLow) -> bool {
        Values::from((self.hand, ace)).has_run(n)
    }
    /// some suit's rank values contain a run of n
    pub fn straight_flush(&self, n: usize, ace: AceLow) -> bool {
        Suit::all()
            .iter()
            .map(|s| self.hand.of(s))
            .filter(|h| h.size() >= n)
            .any(|h| Values::from((h, ace)).has_run(n))
    }
    /// some suit holds Nine through Ace
    pub fn long_royal(&self) -> bool {
        self.royal(ROYAL_LONG)
    }
    /// some suit holds Ten through Ace
    pub fn short_royal(&self) -> bool {
        self.royal(ROYAL_SHORT)
    }
    fn royal(&self, mask: u16) -> bool {
        Suit::all()
            .iter()
            .map(|s| u16::from(self.hand.of(s)))
            .any(|ranks| ranks & mask == mask)
    }
}
