use super::card::Card;
use super::deck::Deck;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::HAND_SIZE;

/// Hand represents an unordered set of Cards as a 52-bit bitmask.
///
/// A single word holds the whole set independent of its size, so building,
/// copying and discarding one per combination costs no allocation. Each bit
/// is one card in [`Card`]'s `u8` encoding.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    /// the subset of cards belonging to one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// how many cards of this rank the hand holds, 0..=4
    pub fn rank_count(&self, rank: &Rank) -> u8 {
        (self.0 & u64::from(*rank)).count_ones() as u8
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000000000110000001000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// each nibble collapses to one bit: does the hand hold any card of that rank
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u16, |ranks, r| ranks | (((x >> (r * 4)) & 1) as u16) << r)
    }
}

/// str isomorphism
/// whitespace-separated cards, duplicates rejected
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .try_fold(Hand::empty(), |hand, card| {
                let card = card?;
                match hand.contains(&card) {
                    true => Err(format!("duplicate card: {}", card)),
                    false => Ok(Hand::add(hand, Hand::from(card))),
                }
            })
    }
}

/// a uniformly random 6-card hand
impl Arbitrary for Hand {
    fn random() -> Self {
        let mut deck = Deck::new();
        (0..HAND_SIZE)
            .map(|_| deck.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = (*self).map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
