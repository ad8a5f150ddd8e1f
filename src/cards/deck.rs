use super::card::Card;
use super::hand::Hand;
use super::hands::HandIterator;
use super::rank::Rank;
use crate::HAND_SIZE;

/// The cards available to deal from.
///
/// A fresh deck holds all 52 cards, ordered by rank then suit. Cards can be
/// removed to restrict a census to a smaller population, and the remaining
/// cards enumerate into every 6-card [`Hand`] via [`Deck::hands`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// A deck holding only the four cards of each given rank.
    pub fn ranks(ranks: &[Rank]) -> Self {
        Self(Hand::from(
            ranks.iter().map(|r| u64::from(*r)).fold(0u64, |a, b| a | b),
        ))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
    /// The remaining cards in deck order.
    pub fn cards(&self) -> Hand {
        self.0
    }
    /// Lazily enumerates every 6-card combination of the remaining cards.
    pub fn hands(&self) -> HandIterator {
        HandIterator::from((HAND_SIZE, self.0.complement()))
    }

    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rand::random_range(0..n);
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
