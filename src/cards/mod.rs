//! Cards, hands, and the deck they are drawn from.
//!
//! - [`Card`]: one card as a `(Rank, Suit)` pair encoded in a byte
//! - [`Hand`]: an unordered set of cards as a 64-bit bitmask
//! - [`HandIterator`]: lazy enumeration of every k-card hand under a mask
//! - [`Deck`]: the cards available to a census
//! - [`Values`]: numeric rank values with the Ace's dual identity, see [`AceLow`]
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod values;
pub use values::*;
