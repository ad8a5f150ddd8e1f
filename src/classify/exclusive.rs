use super::Classifier;
use super::Mode;
use super::category::Category;
use super::profile::Profile;
use crate::cards::AceLow;
use crate::cards::Hand;
use crate::census::Frequency;

/// Best-category classification.
///
/// Categories are tried strongest first and the first one the hand
/// satisfies wins, so every hand lands in exactly one category. Multiples
/// are counted exactly: a rank held four times is a quad, not also a triple
/// or a pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct Exclusive;

impl Exclusive {
    pub const ACE: AceLow = AceLow::Conditional;

    pub fn classify(hand: Hand) -> Category {
        let ref profile = Profile::from(hand);
        Category::all()
            .into_iter()
            .find(|c| Self::satisfies(profile, *c))
            .unwrap_or(Category::HighCard)
    }

    fn satisfies(p: &Profile, category: Category) -> bool {
        match category {
            Category::LongRoyalFlush => p.long_royal(),
            Category::LongStraightFlush => p.straight_flush(6, Self::ACE),
            Category::ShortRoyalFlush => p.short_royal(),
            Category::FullHotel => p.exactly(4) >= 1 && p.exactly(2) >= 1,
            Category::TwoTriples => p.exactly(3) >= 2,
            Category::ShortStraightFlush => p.straight_flush(5, Self::ACE),
            Category::LongFlush => p.flush(6),
            Category::FourOfAKind => p.exactly(4) >= 1,
            Category::LongStraight => p.straight(6, Self::ACE),
            Category::ThreePair => p.exactly(2) >= 3,
            Category::FullHouse => p.exactly(3) >= 1 && p.exactly(2) >= 1,
            Category::ShortFlush => p.flush(5),
            Category::ShortStraight => p.straight(5, Self::ACE),
            Category::ThreeOfAKind => p.exactly(3) >= 1,
            Category::TwoPair => p.exactly(2) >= 2,
            Category::OnePair => p.exactly(2) == 1,
            Category::HighCard => true,
        }
    }
}

impl Classifier for Exclusive {
    fn mode(&self) -> Mode {
        Mode::Exclusive
    }
    fn tally(&self, hand: Hand, frequency: &mut Frequency) {
        frequency.witness(Self::classify(hand));
    }
}
