use super::Classifier;
use super::Mode;
use super::category::Category;
use super::labels::Labels;
use super::profile::Profile;
use crate::cards::AceLow;
use crate::cards::Hand;
use crate::census::Frequency;

/// Every-category classification.
///
/// Each category is tested on its own and the hand collects all that hold,
/// along with whatever those imply. Multiples are counted inclusively: a
/// rank held four times also counts as a triple and as a pair, which is how
/// a quad plus a pair reaches Full House here.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inclusive;

impl Inclusive {
    pub const ACE: AceLow = AceLow::Unconditional;

    pub fn classify(hand: Hand) -> Labels {
        let ref profile = Profile::from(hand);
        Category::all()
            .into_iter()
            .filter(|c| Self::satisfies(profile, *c))
            .collect()
    }

    fn satisfies(p: &Profile, category: Category) -> bool {
        match category {
            Category::LongRoyalFlush => p.long_royal(),
            Category::LongStraightFlush => p.straight_flush(6, Self::ACE),
            Category::ShortRoyalFlush => p.short_royal(),
            Category::FullHotel => p.apart(4, 2),
            Category::TwoTriples => p.at_least(3) >= 2,
            Category::ShortStraightFlush => p.straight_flush(5, Self::ACE),
            Category::LongFlush => p.flush(6),
            Category::FourOfAKind => p.at_least(4) >= 1,
            Category::LongStraight => p.straight(6, Self::ACE),
            Category::ThreePair => p.at_least(2) >= 3,
            Category::FullHouse => p.apart(3, 2),
            Category::ShortFlush => p.flush(5),
            Category::ShortStraight => p.straight(5, Self::ACE),
            Category::ThreeOfAKind => p.at_least(3) >= 1,
            Category::TwoPair => p.at_least(2) >= 2,
            Category::OnePair => p.at_least(2) >= 1,
            Category::HighCard => true,
        }
    }
}

impl Classifier for Inclusive {
    fn mode(&self) -> Mode {
        Mode::Inclusive
    }
    fn tally(&self, hand: Hand, frequency: &mut Frequency) {
        frequency.witness_all(Self::classify(hand));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn classify(s: &str) -> Vec<Category> {
        Vec::from(Inclusive::classify(Hand::try_from(s).unwrap()))
    }

    #[test]
    fn full_house_collects_its_parts() {
        assert_eq!(
            classify("2h 2d 2c 5s 5d 9c"),
            vec![
                Category::FullHouse,
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ]
        );
    }

    #[test]
    fn long_royal_flush_collects_every_straight_and_flush() {
        assert_eq!(
            classify("9s Ts Js Qs Ks As"),
            vec![
                Category::LongRoyalFlush,
                Category::LongStraightFlush,
                Category::ShortRoyalFlush,
                Category::ShortStraightFlush,
                Category::LongFlush,
                Category::LongStraight,
                Category::ShortFlush,
                Category::ShortStraight,
                Category::HighCard,
            ]
        );
    }

    #[test]
    fn four_of_a_kind_forces_two_pair() {
        assert_eq!(
            classify("7c 7d 7h 7s Kc 2d"),
            vec![
                Category::FourOfAKind,
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ]
        );
    }

    #[test]
    fn full_hotel_is_also_a_full_house() {
        assert_eq!(
            classify("7c 7d 7h 7s Kc Kd"),
            vec![
                Category::FullHotel,
                Category::FourOfAKind,
                Category::FullHouse,
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ]
        );
    }

    #[test]
    fn two_triples_is_also_a_full_house() {
        assert_eq!(
            classify("7c 7d 7h Kc Kd Ks"),
            vec![
                Category::TwoTriples,
                Category::FullHouse,
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ]
        );
    }

    #[test]
    fn three_pair() {
        assert_eq!(
            classify("3c 3d 8h 8s Qc Qd"),
            vec![
                Category::ThreePair,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ]
        );
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(
            classify("Ad 2d 3d 4d 5d 9c"),
            vec![
                Category::ShortStraightFlush,
                Category::ShortFlush,
                Category::ShortStraight,
                Category::HighCard,
            ]
        );
    }

    #[test]
    fn straight_with_a_pair() {
        assert_eq!(
            classify("Tc Jd Qh Ks Ac Ad"),
            vec![Category::ShortStraight, Category::OnePair, Category::HighCard]
        );
    }

    #[test]
    fn high_card_alone() {
        assert_eq!(classify("2c 4d 6h 8s Tc Qd"), vec![Category::HighCard]);
    }

    #[test]
    fn hierarchy_is_closed() {
        let pairs = [
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::ThreePair,
            Category::TwoTriples,
            Category::FourOfAKind,
            Category::FullHotel,
        ];
        for _ in 0..4096 {
            let labels = Inclusive::classify(Hand::random());
            assert!(labels.contains(Category::HighCard));
            if pairs.iter().any(|c| labels.contains(*c)) {
                assert!(labels.contains(Category::OnePair));
            }
        }
    }

    #[test]
    fn contains_the_exclusive_category() {
        for _ in 0..4096 {
            let hand = Hand::random();
            let best = crate::classify::Exclusive::classify(hand);
            assert!(Inclusive::classify(hand).contains(best), "{}", hand);
        }
    }

    #[test]
    fn tally_counts_every_label() {
        let ref mut frequency = Frequency::default();
        Inclusive.tally(Hand::try_from("2h 2d 2c 5s 5d 9c").unwrap(), frequency);
        assert_eq!(frequency.hands(), 1);
        assert_eq!(frequency.labels(), 5);
        assert_eq!(frequency.get(Category::OnePair), 1);
        assert_eq!(frequency.get(Category::FourOfAKind), 0);
    }
}
