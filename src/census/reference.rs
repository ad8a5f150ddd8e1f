use crate::classify::Category;

/// Published exclusive-mode counts over all C(52, 6) hands, most frequent first.
pub const SIX_CARD: [(Category, u64); 17] = [
    (Category::OnePair, 9_730_740),
    (Category::HighCard, 6_612_900),
    (Category::TwoPair, 2_471_040),
    (Category::ThreeOfAKind, 732_160),
    (Category::ShortStraight, 325_440),
    (Category::ShortFlush, 198_780),
    (Category::FullHouse, 164_736),
    (Category::ThreePair, 61_776),
    (Category::LongStraight, 36_612),
    (Category::FourOfAKind, 13_728),
    (Category::LongFlush, 6_580),
    (Category::ShortStraightFlush, 1_624),
    (Category::TwoTriples, 1_248),
    (Category::FullHotel, 936),
    (Category::ShortRoyalFlush, 184),
    (Category::LongStraightFlush, 32),
    (Category::LongRoyalFlush, 4),
];
