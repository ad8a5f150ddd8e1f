/// Number of hand categories.
pub const N_CATEGORIES: usize = 17;

/// A 6-card hand category.
///
/// Variants are declared in priority order, strongest first, so the derived
/// `Ord` ranks `LongRoyalFlush` lowest and `HighCard` highest. Long forms
/// span all six cards, short forms five of them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    LongRoyalFlush = 0,
    LongStraightFlush = 1,
    ShortRoyalFlush = 2,
    FullHotel = 3,
    TwoTriples = 4,
    ShortStraightFlush = 5,
    LongFlush = 6,
    FourOfAKind = 7,
    LongStraight = 8,
    ThreePair = 9,
    FullHouse = 10,
    ShortFlush = 11,
    ShortStraight = 12,
    ThreeOfAKind = 13,
    TwoPair = 14,
    OnePair = 15,
    HighCard = 16,
}

impl Category {
    /// All categories, strongest first.
    pub const fn all() -> [Category; N_CATEGORIES] {
        [
            Category::LongRoyalFlush,
            Category::LongStraightFlush,
            Category::ShortRoyalFlush,
            Category::FullHotel,
            Category::TwoTriples,
            Category::ShortStraightFlush,
            Category::LongFlush,
            Category::FourOfAKind,
            Category::LongStraight,
            Category::ThreePair,
            Category::FullHouse,
            Category::ShortFlush,
            Category::ShortStraight,
            Category::ThreeOfAKind,
            Category::TwoPair,
            Category::OnePair,
            Category::HighCard,
        ]
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Weaker categories a hand holds whenever it holds this one.
    ///
    /// Only direct implications are listed; [`Labels`](super::labels::Labels)
    /// follows them transitively.
    pub const fn implies(&self) -> &'static [Category] {
        match self {
            Category::LongStraightFlush => &[Category::ShortStraightFlush],
            Category::LongFlush => &[Category::ShortFlush],
            Category::LongStraight => &[Category::ShortStraight],
            Category::FourOfAKind => &[
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
            ],
            Category::TwoTriples => &[Category::ThreeOfAKind, Category::OnePair],
            Category::ThreePair => &[Category::TwoPair, Category::OnePair],
            Category::ThreeOfAKind => &[Category::OnePair],
            Category::TwoPair => &[Category::OnePair],
            Category::LongRoyalFlush
            | Category::ShortRoyalFlush
            | Category::FullHotel
            | Category::ShortStraightFlush
            | Category::FullHouse
            | Category::ShortFlush
            | Category::ShortStraight
            | Category::OnePair
            | Category::HighCard => &[],
        }
    }
}

/// usize isomorphism over 0..17
impl From<usize> for Category {
    fn from(n: usize) -> Self {
        Self::all()[n]
    }
}
impl From<Category> for usize {
    fn from(c: Category) -> usize {
        c.index()
    }
}

impl TryFrom<&str> for Category {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid category str: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::LongRoyalFlush => "Long Royal Flush",
                Category::LongStraightFlush => "Long Straight Flush",
                Category::ShortRoyalFlush => "Short Royal Flush",
                Category::FullHotel => "Full Hotel",
                Category::TwoTriples => "Two Triples",
                Category::ShortStraightFlush => "Short Straight Flush",
                Category::LongFlush => "Long Flush",
                Category::FourOfAKind => "Four of a Kind",
                Category::LongStraight => "Long Straight",
                Category::ThreePair => "Three Pair",
                Category::FullHouse => "Full House",
                Category::ShortFlush => "Short Flush",
                Category::ShortStraight => "Short Straight",
                Category::ThreeOfAKind => "Three of a Kind",
                Category::TwoPair => "Two Pair",
                Category::OnePair => "One Pair",
                Category::HighCard => "High Card",
            }
        )
    }
}
