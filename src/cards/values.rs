use super::hand::Hand;

/// How an Ace contributes to straights.
///
/// An Ace always counts as 14. Whether it may also sit below the Two as 1
/// depends on which census is asking:
///
/// - `Conditional` adds 1 only when some card from Two through Five is
///   visible alongside the Ace.
/// - `Unconditional` adds 1 whenever an Ace is present.
///
/// Any run through 1 must also pass through 2, so both rules agree on every
/// run the [`Values::has_run`] detector can find. They stay separate so each
/// classifier names the rule it was defined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AceLow {
    Conditional,
    Unconditional,
}

impl AceLow {
    /// Two, Three, Four, Five as a u16 Rank mask
    const WHEEL: u16 = 0b_0000000001111;
    /// Ace as a u16 Rank mask
    const ACE: u16 = 0b_1000000000000;

    fn applies(&self, ranks: u16) -> bool {
        match self {
            AceLow::Unconditional => ranks & Self::ACE != 0,
            AceLow::Conditional => ranks & Self::ACE != 0 && ranks & Self::WHEEL != 0,
        }
    }
}

/// A duplicate-free set of numeric rank values in `1..=14`.
///
/// Bit `v` is set when value `v` is present, so the set is always ordered
/// and iteration runs low to high.
/// xx A K Q J T 9 8 7 6 5 4 3 2 A x
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Values(u16);

impl Values {
    const MASK: u16 = 0b_0111111111111110;

    pub fn contains(&self, value: u8) -> bool {
        value < 16 && self.0 & (1 << value) != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Does the set hold `size` or more strictly consecutive values?
    ///
    /// Each shift-and-mask keeps only the bits that start a run one longer
    /// than before, so after `size - 1` rounds any surviving bit starts a run
    /// of at least `size`.
    pub fn has_run(&self, size: usize) -> bool {
        if size == 0 {
            return true;
        }
        if self.size() < size {
            return false;
        }
        let mut bits = self.0;
        for _ in 1..size {
            bits &= bits >> 1;
        }
        bits != 0
    }
}

/// normalize the ranks present in a Hand (or a single suit of it)
impl From<(Hand, AceLow)> for Values {
    fn from((hand, ace): (Hand, AceLow)) -> Self {
        let ranks = u16::from(hand);
        let low = if ace.applies(ranks) { 1 << 1 } else { 0 };
        Self((ranks << 2) | low)
    }
}

/// explicit sets of values, out-of-range entries dropped
impl FromIterator<u8> for Values {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|v| *v < 16)
                .map(|v| 1u16 << v)
                .fold(0u16, |a, b| a | b)
                & Self::MASK,
        )
    }
}

impl From<Values> for Vec<u8> {
    fn from(values: Values) -> Self {
        (1..=14).filter(|v| values.contains(*v)).collect()
    }
}
