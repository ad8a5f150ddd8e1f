use super::batches::Batches;
use super::config::Config;
use super::error::CensusError;
use super::frequency::Frequency;
use crate::PROGRESS_INTERVAL;
use crate::cards::Deck;
use crate::classify::Classifier;
use crate::classify::Exclusive;
use crate::classify::Inclusive;
use crate::classify::Mode;
use rayon::iter::ParallelBridge;
use rayon::iter::ParallelIterator;
use std::sync::mpsc;
use std::time::Instant;

/// Enumerate, classify, and tally every 6-card hand of a deck.
///
/// Batches are drawn lazily from the deck's [`HandIterator`] and classified
/// on a dedicated rayon pool of `workers` threads. Each batch produces its
/// own [`Frequency`], which is sent down a channel to the calling thread,
/// the only owner of the running total. A worker panic or a total that does
/// not cover every enumerated hand fails the whole run.
///
/// [`HandIterator`]: crate::cards::HandIterator
#[derive(Debug, Clone, Copy, Default)]
pub struct Census {
    config: Config,
    deck: Deck,
}

impl From<Config> for Census {
    fn from(config: Config) -> Self {
        Self {
            config,
            deck: Deck::new(),
        }
    }
}

impl Census {
    /// Restrict the census to the hands drawable from `deck`.
    pub fn within(self, deck: Deck) -> Self {
        Self { deck, ..self }
    }
    pub fn config(&self) -> Config {
        self.config
    }
    /// Number of hands this census will classify.
    pub fn population(&self) -> usize {
        self.deck.hands().len()
    }
    /// The batches a run would hand out, in enumeration order.
    pub fn batches(&self) -> Batches {
        Batches::from((self.deck.hands(), self.config.batch()))
    }

    pub fn run(&self, mode: Mode) -> Result<Frequency, CensusError> {
        match mode {
            Mode::Exclusive => self.tally(&Exclusive),
            Mode::Inclusive => self.tally(&Inclusive),
        }
    }

    pub fn tally<C>(&self, classifier: &C) -> Result<Frequency, CensusError>
    where
        C: Classifier,
    {
        let batches = self.batches();
        let n_batches = batches.remaining();
        let expected = self.population() as u64;
        let check = (n_batches / PROGRESS_INTERVAL).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers())
            .thread_name(|i| format!("census-{}", i))
            .build()?;
        log::info!(
            "{:<32}{:<32}",
            format!("census {}", classifier.mode()),
            format!("{} hands, {}", expected, self.config)
        );
        let start = Instant::now();
        let (tx, rx) = mpsc::channel::<Frequency>();
        std::thread::scope(|scope| {
            let workers = scope.spawn(move || {
                pool.install(|| {
                    batches
                        .par_bridge()
                        .map(|batch| classifier.count(&batch))
                        .try_for_each_with(tx, |tx, partial| tx.send(partial))
                })
            });
            let mut total = Frequency::default();
            for (i, partial) in rx.into_iter().enumerate() {
                total.absorb(&partial);
                if (i + 1) % check == 0 {
                    log::debug!(
                        "{:<32}{:<32}",
                        format!("merged {:>8} / {}", i + 1, n_batches),
                        format!("{:6.2}%", (i + 1) as f32 / n_batches as f32 * 100.0)
                    );
                }
            }
            match workers.join() {
                Err(_) => Err(CensusError::Worker),
                Ok(Err(_)) => Err(CensusError::Disconnected),
                Ok(Ok(())) if total.hands() != expected => Err(CensusError::Incomplete {
                    expected,
                    actual: total.hands(),
                }),
                Ok(Ok(())) => Ok(total),
            }
        })
        .inspect(|total| {
            log::info!(
                "{:<32}{:<32}",
                format!("census {} complete", classifier.mode()),
                format!("{} labels in {:.2?}", total.labels(), start.elapsed())
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N_HANDS;
    use crate::cards::Hand;
    use crate::cards::Rank;
    use crate::census::reference;
    use crate::classify::Category;
    use rand::seq::SliceRandom;

    /// Ten through Ace, 20 cards, 38,760 hands
    fn broadway() -> Census {
        let deck = Deck::ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
        Census::from(Config::new(100, 4).unwrap()).within(deck)
    }
    /// Ace through Five, 20 cards, 38,760 hands
    fn wheel() -> Census {
        let deck = Deck::ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        Census::from(Config::new(100, 4).unwrap()).within(deck)
    }

    fn assert_counts(frequency: &Frequency, expected: &[(Category, u64)]) {
        assert_eq!(frequency.discrepancies(expected), vec![]);
    }

    #[test]
    fn broadway_exclusive() {
        let frequency = broadway().run(Mode::Exclusive).unwrap();
        assert_eq!(frequency.hands(), 38_760);
        assert_eq!(frequency.labels(), 38_760);
        assert_counts(
            &frequency,
            &[
                (Category::ShortRoyalFlush, 60),
                (Category::FullHotel, 120),
                (Category::TwoTriples, 160),
                (Category::FourOfAKind, 480),
                (Category::ThreePair, 2_160),
                (Category::FullHouse, 5_760),
                (Category::ShortStraight, 7_620),
                (Category::ThreeOfAKind, 5_120),
                (Category::TwoPair, 17_280),
            ],
        );
    }

    #[test]
    fn broadway_inclusive() {
        let frequency = broadway().run(Mode::Inclusive).unwrap();
        assert_eq!(frequency.hands(), 38_760);
        assert_counts(
            &frequency,
            &[
                (Category::ShortRoyalFlush, 60),
                (Category::FullHotel, 120),
                (Category::TwoTriples, 160),
                (Category::ShortStraightFlush, 60),
                (Category::FourOfAKind, 600),
                (Category::ThreePair, 2_160),
                (Category::FullHouse, 6_040),
                (Category::ShortFlush, 60),
                (Category::ShortStraight, 7_680),
                (Category::ThreeOfAKind, 11_640),
                (Category::TwoPair, 25_960),
                (Category::OnePair, 38_760),
                (Category::HighCard, 38_760),
            ],
        );
    }

    #[test]
    fn wheel_exclusive() {
        let frequency = wheel().run(Mode::Exclusive).unwrap();
        assert_counts(
            &frequency,
            &[
                (Category::FullHotel, 120),
                (Category::TwoTriples, 160),
                (Category::ShortStraightFlush, 60),
                (Category::FourOfAKind, 480),
                (Category::ThreePair, 2_160),
                (Category::FullHouse, 5_760),
                (Category::ShortStraight, 7_620),
                (Category::ThreeOfAKind, 5_120),
                (Category::TwoPair, 17_280),
            ],
        );
    }

    #[test]
    fn wheel_inclusive() {
        let frequency = wheel().run(Mode::Inclusive).unwrap();
        assert_counts(
            &frequency,
            &[
                (Category::FullHotel, 120),
                (Category::TwoTriples, 160),
                (Category::ShortStraightFlush, 60),
                (Category::FourOfAKind, 600),
                (Category::ThreePair, 2_160),
                (Category::FullHouse, 6_040),
                (Category::ShortFlush, 60),
                (Category::ShortStraight, 7_680),
                (Category::ThreeOfAKind, 11_640),
                (Category::TwoPair, 25_960),
                (Category::OnePair, 38_760),
                (Category::HighCard, 38_760),
            ],
        );
    }

    #[test]
    fn partitioning_does_not_change_counts() {
        let deck = Deck::ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
        for mode in Mode::all() {
            let baseline = broadway().run(mode).unwrap();
            for (batch, workers) in [(1, 1), (7, 3), (100, 16), (5_000, 2), (50_000, 8)] {
                let census = Census::from(Config::new(batch, workers).unwrap()).within(deck);
                assert_eq!(census.run(mode).unwrap(), baseline, "{} {}", batch, workers);
            }
        }
    }

    #[test]
    fn merge_order_does_not_change_counts() {
        let census = broadway();
        let baseline = census.run(Mode::Inclusive).unwrap();
        let mut partials = census
            .batches()
            .map(|batch| Inclusive.count(&batch))
            .collect::<Vec<_>>();
        let mut rng = rand::rng();
        for _ in 0..8 {
            partials.shuffle(&mut rng);
            assert_eq!(partials.iter().copied().sum::<Frequency>(), baseline);
        }
    }

    #[test]
    fn inclusive_dominates_exclusive() {
        let census = broadway();
        let exclusive = census.run(Mode::Exclusive).unwrap();
        let inclusive = census.run(Mode::Inclusive).unwrap();
        for category in Category::all() {
            assert!(inclusive[category] >= exclusive[category]);
            for implied in category.implies() {
                assert!(inclusive[*implied] >= inclusive[category]);
            }
        }
    }

    #[test]
    fn tiny_decks() {
        let census = Census::default().within(Deck::ranks(&[Rank::Two]));
        assert_eq!(census.population(), 0);
        assert_eq!(census.run(Mode::Exclusive).unwrap(), Frequency::default());
        let census = Census::default().within(Deck::ranks(&[Rank::Two, Rank::Three]));
        assert_eq!(census.population(), 28);
        let frequency = census.run(Mode::Exclusive).unwrap();
        assert_eq!(frequency[Category::FullHotel], 12);
        assert_eq!(frequency[Category::TwoTriples], 16);
    }

    struct Faulty;
    impl Classifier for Faulty {
        fn mode(&self) -> Mode {
            Mode::Exclusive
        }
        fn tally(&self, hand: Hand, frequency: &mut Frequency) {
            if hand == Hand::try_from("Tc Td Th Ts Jc Jd").unwrap() {
                panic!("worker failure");
            }
            Exclusive.tally(hand, frequency);
        }
    }

    struct Lossy;
    impl Classifier for Lossy {
        fn mode(&self) -> Mode {
            Mode::Exclusive
        }
        fn tally(&self, hand: Hand, frequency: &mut Frequency) {
            if hand != Hand::try_from("Tc Td Th Ts Jc Jd").unwrap() {
                Exclusive.tally(hand, frequency);
            }
        }
    }

    #[test]
    fn worker_failure_aborts_the_run() {
        assert!(matches!(broadway().tally(&Faulty), Err(CensusError::Worker)));
    }

    #[test]
    fn dropped_hands_abort_the_run() {
        assert!(matches!(
            broadway().tally(&Lossy),
            Err(CensusError::Incomplete {
                expected: 38_760,
                actual: 38_759
            })
        ));
    }

    #[test]
    #[ignore]
    fn full_deck_exclusive() {
        let frequency = Census::default().run(Mode::Exclusive).unwrap();
        assert_eq!(frequency.hands(), N_HANDS as u64);
        assert_eq!(frequency.labels(), N_HANDS as u64);
        assert_eq!(frequency[Category::FourOfAKind], 13_728);
        assert_eq!(frequency[Category::LongRoyalFlush], 4);
        assert_eq!(frequency[Category::HighCard], 6_612_900);
        assert_counts(&frequency, &reference::SIX_CARD);
    }

    #[test]
    #[ignore]
    fn full_deck_inclusive() {
        let frequency = Census::default().run(Mode::Inclusive).unwrap();
        assert_eq!(frequency.hands(), N_HANDS as u64);
        assert_eq!(frequency.labels(), 38_181_172);
        assert_counts(
            &frequency,
            &[
                (Category::LongRoyalFlush, 4),
                (Category::LongStraightFlush, 36),
                (Category::ShortRoyalFlush, 188),
                (Category::FullHotel, 936),
                (Category::TwoTriples, 1_248),
                (Category::ShortStraightFlush, 1_844),
                (Category::LongFlush, 6_864),
                (Category::FourOfAKind, 14_664),
                (Category::LongStraight, 36_864),
                (Category::ThreePair, 61_776),
                (Category::FullHouse, 166_920),
                (Category::ShortFlush, 207_636),
                (Category::ShortStraight, 367_616),
                (Category::ThreeOfAKind, 912_808),
                (Category::TwoPair, 2_713_464),
                (Category::OnePair, 13_329_784),
                (Category::HighCard, N_HANDS as u64),
            ],
        );
    }
}
