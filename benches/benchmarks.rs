criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_hand_profile,
        sampling_exclusive_classification,
        sampling_inclusive_classification,
        exhausting_broadway_hands,
        counting_exclusive_batch,
        counting_broadway_exclusive,
        counting_broadway_inclusive,
}

fn sampling_hand_profile(c: &mut criterion::Criterion) {
    c.bench_function("profile a 6-card Hand", |b| {
        let hand = Hand::random();
        b.iter(|| Profile::from(hand))
    });
}

fn sampling_exclusive_classification(c: &mut criterion::Criterion) {
    c.bench_function("classify a 6-card Hand (exclusive)", |b| {
        let hand = Hand::random();
        b.iter(|| Exclusive::classify(hand))
    });
}

fn sampling_inclusive_classification(c: &mut criterion::Criterion) {
    c.bench_function("classify a 6-card Hand (inclusive)", |b| {
        let hand = Hand::random();
        b.iter(|| Inclusive::classify(hand))
    });
}

fn exhausting_broadway_hands(c: &mut criterion::Criterion) {
    let deck = broadway();
    c.bench_function("exhaust all Broadway Hands", |b| {
        b.iter(|| deck.hands().count())
    });
}

fn counting_exclusive_batch(c: &mut criterion::Criterion) {
    let batch = (0..BATCH_SIZE).map(|_| Hand::random()).collect::<Vec<_>>();
    c.bench_function("count a batch of random Hands (exclusive)", |b| {
        b.iter(|| Exclusive.count(&batch))
    });
}

fn counting_broadway_exclusive(c: &mut criterion::Criterion) {
    let census = Census::default().within(broadway());
    c.bench_function("census the Broadway deck (exclusive)", |b| {
        b.iter(|| census.run(Mode::Exclusive))
    });
}

fn counting_broadway_inclusive(c: &mut criterion::Criterion) {
    let census = Census::default().within(broadway());
    c.bench_function("census the Broadway deck (inclusive)", |b| {
        b.iter(|| census.run(Mode::Inclusive))
    });
}

fn broadway() -> Deck {
    Deck::ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace])
}

use sixcard::Arbitrary;
use sixcard::BATCH_SIZE;
use sixcard::cards::Deck;
use sixcard::cards::Hand;
use sixcard::cards::Rank;
use sixcard::census::Census;
use sixcard::classify::Classifier;
use sixcard::classify::Exclusive;
use sixcard::classify::Inclusive;
use sixcard::classify::Mode;
use sixcard::classify::Profile;
