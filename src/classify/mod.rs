//! Hand classification under two semantics.
//!
//! [`Exclusive`] assigns each hand its single strongest [`Category`];
//! [`Inclusive`] assigns the full [`Labels`] set. Both read the same
//! per-hand [`Profile`] and differ in thresholds and ace handling.
pub mod category;
pub use category::*;

pub mod exclusive;
pub use exclusive::*;

pub mod inclusive;
pub use inclusive::*;

pub mod labels;
pub use labels::*;

pub mod mode;
pub use mode::*;

pub mod profile;
pub use profile::*;

use crate::cards::Hand;
use crate::census::Frequency;

/// A pure, per-hand classification that can be shared across workers.
pub trait Classifier: Sync {
    fn mode(&self) -> Mode;
    /// Record one hand's classification.
    fn tally(&self, hand: Hand, frequency: &mut Frequency);
    /// Classify a batch into a fresh, batch-local tally.
    fn count(&self, batch: &[Hand]) -> Frequency {
        let mut frequency = Frequency::default();
        for hand in batch {
            self.tally(*hand, &mut frequency);
        }
        frequency
    }
}
