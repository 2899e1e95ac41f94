mod pairs;

use log::debug;
use rand::Rng;

use crate::domain::{Choice, Outcome, Pair, SimpleScore};
use crate::ledger::Ledger;

pub use pairs::{enumerate_pairs, pair_count, shuffled_pairs};

/// Walks a fixed, shuffled order of all item pairs
///
/// The cursor counts resolved pairs. It only moves forward; `reset` is the
/// single way back to the start, and it empties the ledger in the same call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    num_items: usize,
    pairs: Vec<Pair>,
    cursor: usize,
}

impl Scheduler {
    pub fn new<R: Rng + ?Sized>(num_items: usize, rng: &mut R) -> Self {
        Self {
            num_items,
            pairs: shuffled_pairs(num_items, rng),
            cursor: 0,
        }
    }

    /// Rehydrates a previously persisted order; callers validate the parts first
    pub fn from_parts(num_items: usize, pairs: Vec<Pair>, cursor: usize) -> Self {
        assert!(cursor <= pairs.len(), "cursor {} past end of {} pairs", cursor, pairs.len());
        Self {
            num_items,
            pairs,
            cursor,
        }
    }

    pub fn current(&self) -> Option<Pair> {
        self.pairs.get(self.cursor).copied()
    }

    /// Auto-resolves the current pair when the simple scores already differ
    /// by more than `threshold`, recording a win for the higher-scored item
    pub fn resolve_skip(&mut self, ledger: &mut Ledger, threshold: SimpleScore) -> Option<Outcome> {
        let pair = self.current()?;
        let score_a = ledger.score(pair.first);
        let score_b = ledger.score(pair.second);

        if (score_a - score_b).abs() <= threshold {
            return None;
        }

        let outcome = if score_a > score_b {
            Outcome::new(pair.first, pair.second)
        } else {
            Outcome::new(pair.second, pair.first)
        };
        debug!(
            "Auto-resolving pair ({}, {}): scores {} vs {}",
            pair.first, pair.second, score_a, score_b
        );

        ledger.record(outcome);
        self.advance();
        Some(outcome)
    }

    pub fn resolve_choice(&mut self, ledger: &mut Ledger, choice: Choice) -> Option<Outcome> {
        let pair = self.current()?;
        let outcome = choice.resolve(pair);

        ledger.record(outcome);
        self.advance();
        Some(outcome)
    }

    pub fn advance(&mut self) {
        if self.cursor < self.pairs.len() {
            self.cursor += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.pairs.len()
    }

    /// Reshuffles, rewinds, and clears the ledger together
    pub fn reset<R: Rng + ?Sized>(&mut self, ledger: &mut Ledger, rng: &mut R) {
        self.pairs = shuffled_pairs(self.num_items, rng);
        self.cursor = 0;
        *ledger = Ledger::new(self.num_items);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }
}
