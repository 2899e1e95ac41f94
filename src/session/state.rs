use std::collections::HashSet;

use log::{info, warn};
use rand::Rng;

use super::snapshot::SessionSnapshot;
use crate::config::{RankingSettings, SkipPolicy};
use crate::domain::{Choice, Item, Outcome, Pair, SimpleScore, Strength, build_items};
use crate::errors::SnapshotError;
use crate::ledger::Ledger;
use crate::rating::{self, RankedItem, StrengthEstimate};
use crate::scheduler::{Scheduler, pair_count};

/// Everything one ranking session owns: the items, the pair order with its
/// cursor, and the outcome ledger
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    items: Vec<Item>,
    scheduler: Scheduler,
    ledger: Ledger,
}

impl SessionState {
    /// Fresh session: shuffled pair order, zero scores, no outcomes
    pub fn initialize<S, R>(item_names: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let items = build_items(item_names);
        let num_items = items.len();

        Self {
            items,
            scheduler: Scheduler::new(num_items, rng),
            ledger: Ledger::new(num_items),
        }
    }

    /// Rehydrates a snapshot, falling back to a fresh session if it does not
    /// fit the current item list
    pub fn restore<S, R>(item_names: &[S], snapshot: SessionSnapshot, rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        match Self::try_restore(item_names, snapshot) {
            Ok(state) => {
                info!(
                    "Restored session at {} / {} pairs",
                    state.scheduler.cursor(),
                    state.scheduler.len()
                );
                state
            }
            Err(e) => {
                warn!("Discarding saved session: {}", e);
                Self::initialize(item_names, rng)
            }
        }
    }

    pub fn try_restore<S: AsRef<str>>(
        item_names: &[S],
        snapshot: SessionSnapshot,
    ) -> Result<Self, SnapshotError> {
        let items = build_items(item_names);
        let num_items = items.len();

        validate_pairs(&snapshot.pairs, num_items)?;
        validate_outcomes(&snapshot.outcomes, num_items)?;

        if snapshot.scores.len() != num_items {
            return Err(SnapshotError::ScoreCountMismatch {
                expected: num_items,
                actual: snapshot.scores.len(),
            });
        }

        let ledger = Ledger::replay(num_items, &snapshot.outcomes);
        if ledger.scores() != snapshot.scores.as_slice() {
            return Err(SnapshotError::ScoresOutOfSync);
        }

        if snapshot.cursor > snapshot.pairs.len() || snapshot.cursor != snapshot.outcomes.len() {
            return Err(SnapshotError::CursorMismatch {
                cursor: snapshot.cursor,
                pairs: snapshot.pairs.len(),
                outcomes: snapshot.outcomes.len(),
            });
        }

        Ok(Self {
            items,
            scheduler: Scheduler::from_parts(num_items, snapshot.pairs, snapshot.cursor),
            ledger,
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            pairs: self.scheduler.pairs().to_vec(),
            scores: self.ledger.scores().to_vec(),
            outcomes: self.ledger.outcomes().to_vec(),
            cursor: self.scheduler.cursor(),
        }
    }

    pub fn current_pair(&self) -> Option<Pair> {
        self.scheduler.current()
    }

    pub fn apply_choice(&mut self, choice: Choice) -> Option<Outcome> {
        self.scheduler.resolve_choice(&mut self.ledger, choice)
    }

    pub fn maybe_auto_resolve(&mut self, policy: &SkipPolicy) -> Option<Outcome> {
        self.scheduler.resolve_skip(&mut self.ledger, policy.threshold)
    }

    pub fn simple_ranking(&self) -> Vec<RankedItem<SimpleScore>> {
        rating::rank_by_score(&self.items, self.ledger.scores())
    }

    pub fn estimate(&self, settings: &RankingSettings) -> StrengthEstimate {
        rating::estimate_strengths(self.ledger.outcomes(), self.items.len(), settings)
    }

    pub fn strength_ranking(&self, settings: &RankingSettings) -> Vec<RankedItem<Strength>> {
        let estimate = self.estimate(settings);
        rating::rank_by_strength(&self.items, &estimate.strengths)
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.scheduler.reset(&mut self.ledger, rng);
        info!("Session reset: {} pairs reshuffled", self.scheduler.len());
    }

    pub fn is_complete(&self) -> bool {
        self.scheduler.is_complete()
    }

    /// Resolved and total pair counts
    pub fn progress(&self) -> (usize, usize) {
        (self.scheduler.cursor(), self.scheduler.len())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_name(&self, index: usize) -> &str {
        &self.items[index].name
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

fn validate_pairs(pairs: &[Pair], num_items: usize) -> Result<(), SnapshotError> {
    let expected = pair_count(num_items);
    if pairs.len() != expected {
        return Err(SnapshotError::PairCountMismatch {
            expected,
            actual: pairs.len(),
        });
    }

    let mut seen = HashSet::with_capacity(pairs.len());
    for pair in pairs {
        if pair.first >= pair.second || pair.second >= num_items {
            return Err(SnapshotError::InvalidPair {
                first: pair.first,
                second: pair.second,
            });
        }
        if !seen.insert(*pair) {
            return Err(SnapshotError::DuplicatePair {
                first: pair.first,
                second: pair.second,
            });
        }
    }

    Ok(())
}

fn validate_outcomes(outcomes: &[Outcome], num_items: usize) -> Result<(), SnapshotError> {
    let invalid = outcomes
        .iter()
        .find(|o| o.winner == o.loser || o.winner >= num_items || o.loser >= num_items);

    match invalid {
        Some(o) => Err(SnapshotError::InvalidOutcome {
            winner: o.winner,
            loser: o.loser,
        }),
        None => Ok(()),
    }
}
