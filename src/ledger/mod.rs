use crate::domain::{ItemIndex, Outcome, SimpleScore};

/// Append-only record of resolved comparisons with a running win/loss tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    outcomes: Vec<Outcome>,
    scores: Vec<SimpleScore>,
}

impl Ledger {
    pub fn new(num_items: usize) -> Self {
        Self {
            outcomes: Vec::new(),
            scores: vec![0; num_items],
        }
    }

    /// Rebuilds a ledger by recording every outcome in order
    pub fn replay(num_items: usize, outcomes: &[Outcome]) -> Self {
        let mut ledger = Self::new(num_items);
        for &outcome in outcomes {
            ledger.record(outcome);
        }
        ledger
    }

    pub fn record(&mut self, outcome: Outcome) {
        let num_items = self.scores.len();
        assert!(outcome.winner < num_items, "winner index {} out of range (num_items = {})", outcome.winner, num_items);
        assert!(outcome.loser < num_items, "loser index {} out of range (num_items = {})", outcome.loser, num_items);
        assert_ne!(outcome.winner, outcome.loser, "an item cannot beat itself");

        self.scores[outcome.winner] += 1;
        self.scores[outcome.loser] -= 1;
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn scores(&self) -> &[SimpleScore] {
        &self.scores
    }

    pub fn score(&self, item: ItemIndex) -> SimpleScore {
        self.scores[item]
    }

    pub fn num_items(&self) -> usize {
        self.scores.len()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_scores() {
        let mut ledger = Ledger::new(3);
        ledger.record(Outcome::new(0, 1));
        ledger.record(Outcome::new(0, 2));
        ledger.record(Outcome::new(2, 1));

        assert_eq!(ledger.scores(), &[2, -2, 0]);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.outcomes()[2], Outcome::new(2, 1));
    }

    #[test]
    fn test_duplicate_pairs_are_accepted() {
        let mut ledger = Ledger::new(2);
        ledger.record(Outcome::new(1, 0));
        ledger.record(Outcome::new(1, 0));
        assert_eq!(ledger.score(1), 2);
        assert_eq!(ledger.score(0), -2);
    }

    #[test]
    fn test_replay_matches_incremental_recording() {
        let outcomes = vec![Outcome::new(0, 1), Outcome::new(1, 2), Outcome::new(0, 2)];
        let mut incremental = Ledger::new(3);
        for &o in &outcomes {
            incremental.record(o);
        }
        assert_eq!(Ledger::replay(3, &outcomes), incremental);
    }

    #[test]
    #[should_panic(expected = "cannot beat itself")]
    fn test_self_match_panics() {
        Ledger::new(2).record(Outcome::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        Ledger::new(2).record(Outcome::new(0, 2));
    }
}
