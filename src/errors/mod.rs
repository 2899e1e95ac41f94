use thiserror::Error;

/// Reasons a persisted session snapshot cannot be rehydrated
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Expected {expected} pairs, snapshot has {actual}")]
    PairCountMismatch { expected: usize, actual: usize },

    #[error("Pair ({first}, {second}) is malformed or out of range")]
    InvalidPair { first: usize, second: usize },

    #[error("Pair ({first}, {second}) appears more than once")]
    DuplicatePair { first: usize, second: usize },

    #[error("Expected {expected} scores, snapshot has {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("Outcome ({winner}, {loser}) is malformed or out of range")]
    InvalidOutcome { winner: usize, loser: usize },

    #[error("Scores do not match the recorded outcomes")]
    ScoresOutOfSync,

    #[error("Cursor {cursor} is inconsistent with {pairs} pairs and {outcomes} outcomes")]
    CursorMismatch {
        cursor: usize,
        pairs: usize,
        outcomes: usize,
    },
}
