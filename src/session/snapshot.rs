use serde::{Deserialize, Serialize};

use crate::domain::{Outcome, Pair, SimpleScore};

/// Order-preserving copy of all mutable session state
///
/// The encoding is left to the persistence collaborator; the fields mirror
/// the keys it stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub pairs: Vec<Pair>,
    pub scores: Vec<SimpleScore>,
    pub outcomes: Vec<Outcome>,
    pub cursor: usize,
}
