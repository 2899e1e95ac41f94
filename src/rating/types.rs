use serde::Serialize;

use crate::domain::{ItemIndex, Strength};

/// Result of a Bradley-Terry fit over one outcome history
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthEstimate {
    pub strengths: Vec<Strength>,
    pub iterations: usize,
    pub converged: bool,
}

impl StrengthEstimate {
    pub fn mean(&self) -> f64 {
        if self.strengths.is_empty() {
            return 0.0;
        }
        self.strengths.iter().sum::<f64>() / self.strengths.len() as f64
    }
}

/// One row of a ranking: the item and the value it was ranked by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem<V> {
    pub index: ItemIndex,
    pub name: String,
    pub value: V,
}
