pub mod bradley_terry;
pub mod ranking;
pub mod simulation;
pub mod types;

pub use bradley_terry::estimate_strengths;
pub use ranking::{rank_by_score, rank_by_strength};
pub use simulation::simulate_outcomes;
pub use types::{RankedItem, StrengthEstimate};
