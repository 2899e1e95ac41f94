pub mod judging;
pub mod report;
pub mod simulation;
pub mod standings;

pub use judging::{JudgingOutcome, JudgingService};
pub use simulation::SimulationService;
pub use standings::{Standings, StandingsService};
