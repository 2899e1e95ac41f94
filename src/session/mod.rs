pub mod snapshot;
pub mod state;

pub use snapshot::SessionSnapshot;
pub use state::SessionState;
