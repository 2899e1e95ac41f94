pub mod items;
pub mod settings;

pub use items::{default_owls, resolve_items};
pub use settings::{AppConfig, JudgingSettings, RankingSettings, SkipPolicy, StoreSettings};
