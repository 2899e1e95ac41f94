pub mod models;

pub use models::{build_items, Choice, Item, ItemIndex, Outcome, Pair, SimpleScore, Strength};
