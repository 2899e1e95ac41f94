use serde::{Deserialize, Serialize};

pub type ItemIndex = usize;
pub type SimpleScore = i64;
pub type Strength = f64;

/// A rankable item: its position in the fixed item list plus a display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub index: ItemIndex,
    pub name: String,
}

impl Item {
    pub fn new(index: ItemIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// Builds the immutable item list from display names, indexed in input order
pub fn build_items<S: AsRef<str>>(names: &[S]) -> Vec<Item> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Item::new(idx, name.as_ref()))
        .collect()
}

/// Unordered pair of distinct items, stored with `first < second`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(ItemIndex, ItemIndex)", into = "(ItemIndex, ItemIndex)")]
pub struct Pair {
    pub first: ItemIndex,
    pub second: ItemIndex,
}

impl Pair {
    pub fn new(a: ItemIndex, b: ItemIndex) -> Self {
        assert_ne!(a, b, "pair members must be distinct items");
        Self {
            first: a.min(b),
            second: a.max(b),
        }
    }

    pub fn contains(&self, item: ItemIndex) -> bool {
        self.first == item || self.second == item
    }
}

impl From<(ItemIndex, ItemIndex)> for Pair {
    fn from((first, second): (ItemIndex, ItemIndex)) -> Self {
        // Not normalized: snapshot validation rejects pairs with first >= second.
        Self { first, second }
    }
}

impl From<Pair> for (ItemIndex, ItemIndex) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

/// One resolved comparison, human-judged or auto-skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(ItemIndex, ItemIndex)", into = "(ItemIndex, ItemIndex)")]
pub struct Outcome {
    pub winner: ItemIndex,
    pub loser: ItemIndex,
}

impl Outcome {
    pub fn new(winner: ItemIndex, loser: ItemIndex) -> Self {
        Self { winner, loser }
    }

    pub fn pair(&self) -> Pair {
        Pair::new(self.winner, self.loser)
    }
}

impl From<(ItemIndex, ItemIndex)> for Outcome {
    fn from((winner, loser): (ItemIndex, ItemIndex)) -> Self {
        Self { winner, loser }
    }
}

impl From<Outcome> for (ItemIndex, ItemIndex) {
    fn from(outcome: Outcome) -> Self {
        (outcome.winner, outcome.loser)
    }
}

/// Which side of the presented pair the judge picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    /// Accepts the keyboard shortcuts `1` and `2`
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Choice::First),
            "2" => Some(Choice::Second),
            _ => None,
        }
    }

    pub fn resolve(&self, pair: Pair) -> Outcome {
        match self {
            Choice::First => Outcome::new(pair.first, pair.second),
            Choice::Second => Outcome::new(pair.second, pair.first),
        }
    }
}
