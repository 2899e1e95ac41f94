use std::cmp::Ordering;

use super::types::RankedItem;
use crate::domain::{Item, SimpleScore, Strength};

/// Items by descending simple score, ties by ascending name
pub fn rank_by_score(items: &[Item], scores: &[SimpleScore]) -> Vec<RankedItem<SimpleScore>> {
    let mut ranked = build_rows(items, scores);
    ranked.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    ranked
}

/// Items by descending strength, ties by ascending name
pub fn rank_by_strength(items: &[Item], strengths: &[Strength]) -> Vec<RankedItem<Strength>> {
    let mut ranked = build_rows(items, strengths);
    ranked.sort_by(|a, b| compare_strength(a.value, b.value).then_with(|| a.name.cmp(&b.name)));
    ranked
}

fn compare_strength(a: Strength, b: Strength) -> Ordering {
    b.total_cmp(&a)
}

fn build_rows<V: Copy>(items: &[Item], values: &[V]) -> Vec<RankedItem<V>> {
    assert_eq!(items.len(), values.len(), "one value per item expected");

    items
        .iter()
        .zip(values.iter())
        .map(|(item, &value)| RankedItem {
            index: item.index,
            name: item.name.clone(),
            value,
        })
        .collect()
}
