use rand::Rng;

use crate::domain::Outcome;
use crate::scheduler::enumerate_pairs;

const MIN_MATCHES_PER_PAIR: usize = 1;
const MAX_MATCHES_PER_PAIR: usize = 5;
/// Half-width of the band the per-match win probability is drawn from
const BIAS_SPREAD: f64 = 0.1;

/// Generates synthetic match results for exercising the estimator
///
/// Every pair plays 1 to 5 matches; each match is won by the first item with a
/// probability drawn from [0.4, 0.6], so results carry only a weak signal.
pub fn simulate_outcomes<R: Rng + ?Sized>(num_items: usize, rng: &mut R) -> Vec<Outcome> {
    let mut outcomes = Vec::new();

    for pair in enumerate_pairs(num_items) {
        let matches = rng.gen_range(MIN_MATCHES_PER_PAIR..=MAX_MATCHES_PER_PAIR);

        for _ in 0..matches {
            let p_first = 0.5 + rng.gen_range(-BIAS_SPREAD..BIAS_SPREAD);
            let outcome = if rng.gen_bool(p_first) {
                Outcome::new(pair.first, pair.second)
            } else {
                Outcome::new(pair.second, pair.first)
            };
            outcomes.push(outcome);
        }
    }

    outcomes
}
