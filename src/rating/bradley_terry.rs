use log::{debug, info};
use ndarray::{Array1, Array2};

use super::types::StrengthEstimate;
use crate::config::RankingSettings;
use crate::domain::Outcome;

const INITIAL_STRENGTH: f64 = 1.0;

/// Fits Bradley-Terry strengths with the MM (Minorization-Maximization) update
///
/// Strengths start at 1.0, are updated synchronously each pass and rescaled to
/// mean 1.0. Items with no recorded matches keep their previous strength.
/// Hitting `max_iterations` is not an error; the last iterate is returned.
pub fn estimate_strengths(
    outcomes: &[Outcome],
    num_items: usize,
    settings: &RankingSettings,
) -> StrengthEstimate {
    if num_items < 2 {
        return StrengthEstimate {
            strengths: vec![INITIAL_STRENGTH; num_items],
            iterations: 0,
            converged: true,
        };
    }

    let (match_counts, total_wins) = build_comparison_data(outcomes, num_items);
    mm_algorithm(&match_counts, &total_wins, settings)
}

/// Symmetric head-to-head match counts and total wins per item
fn build_comparison_data(outcomes: &[Outcome], num_items: usize) -> (Array2<f64>, Array1<f64>) {
    let mut win_counts = Array2::<f64>::zeros((num_items, num_items));

    for outcome in outcomes {
        win_counts[[outcome.winner, outcome.loser]] += 1.0;
    }

    let match_counts = &win_counts + &win_counts.t();
    let total_wins = win_counts.sum_axis(ndarray::Axis(1));

    (match_counts, total_wins)
}

fn mm_algorithm(
    match_counts: &Array2<f64>,
    total_wins: &Array1<f64>,
    settings: &RankingSettings,
) -> StrengthEstimate {
    let n_items = total_wins.len();
    let mut strengths = Array1::<f64>::from_elem(n_items, INITIAL_STRENGTH);

    for iteration in 0..settings.max_iterations {
        let mut new_strengths = Array1::<f64>::zeros(n_items);

        for i in 0..n_items {
            let denominator = update_denominator(match_counts, &strengths, i);

            new_strengths[i] = if denominator > 0.0 {
                total_wins[i] / denominator
            } else {
                strengths[i]
            };
        }

        normalize_to_unit_mean(&mut new_strengths);

        let max_diff = (&new_strengths - &strengths)
            .mapv(f64::abs)
            .fold(0.0_f64, |a, &b| a.max(b));

        strengths = new_strengths;

        if max_diff < settings.convergence_tolerance {
            info!("MM algorithm converged in {} iterations", iteration + 1);
            return StrengthEstimate {
                strengths: strengths.to_vec(),
                iterations: iteration + 1,
                converged: true,
            };
        }
    }

    debug!(
        "MM algorithm stopped at the {} iteration cap without converging",
        settings.max_iterations
    );
    StrengthEstimate {
        strengths: strengths.to_vec(),
        iterations: settings.max_iterations,
        converged: false,
    }
}

fn update_denominator(match_counts: &Array2<f64>, strengths: &Array1<f64>, i: usize) -> f64 {
    let mut denominator = 0.0;

    for j in 0..strengths.len() {
        let matches = match_counts[[i, j]];
        if matches > 0.0 {
            denominator += matches / (strengths[i] + strengths[j]);
        }
    }

    denominator
}

fn normalize_to_unit_mean(strengths: &mut Array1<f64>) {
    let mean = strengths.mean().unwrap_or(0.0);
    if mean > 0.0 {
        strengths.mapv_inplace(|s| s / mean);
    }
}
