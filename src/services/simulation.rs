use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;

use super::report::write_strength_ranking;
use crate::config::AppConfig;
use crate::domain::build_items;
use crate::ledger::Ledger;
use crate::rating::{estimate_strengths, rank_by_strength, simulate_outcomes};

/// Ranks simulated match results; nothing is saved
pub struct SimulationService {
    config: AppConfig,
    item_names: Vec<String>,
}

impl SimulationService {
    pub fn new(config: AppConfig, item_names: Vec<String>) -> Self {
        Self { config, item_names }
    }

    pub fn run<W: Write, R: Rng + ?Sized>(&self, mut output: W, rng: &mut R) -> Result<()> {
        let items = build_items(&self.item_names);
        let outcomes = simulate_outcomes(items.len(), rng);
        info!("Generated {} simulated matches", outcomes.len());

        let ledger = Ledger::replay(items.len(), &outcomes);
        let estimate = estimate_strengths(ledger.outcomes(), items.len(), &self.config.ranking);
        let ranked = rank_by_strength(&items, &estimate.strengths);

        writeln!(
            output,
            "{}",
            format!(
                "Generated {} simulated matches ({} iterations{}).",
                outcomes.len(),
                estimate.iterations,
                if estimate.converged { "" } else { ", not converged" }
            )
            .dimmed()
        )?;
        write_strength_ranking(&mut output, &ranked, ledger.scores())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_simulation_lists_every_item() {
        colored::control::set_override(false);
        let names: Vec<String> = ["Barn Owl", "Elf Owl", "Snowy Owl", "Boreal Owl"]
            .iter()
            .map(|n| n.to_string())
            .collect();
        let service = SimulationService::new(AppConfig::new(), names.clone());

        let mut out = Vec::new();
        service.run(&mut out, &mut StdRng::seed_from_u64(12)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("simulated matches"));
        for name in &names {
            assert!(text.contains(name.as_str()));
        }
    }
}
