use std::io::Write;

use anyhow::Result;
use log::info;
use rand::Rng;
use serde::Serialize;

use super::report::{write_progress, write_simple_ranking, write_strength_ranking};
use crate::config::AppConfig;
use crate::domain::{SimpleScore, Strength};
use crate::rating::RankedItem;
use crate::session::SessionState;
use crate::store::SessionStore;

#[derive(Debug, Clone, Serialize)]
pub struct Standings {
    pub resolved: usize,
    pub total: usize,
    pub simple: Vec<RankedItem<SimpleScore>>,
    pub strength: Vec<RankedItem<Strength>>,
}

impl Standings {
    pub fn from_session(state: &SessionState, config: &AppConfig) -> Self {
        let (resolved, total) = state.progress();
        Self {
            resolved,
            total,
            simple: state.simple_ranking(),
            strength: state.strength_ranking(&config.ranking),
        }
    }
}

/// Reports both rankings for the saved session without changing it
pub struct StandingsService {
    config: AppConfig,
    store: SessionStore,
    item_names: Vec<String>,
}

impl StandingsService {
    pub fn new(config: AppConfig, item_names: Vec<String>) -> Result<Self> {
        let store = SessionStore::new(&config.store.state_dir)?;
        Ok(Self {
            config,
            store,
            item_names,
        })
    }

    pub fn compute<R: Rng + ?Sized>(&self, rng: &mut R) -> Standings {
        let state = match self.store.load_or_none() {
            Some(snapshot) => SessionState::restore(&self.item_names, snapshot, rng),
            None => SessionState::initialize(&self.item_names, rng),
        };

        info!("Computing standings from {} outcomes", state.ledger().len());
        Standings::from_session(&state, &self.config)
    }

    pub fn run<W: Write, R: Rng + ?Sized>(&self, mut output: W, json: bool, rng: &mut R) -> Result<()> {
        let standings = self.compute(rng);

        if json {
            serde_json::to_writer_pretty(&mut output, &standings)?;
            writeln!(output)?;
            return Ok(());
        }

        let scores = simple_scores_by_index(&standings.simple);
        write_progress(&mut output, standings.resolved, standings.total)?;
        write_simple_ranking(&mut output, &standings.simple)?;
        writeln!(output)?;
        write_strength_ranking(&mut output, &standings.strength, &scores)?;
        Ok(())
    }
}

fn simple_scores_by_index(simple: &[RankedItem<SimpleScore>]) -> Vec<SimpleScore> {
    let mut scores = vec![0; simple.len()];
    for row in simple {
        scores[row.index] = row.value;
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Choice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const NAMES: [&str; 3] = ["Barn Owl", "Elf Owl", "Snowy Owl"];

    fn config_for(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::new();
        config.store.state_dir = dir.to_path_buf();
        config
    }

    fn names() -> Vec<String> {
        NAMES.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_standings_without_saved_session_are_all_tied() {
        let dir = tempfile::tempdir().unwrap();
        let service = StandingsService::new(config_for(dir.path()), names()).unwrap();
        let standings = service.compute(&mut StdRng::seed_from_u64(1));

        assert_eq!(standings.resolved, 0);
        assert!(standings.strength.iter().all(|r| r.value == 1.0));
        let order: Vec<&str> = standings.strength.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["Barn Owl", "Elf Owl", "Snowy Owl"]);
    }

    #[test]
    fn test_standings_reflect_saved_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let mut rng = StdRng::seed_from_u64(4);

        let mut state = SessionState::initialize(&NAMES, &mut rng);
        state.apply_choice(Choice::First);
        SessionStore::new(dir.path()).unwrap().save(&state.snapshot()).unwrap();

        let service = StandingsService::new(config, names()).unwrap();
        let standings = service.compute(&mut rng);

        assert_eq!(standings.resolved, 1);
        assert_eq!(standings.simple[0].value, 1);
        assert_eq!(standings.simple[0].index, standings.strength[0].index);
    }

    #[test]
    fn test_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let service = StandingsService::new(config_for(dir.path()), names()).unwrap();

        let mut out = Vec::new();
        service.run(&mut out, true, &mut StdRng::seed_from_u64(1)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["total"], 3);
        assert_eq!(value["strength"][0]["name"], "Barn Owl");
    }
}
