use std::path::PathBuf;

use crate::domain::SimpleScore;

#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub max_iterations: usize,
    pub convergence_tolerance: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            convergence_tolerance: 1e-6,
        }
    }
}

/// Pairs whose simple scores differ by more than `threshold` are decided
/// automatically in favour of the higher score.
///
/// Larger thresholds ask the judge more questions; smaller ones trade ranking
/// accuracy for fewer judgments. Earlier versions used 5 and 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipPolicy {
    pub threshold: SimpleScore,
}

impl Default for SkipPolicy {
    fn default() -> Self {
        Self { threshold: 5 }
    }
}

#[derive(Debug, Clone)]
pub struct JudgingSettings {
    pub skip_policy: SkipPolicy,
    pub skip_notice_ms: u64,
}

impl Default for JudgingSettings {
    fn default() -> Self {
        Self {
            skip_policy: SkipPolicy::default(),
            skip_notice_ms: 700,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub state_dir: PathBuf,
    pub photos_dir: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        let state_dir = std::env::var("OWL_STATE_DIR").unwrap_or_else(|_| "owl_state".to_string());
        Self {
            state_dir: PathBuf::from(state_dir),
            photos_dir: PathBuf::from("photos"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub judging: JudgingSettings,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            judging: JudgingSettings::default(),
            store: StoreSettings::default(),
        }
    }
}
