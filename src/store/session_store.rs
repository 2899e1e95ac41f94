use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::session::SessionSnapshot;

const PAIRS_KEY: &str = "pairs";
const SCORES_KEY: &str = "scores";
const OUTCOMES_KEY: &str = "outcomes";
const CURSOR_KEY: &str = "cursor";

/// File-based store for session snapshots, one JSON file per key
pub struct SessionStore {
    state_dir: PathBuf,
}

impl SessionStore {
    /// Create a new store, creating its directory if needed
    pub fn new<P: AsRef<Path>>(state_dir: P) -> Result<Self> {
        let state_dir = state_dir.as_ref().to_path_buf();
        fs::create_dir_all(&state_dir).context("Failed to create session state directory")?;

        Ok(Self { state_dir })
    }

    /// Save every part of the snapshot
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        self.write_json(PAIRS_KEY, &snapshot.pairs)?;
        self.write_json(SCORES_KEY, &snapshot.scores)?;
        self.write_json(OUTCOMES_KEY, &snapshot.outcomes)?;
        self.write_json(CURSOR_KEY, &snapshot.cursor)?;

        info!("Saved session to {}", self.state_dir.display());
        Ok(())
    }

    /// Load a snapshot; `None` when nothing (or only part of one) was saved
    pub fn load(&self) -> Result<Option<SessionSnapshot>> {
        let pairs = self.read_json_opt(PAIRS_KEY)?;
        let scores = self.read_json_opt(SCORES_KEY)?;
        let outcomes = self.read_json_opt(OUTCOMES_KEY)?;
        let cursor = self.read_json_opt(CURSOR_KEY)?;

        match (pairs, scores, outcomes, cursor) {
            (Some(pairs), Some(scores), Some(outcomes), Some(cursor)) => {
                info!("Loaded session from {}", self.state_dir.display());
                Ok(Some(SessionSnapshot {
                    pairs,
                    scores,
                    outcomes,
                    cursor,
                }))
            }
            (None, None, None, None) => Ok(None),
            _ => {
                warn!("Incomplete session state in {}, ignoring it", self.state_dir.display());
                Ok(None)
            }
        }
    }

    /// Like `load`, but unreadable state is logged and treated as absent
    pub fn load_or_none(&self) -> Option<SessionSnapshot> {
        self.load().unwrap_or_else(|e| {
            warn!("Failed to load saved session: {:#}", e);
            None
        })
    }

    /// Remove all stored keys
    pub fn clear(&self) -> Result<()> {
        for key in [PAIRS_KEY, SCORES_KEY, OUTCOMES_KEY, CURSOR_KEY] {
            let path = self.build_path(key);
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }

        info!("Cleared session state in {}", self.state_dir.display());
        Ok(())
    }

    // --- Helper Methods ---

    fn build_path(&self, key: &str) -> PathBuf {
        self.state_dir.join(format!("{}.json", key))
    }

    fn write_json<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let path = self.build_path(key);
        let json = serde_json::to_string(data)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let path = self.build_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let data = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()))?;
        Ok(Some(data))
    }
}
