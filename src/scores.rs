use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Minimal key-value contract a host platform provides for persistence.
/// The payload is opaque to the store; failures are reported, never raised.
pub trait ScoreStore {
    fn load(&self) -> Option<String>;
    /// Returns false when the payload could not be persisted.
    fn save(&mut self, payload: &str) -> bool;
}

/// Best (lowest) winning move count per difficulty.
///
/// Storage failures fall back to an empty table so a broken store never
/// affects gameplay.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    best: BTreeMap<Difficulty, u16>,
}

impl HighScores {
    pub fn load_from(store: &impl ScoreStore) -> Self {
        let Some(payload) = store.load() else {
            return Self::default();
        };
        match serde_json::from_str(&payload) {
            Ok(scores) => scores,
            Err(err) => {
                log::warn!("failed to parse stored high scores: {}", err);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, store: &mut impl ScoreStore) {
        match serde_json::to_string(self) {
            Ok(payload) => {
                if !store.save(&payload) {
                    log::warn!("failed to persist high scores");
                }
            }
            Err(err) => log::warn!("failed to encode high scores: {}", err),
        }
    }

    pub fn best(&self, difficulty: Difficulty) -> Option<u16> {
        self.best.get(&difficulty).copied()
    }

    /// Records a winning move count; returns true when it sets a new record.
    pub fn record(&mut self, difficulty: Difficulty, moves: u16) -> bool {
        match self.best.get(&difficulty) {
            Some(&best) if best <= moves => false,
            _ => {
                self.best.insert(difficulty, moves);
                true
            }
        }
    }
}
