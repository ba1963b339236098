use std::fs;
use std::path::PathBuf;

use log::{error, warn};
use serde::{Deserialize, Serialize};

/// The one persisted record: `{"high_score": N}`.
#[derive(Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Best-effort file storage for the high score. Loading never fails from
/// the caller's point of view, and a failed save is logged and forgotten;
/// gameplay must not depend on the file being writable.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    /// 0 when the file is missing, unreadable, or not a valid record.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<HighScoreRecord>(&contents) {
                Ok(record) => record.high_score,
                Err(e) => {
                    warn!("malformed high score file {:?}: {}", self.path, e);
                    0
                }
            },
            Err(_) => 0,
        }
    }

    pub fn save(&self, high_score: u32) {
        let record = HighScoreRecord { high_score };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    error!("failed to save high score to {:?}: {}", self.path, e);
                }
            }
            Err(e) => error!("failed to encode high score record: {}", e),
        }
    }
}
