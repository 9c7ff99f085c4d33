//! Best-score storage
//!
//! Backends:
//! - `MemoryStore`: in-process, for tests and embedding
//! - `JsonFileStore`: a small JSON document on disk (native)
//!
//! Loading never fails: missing or malformed data reads as zero.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highscores::BestScore;

/// Errors raised while writing the best score
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write best score: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode best score: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage for the best score across runs
pub trait BestScoreStore {
    fn load(&self) -> BestScore;
    fn save(&mut self, best: BestScore) -> Result<(), PersistenceError>;
}

/// Keeps the best score in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored string (possibly malformed)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> BestScore {
        self.raw.as_deref().map(BestScore::parse).unwrap_or_default()
    }

    fn save(&mut self, best: BestScore) -> Result<(), PersistenceError> {
        self.raw = Some(best.get().to_string());
        Ok(())
    }
}

/// On-disk record
#[derive(Debug, Serialize, Deserialize)]
struct BestScoreFile {
    best: u64,
}

/// Stores the best score as `{"best": N}` in a file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> BestScore {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let best = BestScore::parse(&raw);
                log::info!("Loaded best score {} from {}", best.get(), self.path.display());
                best
            }
            Err(e) => {
                log::info!("No best score at {} ({e}), starting fresh", self.path.display());
                BestScore::new()
            }
        }
    }

    fn save(&mut self, best: BestScore) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&BestScoreFile { best: best.get() })?;
        // Write beside the target, then rename over it
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        log::info!("Best score {} saved to {}", best.get(), self.path.display());
        Ok(())
    }
}
