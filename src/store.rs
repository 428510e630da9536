//! Score store - persisted best scores and achievement flags
//!
//! The engine only sees the [`ScoreStore`] trait; production uses the
//! JSON-file-backed [`JsonStore`], tests substitute [`MemoryStore`].
//!
//! Persistence failures are deliberately non-fatal: a read failure is
//! treated as "no data", a write failure is logged and the session keeps
//! going on the in-memory copy.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::achievements::{Achievement, Achievements};
use crate::types::Difficulty;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read score file: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write score file: {0}")]
    Write(#[source] io::Error),
    #[error("malformed score file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key-value persistence collaborator for best scores and achievements
pub trait ScoreStore {
    /// Stored best score for a difficulty, if any round ever finished there
    fn best_score(&self, difficulty: Difficulty) -> Option<u32>;

    /// Overwrite and persist the best score for a difficulty
    fn set_best_score(&mut self, difficulty: Difficulty, score: u32);

    /// The earned-achievement flags loaded at startup
    fn achievements(&self) -> Achievements;

    /// Overwrite and persist the earned-achievement flags
    fn set_achievements(&mut self, achievements: &Achievements);
}

/// On-disk document. Maps are keyed by the stable string ids so the file
/// stays readable and tolerates ids from other versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    best_scores: BTreeMap<String, u32>,
    #[serde(default)]
    achievements: BTreeMap<String, bool>,
}

impl StoreDocument {
    fn to_achievements(&self) -> Achievements {
        let mut earned = Achievements::new();
        for (id, &flag) in &self.achievements {
            if flag {
                if let Some(a) = Achievement::from_str(id) {
                    earned.insert(a);
                }
            }
        }
        earned
    }

    fn set_achievements(&mut self, earned: &Achievements) {
        for a in earned.iter() {
            self.achievements.insert(a.as_str().to_string(), true);
        }
    }
}

/// In-memory store: the test fake, and the fallback when no config
/// directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    doc: StoreDocument,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn best_score(&self, difficulty: Difficulty) -> Option<u32> {
        self.doc.best_scores.get(difficulty.as_str()).copied()
    }

    fn set_best_score(&mut self, difficulty: Difficulty, score: u32) {
        self.doc
            .best_scores
            .insert(difficulty.as_str().to_string(), score);
    }

    fn achievements(&self) -> Achievements {
        self.doc.to_achievements()
    }

    fn set_achievements(&mut self, achievements: &Achievements) {
        self.doc.set_achievements(achievements);
    }
}

/// File-backed store holding one JSON document
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    doc: StoreDocument,
}

impl JsonStore {
    /// Open a store at `path`, loading any existing document. Unreadable or
    /// malformed files degrade to an empty document.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match Self::load(&path) {
            Ok(doc) => doc,
            Err(StoreError::Read(err)) if err.kind() == io::ErrorKind::NotFound => {
                StoreDocument::default()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "score file unreadable, starting empty");
                StoreDocument::default()
            }
        };
        Self { path, doc }
    }

    /// The conventional location under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("memory-match").join("scores.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<StoreDocument, StoreError> {
        let raw = fs::read_to_string(path).map_err(StoreError::Read)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        let raw = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, raw).map_err(StoreError::Write)
    }

    /// Persist, downgrading failure to a warning. The in-memory document
    /// stays authoritative for the rest of the session.
    fn persist(&self) {
        if let Err(err) = self.save() {
            warn!(path = %self.path.display(), %err, "score file write failed");
        }
    }
}

impl ScoreStore for JsonStore {
    fn best_score(&self, difficulty: Difficulty) -> Option<u32> {
        self.doc.best_scores.get(difficulty.as_str()).copied()
    }

    fn set_best_score(&mut self, difficulty: Difficulty, score: u32) {
        self.doc
            .best_scores
            .insert(difficulty.as_str().to_string(), score);
        self.persist();
    }

    fn achievements(&self) -> Achievements {
        self.doc.to_achievements()
    }

    fn set_achievements(&mut self, achievements: &Achievements) {
        self.doc.set_achievements(achievements);
        self.persist();
    }
}
