//! High score tracking
//!
//! A single best score, persisted as its decimal string in a text file.
//! Unreadable or garbled files count as a best of 0.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use crate::persistence;

/// Best score ever recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct HighScore(pub u64);

impl HighScore {
    /// Parse the on-disk representation (a decimal integer, surrounding
    /// whitespace allowed)
    pub fn parse(text: &str) -> Result<Self, ParseIntError> {
        text.trim().parse().map(Self)
    }
}

/// High score backed by an optional file
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
    best: HighScore,
}

impl HighScoreStore {
    /// Open the store at `path`, reading the current best
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = Self::load(&path);
        Self {
            path: Some(path),
            best,
        }
    }

    /// A store that never touches the filesystem
    pub fn in_memory(best: u64) -> Self {
        Self {
            path: None,
            best: HighScore(best),
        }
    }

    /// Read the best score from `path` (0 if missing or unparsable)
    pub fn load(path: &Path) -> HighScore {
        match persistence::read_text(path) {
            Ok(text) => match HighScore::parse(&text) {
                Ok(best) => {
                    log::info!("Loaded high score {}", best.0);
                    best
                }
                Err(e) => {
                    log::warn!("Ignoring malformed high score file {}: {}", path.display(), e);
                    HighScore::default()
                }
            },
            Err(_) => {
                log::info!("No high score file, starting fresh");
                HighScore::default()
            }
        }
    }

    pub fn value(&self) -> u64 {
        self.best.0
    }

    /// Record `score` if it beats the best; returns true when it did
    ///
    /// The in-memory best is raised even if the write fails, so the stored
    /// value never goes down.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best.0 {
            return false;
        }
        self.best = HighScore(score);
        if let Some(path) = &self.path {
            match persistence::write_text_atomic(path, &score.to_string()) {
                Ok(()) => log::info!("New high score {} saved", score),
                Err(e) => log::warn!("Failed to save high score to {}: {}", path.display(), e),
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert!(HighScore::parse("abc").is_err());
        assert!(HighScore::parse("").is_err());
        assert!(HighScore::parse("-5").is_err());
        assert_eq!(HighScore::parse(" 1200\n"), Ok(HighScore(1200)));
        assert_eq!(HighScore::parse("00"), Ok(HighScore(0)));
    }

    #[test]
    fn test_open_zero_padded_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        std::fs::write(&path, "0042").unwrap();
        assert_eq!(HighScoreStore::open(&path).value(), 42);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::open(dir.path().join("highscore.txt"));
        assert_eq!(store.value(), 0);
    }

    #[test]
    fn test_open_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        std::fs::write(&path, "abc").unwrap();
        let store = HighScoreStore::open(&path);
        assert_eq!(store.value(), 0);
    }

    #[test]
    fn test_record_only_when_beaten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        std::fs::write(&path, "500").unwrap();

        let mut store = HighScoreStore::open(&path);
        assert_eq!(store.value(), 500);

        assert!(!store.record(400));
        assert!(!store.record(500));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "500");

        assert!(store.record(800));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "800");
        assert_eq!(HighScoreStore::open(&path).value(), 800);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = HighScoreStore::in_memory(10);
        assert!(store.record(11));
        assert_eq!(store.value(), 11);
    }
}
