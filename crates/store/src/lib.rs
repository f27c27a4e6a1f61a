//! Best-score persistence.
//!
//! The record is a single decimal integer in a plain text file. Reads
//! degrade to 0 on any failure (missing file, bad content); writes report
//! errors to the caller, which may ignore them. The engine never touches
//! this crate directly: the runner persists the engine's best-score events.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default location, relative to the working directory.
pub const DEFAULT_PATH: &str = "resources/bestscore.dat";

/// File-backed store for the best-score record.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted best score.
    ///
    /// A missing file or unparsable content yields 0; this is never an
    /// error.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Overwrite the record with `best_score`.
    ///
    /// The parent directory is created when missing.
    pub fn save(&self, best_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, best_score.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn temp_store(tag: &str) -> ScoreStore {
        let mut path = env::temp_dir();
        path.push(format!("tui-2048-store-{}-{}", tag, process::id()));
        path.push("bestscore.dat");
        let _ = fs::remove_file(&path);
        ScoreStore::new(path)
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = temp_store("roundtrip");
        store.save(2048).unwrap();
        assert_eq!(store.load(), 2048);

        // Overwrite, not append.
        store.save(4096).unwrap();
        assert_eq!(store.load(), 4096);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not a number").unwrap();
        assert_eq!(store.load(), 0);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_load_tolerates_surrounding_whitespace() {
        let store = temp_store("whitespace");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "  120\n").unwrap();
        assert_eq!(store.load(), 120);

        let _ = fs::remove_file(store.path());
    }
}
