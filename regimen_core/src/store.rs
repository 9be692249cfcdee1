//! Completion persistence with file locking.
//!
//! Loading never fails: a missing, unreadable or malformed store file
//! recovers to the empty completion map, since the in-memory map is always
//! the source of truth for the running session. Saving is atomic
//! (temp file + rename) and lock-guarded.

use crate::{CompletionMap, Error, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Fixed store file name inside the data directory, stable across versions
pub const STORE_FILE: &str = "meal_completion.json";

impl CompletionMap {
    /// Load the completion record from a file with shared locking
    ///
    /// Returns the empty map if the file doesn't exist. If the file is
    /// corrupted or unreadable, logs a warning and returns the empty map.
    pub fn load(path: &Path) -> CompletionMap {
        if !path.exists() {
            tracing::info!("No completion file found, starting empty");
            return Self::default();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open completion file {:?}: {}. Starting empty.",
                    path,
                    e
                );
                return Self::default();
            }
        };

        // Acquire shared lock for reading
        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock completion file {:?}: {}. Starting empty.",
                path,
                e
            );
            return Self::default();
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read completion file {:?}: {}. Starting empty.",
                path,
                e
            );
            return Self::default();
        }

        let _ = file.unlock();

        match serde_json::from_str::<CompletionMap>(&contents) {
            Ok(map) => {
                tracing::debug!("Loaded completion record from {:?}", path);
                map
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse completion file {:?}: {}. Starting empty.",
                    path,
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the completion record to a file with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file in the same directory
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    ///
    /// A failed save is non-fatal to callers: the in-memory map stays
    /// authoritative for the rest of the session.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
        })?)?;

        // Exclusive lock on the temp file serializes concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved completion record to {:?}", path);
        Ok(())
    }

    /// Load the record, modify it, and save it back
    ///
    /// Convenience for one-shot commands that perform a single mutation per
    /// process.
    pub fn update<F>(path: &Path, f: F) -> Result<CompletionMap>
    where
        F: FnOnce(CompletionMap) -> CompletionMap,
    {
        let map = f(Self::load(path));
        map.save(path)?;
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MealKey;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join(STORE_FILE);

        let map = CompletionMap::default()
            .set_meal(1, MealKey::Breakfast, true)
            .set_meal(4, MealKey::Bedtime, true);

        map.save(&store_path).unwrap();
        let loaded = CompletionMap::load(&store_path);

        assert_eq!(loaded, map);
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join("nonexistent.json");

        let map = CompletionMap::load(&store_path);
        assert!(map.is_empty());
    }

    #[test]
    fn test_corrupted_store_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join("corrupted.json");

        std::fs::write(&store_path, "{ invalid json }").unwrap();

        let map = CompletionMap::load(&store_path);
        assert!(map.is_empty());
    }

    #[test]
    fn test_malformed_day_keys_return_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join(STORE_FILE);

        std::fs::write(&store_path, r#"{"banana": {"breakfast": true}}"#).unwrap();

        let map = CompletionMap::load(&store_path);
        assert!(map.is_empty());
    }

    #[test]
    fn test_update_pattern() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join(STORE_FILE);

        CompletionMap::update(&store_path, |map| map.set_meal(2, MealKey::Lunch, true)).unwrap();

        let loaded = CompletionMap::load(&store_path);
        assert!(loaded.get(2, MealKey::Lunch));
    }

    #[test]
    fn test_atomic_save_leaves_no_stray_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join(STORE_FILE);

        CompletionMap::default()
            .set_meal(1, MealKey::Dinner, true)
            .save(&store_path)
            .unwrap();

        assert!(store_path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != STORE_FILE)
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only {}, found extras: {:?}",
            STORE_FILE,
            extras
        );
    }
}
