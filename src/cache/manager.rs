//! Cache manager for persisting looked-up words to disk
//!
//! Provides a `CacheManager` that stores the full search-term to `Word` mapping
//! in one JSON file, rewriting it wholesale on every save.

use directories::BaseDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::APP_DIR;
use crate::data::Word;
use crate::error::DefineError;
use crate::storage;

/// Mapping from lower-cased search term to the word resolved for it
pub type Cache = HashMap<String, Word>;

/// Name of the cache file inside the app cache directory
const CACHE_FILE: &str = "dict.json";

/// Load/save contract for the search-term cache
///
/// `save` replaces the persisted mapping entirely. There is no locking, so
/// concurrent processes follow last-writer-wins.
pub trait CacheStore {
    fn load(&self) -> Result<Cache, DefineError>;
    fn save(&self, cache: &Cache) -> Result<(), DefineError>;
}

/// Manages reading and writing the cache file
///
/// The cache file lives at `<user-cache-dir>/word-define/dict.json`
/// (`~/.cache/word-define/dict.json` on Linux).
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Full path of the JSON cache file
    path: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using the platform cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let base_dirs = BaseDirs::new()?;
        let path = base_dirs.cache_dir().join(APP_DIR).join(CACHE_FILE);
        Some(Self { path })
    }

    /// Creates a new CacheManager backed by a specific file
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> Result<(), DefineError> {
        match self.path.parent() {
            Some(dir) => {
                storage::create_private_dir(dir).map_err(|e| self.error("create directory for", e))
            }
            None => Ok(()),
        }
    }

    /// Writes `cache` to a sibling temp file and renames it over the cache
    fn replace_file(&self, cache: &Cache) -> Result<(), DefineError> {
        self.ensure_dir()?;

        let tmp_path = self.path.with_extension("json.tmp");
        storage::write_private_json(&tmp_path, cache).map_err(|e| self.error("write", e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.error("replace", e))
    }

    fn error(&self, action: &str, e: io::Error) -> DefineError {
        DefineError::Cache(format!("failed to {} {}: {}", action, self.path.display(), e))
    }
}

impl CacheStore for CacheManager {
    /// Reads the whole mapping
    ///
    /// A missing file is created as `{}`. A file that does not parse is reset
    /// to `{}` and read as empty.
    fn load(&self) -> Result<Cache, DefineError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "creating empty cache file");
                self.replace_file(&Cache::new())?;
                return Ok(Cache::new());
            }
            Err(e) => return Err(self.error("read", e)),
        };

        match serde_json::from_str(&content) {
            Ok(cache) => Ok(cache),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "cache file is corrupt, resetting to an empty cache"
                );
                self.replace_file(&Cache::new())?;
                Ok(Cache::new())
            }
        }
    }

    fn save(&self, cache: &Cache) -> Result<(), DefineError> {
        self.replace_file(cache)?;
        tracing::debug!(path = %self.path.display(), words = cache.len(), "cache saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Entry;
    use tempfile::TempDir;

    fn create_test_cache() -> (CacheManager, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = CacheManager::with_path(temp_dir.path().join(APP_DIR).join(CACHE_FILE));
        (cache, temp_dir)
    }

    fn sample_word(spelling: &str) -> Word {
        Word {
            spelling: spelling.to_string(),
            entries: vec![Entry {
                definition: format!("definition of {}", spelling),
                examples: vec![format!("an example with {}", spelling)],
                etymologies: vec!["Old English".to_string()],
            }],
        }
    }

    #[test]
    fn test_load_creates_empty_file_when_missing() {
        let (cache, _temp_dir) = create_test_cache();

        let words = cache.load().expect("Load should succeed");

        assert!(words.is_empty());
        assert!(cache.path().exists(), "Cache file should be created");
        assert_eq!(fs::read_to_string(cache.path()).unwrap(), "{}");
    }

    #[test]
    fn test_save_then_load_returns_same_mapping() {
        let (cache, _temp_dir) = create_test_cache();
        let mut words = Cache::new();
        words.insert("cat".to_string(), sample_word("cat"));
        words.insert("zzxq".to_string(), Word::default());

        cache.save(&words).expect("Save should succeed");
        let loaded = cache.load().expect("Load should succeed");

        assert_eq!(loaded, words);
    }

    #[test]
    fn test_save_overwrites_whole_mapping() {
        let (cache, _temp_dir) = create_test_cache();
        let mut first = Cache::new();
        first.insert("cat".to_string(), sample_word("cat"));
        let mut second = Cache::new();
        second.insert("dog".to_string(), sample_word("dog"));

        cache.save(&first).expect("First save should succeed");
        cache.save(&second).expect("Second save should succeed");

        let loaded = cache.load().expect("Load should succeed");
        assert_eq!(loaded, second, "Last writer should win");
        assert!(!cache.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reset_to_empty() {
        let (cache, _temp_dir) = create_test_cache();
        fs::create_dir_all(cache.path().parent().unwrap()).unwrap();
        fs::write(cache.path(), "{\"cat\": {\"Spelling\": ").unwrap();

        let words = cache.load().expect("Corrupt cache should self-heal");

        assert!(words.is_empty());
        assert_eq!(fs::read_to_string(cache.path()).unwrap(), "{}");
    }

    #[test]
    fn test_reads_file_written_by_older_release() {
        let (cache, _temp_dir) = create_test_cache();
        fs::create_dir_all(cache.path().parent().unwrap()).unwrap();
        fs::write(
            cache.path(),
            r#"{
              "cat": {
                "Spelling": "cat",
                "entries": [
                  {
                    "definition": "a small domesticated carnivorous mammal",
                    "examples": null,
                    "etymologies": ["Old English catt"]
                  }
                ]
              },
              "qwxz": {
                "Spelling": "",
                "entries": null
              }
            }"#,
        )
        .unwrap();

        let words = cache.load().expect("Load should succeed");

        assert_eq!(words.len(), 2);
        assert!(words["cat"].has_definition());
        assert!(words["cat"].entries[0].examples.is_empty());
        assert!(!words["qwxz"].has_definition());
    }

    #[test]
    fn test_unreadable_path_is_a_cache_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();
        let cache = CacheManager::with_path(blocker.join(CACHE_FILE));

        assert!(matches!(cache.load(), Err(DefineError::Cache(_))));
        assert!(matches!(cache.save(&Cache::new()), Err(DefineError::Cache(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_cache_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (cache, _temp_dir) = create_test_cache();
        let mut words = Cache::new();
        words.insert("cat".to_string(), sample_word("cat"));
        cache.save(&words).expect("Save should succeed");

        let file_mode = fs::metadata(cache.path()).unwrap().permissions().mode() & 0o777;
        let dir_mode = fs::metadata(cache.path().parent().unwrap()).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        assert_eq!(dir_mode, 0o700);
    }

    #[test]
    fn test_new_uses_app_directory() {
        if let Some(cache) = CacheManager::new() {
            assert!(cache.path().ends_with("word-define/dict.json"));
        }
        // Test passes if new() returns None (e.g., no home directory in CI)
    }
}
