use std::fs;
use std::path::PathBuf;

use crate::storage::StorageError;

const LAST_QUERY_KEY: &str = "last_query";
const LAST_CITY_KEY: &str = "last_city";

/// Small string-valued store for state handed from one stage to the next.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.txt`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.txt"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// The most recent collector search, used by the scorer to narrow its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
    pub query: String,
    pub city: String,
}

impl SearchContext {
    pub fn new(query: &str, city: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            city: city.trim().to_string(),
        }
    }

    /// Persists the trimmed query and city, overwriting the previous search.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.put(LAST_QUERY_KEY, self.query.trim())?;
        store.put(LAST_CITY_KEY, self.city.trim())?;
        Ok(())
    }

    /// Loads the last search, trimmed and lower-cased. Absent keys read as "".
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let read = |key: &str| -> Result<String, StorageError> {
            Ok(store
                .get(key)?
                .map(|v| v.trim().to_lowercase())
                .unwrap_or_default())
        };
        Ok(Self {
            query: read(LAST_QUERY_KEY)?,
            city: read(LAST_CITY_KEY)?,
        })
    }
}
