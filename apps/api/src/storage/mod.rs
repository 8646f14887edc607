//! CSV-backed tables that chain the three pipeline stages together.
//!
//! There is no locking: each table is assumed to have a single writer at a
//! time, and concurrent writers race with last-writer-wins semantics.

pub mod kv;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use kv::{FileKeyValueStore, KeyValueStore, SearchContext};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Row types with a fixed column layout. `COLUMNS` must list the serialized
/// field names in order; it is written as the header of an empty table.
pub trait Columns {
    const COLUMNS: &'static [&'static str];
}

/// Rows read from a table together with the header row they were read under.
#[derive(Debug, Clone)]
pub struct Table<T> {
    pub headers: Vec<String>,
    pub rows: Vec<T>,
}

impl<T> Table<T> {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolves the on-disk locations of the pipeline tables under one data root.
#[derive(Debug, Clone)]
pub struct TableStore {
    root: PathBuf,
}

impl TableStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Accumulated table written by the collector.
    pub fn raw_path(&self) -> PathBuf {
        self.root.join("raw").join("places.csv")
    }

    /// Top-ranked table written by the scorer.
    pub fn scored_path(&self) -> PathBuf {
        self.root.join("processed").join("analyzed.csv")
    }

    /// Described table written by the describer.
    pub fn final_path(&self) -> PathBuf {
        self.root.join("processed").join("final.csv")
    }

    /// Directory holding the search-context markers.
    pub fn meta_dir(&self) -> PathBuf {
        self.root.join("meta")
    }
}

/// Reads a headed CSV table. Returns `Ok(None)` when the file does not exist;
/// an existing empty file reads as an empty table.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Option<Table<T>>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let rows = reader
        .deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Table { headers, rows }))
}

/// Writes rows as a headed CSV table, replacing any previous content.
/// An empty table still gets its header row. Parent directories are created
/// as needed.
pub fn write_table<T: Serialize + Columns>(path: &Path, rows: &[T]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        writer.write_record(T::COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
