//! Collector: pulls places from the directory and grows the accumulated table.
//!
//! Flow: directory search → normalize → merge into the accumulated table
//! (last write per (name, address) wins) → record the search context.

pub mod handlers;
pub mod merge;
pub mod normalize;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::directory::{PlacesDirectory, PAGE_SIZE};
use crate::errors::AppError;
use crate::models::PlaceRecord;
use crate::storage::{read_table, write_table, KeyValueStore, SearchContext, TableStore};

use merge::merge_last_wins;
use normalize::normalize_item;

const SAMPLE_SIZE: usize = 3;

/// Result of one collection run.
#[derive(Debug)]
pub enum CollectOutcome {
    NoResults,
    Saved {
        count_new: usize,
        total_saved: usize,
        file: PathBuf,
        /// Tail of the merged table.
        sample: Vec<PlaceRecord>,
    },
}

pub async fn collect_places(
    directory: &dyn PlacesDirectory,
    tables: &TableStore,
    context_store: &dyn KeyValueStore,
    query: &str,
    city: &str,
    region_id: i64,
) -> Result<CollectOutcome, AppError> {
    let items = directory.search(query, region_id, PAGE_SIZE).await?;
    if items.is_empty() {
        info!(query, city, "Directory returned no places");
        return Ok(CollectOutcome::NoResults);
    }

    let incoming: Vec<PlaceRecord> = items
        .iter()
        .map(|item| normalize_item(item, query, city))
        .collect();
    let count_new = incoming.len();

    let path = tables.raw_path();
    let existing = load_existing(&path);
    let merged = merge_last_wins(existing, incoming);
    write_table(&path, &merged)?;

    SearchContext::new(query, city).save(context_store)?;

    info!(
        query,
        city,
        count_new,
        total_saved = merged.len(),
        "Places collected into {}",
        path.display()
    );

    let sample = merged[merged.len().saturating_sub(SAMPLE_SIZE)..].to_vec();
    Ok(CollectOutcome::Saved {
        count_new,
        total_saved: merged.len(),
        file: path,
        sample,
    })
}

/// Loads the accumulated table, discarding it if it cannot be read.
fn load_existing(path: &std::path::Path) -> Vec<PlaceRecord> {
    match read_table::<PlaceRecord>(path) {
        Ok(Some(table)) => table.rows,
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Discarding unreadable table {}: {e}", path.display());
            Vec::new()
        }
    }
}
