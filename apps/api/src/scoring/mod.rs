//! Scorer: turns the accumulated table into a ranked shortlist.
//!
//! Pure-Rust keyword heuristics: fast, deterministic, no external calls.

pub mod handlers;
pub mod keywords;
pub mod metrics;
pub mod pipeline;
pub mod rating;

use std::path::PathBuf;

use tracing::info;

use crate::errors::AppError;
use crate::models::{PlaceRecord, ScoredPlace};
use crate::storage::{read_table, write_table, KeyValueStore, SearchContext, TableStore};

pub use metrics::calc_metrics;
pub use pipeline::analyze;
pub use rating::{calc_rating, detect_category};

const SAMPLE_SIZE: usize = 3;

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub context: SearchContext,
    pub count: usize,
    pub output: PathBuf,
    pub sample: Vec<ScoredPlace>,
}

/// Scores the accumulated table against the last search and writes the
/// shortlist. Nothing is written when the input table is empty.
pub fn run_analysis(
    tables: &TableStore,
    context_store: &dyn KeyValueStore,
) -> Result<AnalysisOutcome, AppError> {
    let input = tables.raw_path();
    let table = read_table::<PlaceRecord>(&input)?.ok_or_else(|| AppError::MissingInput {
        path: input.display().to_string(),
        hint: "/api/places",
    })?;
    if table.is_empty() {
        return Err(AppError::EmptyData(
            "The places table is empty, nothing to analyze.".to_string(),
        ));
    }

    let context = SearchContext::load(context_store)?;
    let shortlist = analyze(table, &context);

    let output = tables.scored_path();
    write_table(&output, &shortlist)?;

    info!(
        query = %context.query,
        city = %context.city,
        count = shortlist.len(),
        "Analysis written to {}",
        output.display()
    );

    Ok(AnalysisOutcome {
        count: shortlist.len(),
        sample: shortlist.into_iter().take(SAMPLE_SIZE).collect(),
        context,
        output,
    })
}
