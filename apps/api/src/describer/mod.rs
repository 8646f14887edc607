//! Describer: enriches the shortlist with generated marketing copy.
//!
//! Per-row failures never abort the batch: they land in the `description`
//! column as placeholders starting with `ERROR_MARKER`.

pub mod handlers;
pub mod worker;

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::build_description_prompt;
use crate::llm_client::TextGenerator;
use crate::models::ScoredPlace;
use crate::storage::{read_table, write_table, TableStore};

pub use worker::{spawn_generation, GenerationJob, RetryPolicy, ERROR_MARKER};

const SAMPLE_SIZE: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct DescriptionSample {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct DescribeOutcome {
    pub count: usize,
    pub success: usize,
    pub failed: usize,
    pub output: PathBuf,
    pub time_sec: f64,
    pub finished_at: String,
    pub sample: Vec<DescriptionSample>,
}

/// Describes the first `limit` rows of the scored table and writes them to
/// the final table.
pub async fn run_description(
    tables: &TableStore,
    generator: Arc<dyn TextGenerator>,
    policy: RetryPolicy,
    concurrency: usize,
    limit: usize,
) -> Result<DescribeOutcome, AppError> {
    let input = tables.scored_path();
    let mut rows = read_table::<ScoredPlace>(&input)?
        .ok_or_else(|| AppError::MissingInput {
            path: input.display().to_string(),
            hint: "/api/analyze",
        })?
        .rows;
    rows.truncate(limit);
    if rows.is_empty() {
        return Err(AppError::EmptyData(
            "The analyzed table is empty, nothing to describe.".to_string(),
        ));
    }

    info!(count = rows.len(), concurrency, "Starting description batch");
    let start = tokio::time::Instant::now();

    let jobs: Vec<GenerationJob> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| GenerationJob {
            index,
            label: row.name.clone(),
            prompt: build_description_prompt(&row.name, row.category_type.label(), &row.address),
        })
        .collect();

    let mut outcomes = spawn_generation(jobs, generator, policy, concurrency);
    let mut success = 0;
    while let Some(outcome) = outcomes.recv().await {
        if outcome.is_success() {
            success += 1;
        }
        if let Some(row) = rows.get_mut(outcome.index) {
            row.description = outcome.text;
        }
    }

    let output = tables.final_path();
    write_table(&output, &rows)?;

    let time_sec = (start.elapsed().as_secs_f64() * 100.0).round() / 100.0;
    let finished_at = chrono::Local::now().format("%H:%M:%S").to_string();
    let failed = rows.len() - success;

    info!(
        success,
        failed,
        time_sec,
        "Descriptions written to {}",
        output.display()
    );

    Ok(DescribeOutcome {
        count: rows.len(),
        success,
        failed,
        output,
        time_sec,
        finished_at,
        sample: rows
            .iter()
            .take(SAMPLE_SIZE)
            .map(|r| DescriptionSample {
                name: r.name.clone(),
                description: r.description.clone(),
            })
            .collect(),
    })
}
