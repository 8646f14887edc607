use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::describer::{run_description, DescriptionSample};
use crate::errors::AppError;
use crate::state::AppState;

fn default_limit() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: &'static str,
    pub count: usize,
    pub success: usize,
    pub failed: usize,
    pub output: String,
    pub time_sec: f64,
    pub finished_at: String,
    pub sample: Vec<DescriptionSample>,
}

/// GET /api/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<GenerateResponse>, AppError> {
    let outcome = run_description(
        &state.tables,
        Arc::clone(&state.llm),
        state.retry_policy,
        state.config.generation_concurrency,
        params.limit,
    )
    .await?;

    Ok(Json(GenerateResponse {
        status: "done",
        count: outcome.count,
        success: outcome.success,
        failed: outcome.failed,
        output: outcome.output.display().to_string(),
        time_sec: outcome.time_sec,
        finished_at: outcome.finished_at,
        sample: outcome.sample,
    }))
}
