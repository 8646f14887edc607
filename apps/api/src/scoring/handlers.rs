use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::ScoredPlace;
use crate::scoring::run_analysis;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub query: String,
    pub city: String,
    pub count: usize,
    pub output: String,
    pub sample: Vec<ScoredPlace>,
}

/// GET /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let outcome = run_analysis(&state.tables, state.context_store.as_ref())?;

    Ok(Json(AnalyzeResponse {
        status: "done",
        query: outcome.context.query,
        city: outcome.context.city,
        count: outcome.count,
        output: outcome.output.display().to_string(),
        sample: outcome.sample,
    }))
}
