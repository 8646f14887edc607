use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::ScoredPlace;
use crate::reports::{export_final, shortlist_stats, ShortlistStats};
use crate::state::AppState;

/// GET /api/stats/getstats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<ShortlistStats>, AppError> {
    Ok(Json(shortlist_stats(&state.tables)?))
}

/// GET /api/export
pub async fn handle_export(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoredPlace>>, AppError> {
    Ok(Json(export_final(&state.tables)?))
}
