use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::collector::{collect_places, CollectOutcome};
use crate::errors::AppError;
use crate::models::PlaceRecord;
use crate::state::AppState;

fn default_query() -> String {
    "глэмпинг".to_string()
}

fn default_city() -> String {
    "Алматы".to_string()
}

fn default_region_id() -> i64 {
    12
}

#[derive(Debug, Deserialize)]
pub struct PlacesParams {
    #[serde(default = "default_query")]
    pub query: String,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_region_id")]
    pub region_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlacesResponse {
    Saved {
        status: &'static str,
        query: String,
        city: String,
        count_new: usize,
        total_saved: usize,
        file: String,
        sample: Vec<PlaceRecord>,
    },
    NoResults {
        status: &'static str,
        query: String,
        city: String,
    },
}

/// GET /api/places
pub async fn handle_collect(
    State(state): State<AppState>,
    Query(params): Query<PlacesParams>,
) -> Result<Json<PlacesResponse>, AppError> {
    let outcome = collect_places(
        state.directory.as_ref(),
        &state.tables,
        state.context_store.as_ref(),
        &params.query,
        &params.city,
        params.region_id,
    )
    .await?;

    let response = match outcome {
        CollectOutcome::NoResults => PlacesResponse::NoResults {
            status: "no_results",
            query: params.query,
            city: params.city,
        },
        CollectOutcome::Saved {
            count_new,
            total_saved,
            file,
            sample,
        } => PlacesResponse::Saved {
            status: "success",
            query: params.query,
            city: params.city,
            count_new,
            total_saved,
            file: file.display().to_string(),
            sample,
        },
    };

    Ok(Json(response))
}
