pub mod health;

use axum::{routing::get, Router};

use crate::collector::handlers::handle_collect;
use crate::describer::handlers::handle_generate;
use crate::reports::handlers::{handle_export, handle_stats};
use crate::scoring::handlers::handle_analyze;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/hello/:name", get(health::hello_handler))
        .route("/health", get(health::health_handler))
        // Pipeline stages
        .route("/api/places", get(handle_collect))
        .route("/api/analyze", get(handle_analyze))
        .route("/api/generate", get(handle_generate))
        // Reports
        .route("/api/stats/getstats", get(handle_stats))
        .route("/api/export", get(handle_export))
        .with_state(state)
}
