use axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::CorsLayer;

use api::{DatasetEnvelope, Record};

use crate::state::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn get_data(State(state): State<SharedState>) -> Json<DatasetEnvelope<Record>> {
    tracing::debug!(records = state.dataset.len(), "serving dataset");
    Json(DatasetEnvelope {
        message: state.message.clone(),
        data: state.dataset.records().to_vec(),
    })
}

async fn health() -> &'static str {
    "ok"
}
