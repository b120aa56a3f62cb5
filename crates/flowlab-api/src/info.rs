//! Handlers for `GET /` and `GET /stats`.

use axum::{Json, extract::State};
use flowlab_core::{artifact::ArtifactGenerator, store::FlowStore};
use serde_json::{Value, json};

use crate::{AppState, contracts::StatsResponse, error::ApiError};

/// `GET /` — liveness plus a map of the main endpoints.
pub async fn root() -> Json<Value> {
  Json(json!({
    "message":  "Backend connected successfully!",
    "database": "SQLite",
    "endpoints": {
      "experiments": "/experiments/",
      "predictions": "/predictions/",
      "demo_data":   "/demo/populate",
      "stats":       "/stats",
    },
  }))
}

/// `GET /stats`
pub async fn stats<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<StatsResponse>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let stats = state.store.stats().await.map_err(ApiError::store)?;
  Ok(Json(StatsResponse::from(stats)))
}
