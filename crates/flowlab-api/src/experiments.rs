//! Handlers for `/experiments` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/experiments/` | All experiments |
//! | `POST`   | `/experiments/` | Body: [`ExperimentBody`]; 201, or 409 on a duplicate name |
//! | `GET`    | `/experiments/:id` | 404 if not found |
//! | `DELETE` | `/experiments/:id` | Also deletes its predictions; 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use flowlab_core::{
  artifact::ArtifactGenerator,
  experiment::{Experiment, NewExperiment},
  store::FlowStore,
};

use crate::{
  AppState,
  contracts::{ExperimentBody, MessageResponse},
  error::ApiError,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /experiments/`
pub async fn list<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<Vec<Experiment>>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let experiments = state.store.list_experiments().await.map_err(ApiError::store)?;
  Ok(Json(experiments))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /experiments/` — returns 201 + the stored [`Experiment`].
pub async fn create<S, G>(
  State(state): State<AppState<S, G>>,
  Json(body): Json<ExperimentBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let experiment = state
    .store
    .create_experiment(NewExperiment::from(body))
    .await
    .map_err(ApiError::store)?;
  tracing::info!(id = experiment.id, name = %experiment.name, "created experiment");
  Ok((StatusCode::CREATED, Json(experiment)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /experiments/:id`
pub async fn get_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(id): Path<i64>,
) -> Result<Json<Experiment>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let experiment = state
    .store
    .get_experiment(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Experiment not found".to_owned()))?;
  Ok(Json(experiment))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /experiments/:id`
pub async fn delete_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  if !state.store.delete_experiment(id).await.map_err(ApiError::store)? {
    return Err(ApiError::NotFound("Experiment not found".to_owned()));
  }
  tracing::info!(id, "deleted experiment");
  Ok(Json(MessageResponse::new("Experiment deleted successfully")))
}
