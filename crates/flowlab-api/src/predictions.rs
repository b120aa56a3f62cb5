//! Handlers for `/predictions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/predictions/` | All predictions |
//! | `POST`   | `/predictions/` | Body: [`PredictionBody`]; generates an artifact unless `output_path` is given |
//! | `POST`   | `/predictions/:experiment_id` | Body: [`GenerateBody`]; always generates |
//! | `GET`    | `/predictions/experiment/:experiment_id` | Possibly empty |
//! | `DELETE` | `/predictions/:id` | 404 if not found |
//!
//! Both `POST` routes funnel into [`record`], so a prediction is stored the
//! same way regardless of how it was requested.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use flowlab_core::{
  artifact::ArtifactGenerator,
  prediction::{NewPrediction, Prediction},
  store::FlowStore,
};

use crate::{
  AppState,
  contracts::{GenerateBody, MessageResponse, PredictionBody},
  error::ApiError,
};

// ─── Unified creation ─────────────────────────────────────────────────────────

/// Where the artifact of a new prediction comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactSource {
  /// The caller already has the artifact at this path.
  Supplied(String),
  /// Run the generator with this input.
  Generate(String),
}

/// A prediction to record, independent of the route it arrived on.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
  pub experiment_id: i64,
  pub input_value:   f64,
  pub artifact:      ArtifactSource,
}

impl From<PredictionBody> for PredictionRequest {
  fn from(b: PredictionBody) -> Self {
    let artifact = match (b.output_path, b.input_data) {
      (Some(path), _) => ArtifactSource::Supplied(path),
      (None, Some(input)) => ArtifactSource::Generate(input),
      (None, None) => ArtifactSource::Generate(b.input_value.to_string()),
    };
    PredictionRequest {
      experiment_id: b.experiment_id,
      input_value: b.input_value,
      artifact,
    }
  }
}

/// Resolve the artifact path and persist the prediction.
///
/// The experiment is checked before generating so a rejected request never
/// leaves an image behind.
pub async fn record<S, G>(
  state: &AppState<S, G>,
  request: PredictionRequest,
) -> Result<Prediction, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let output_path = match request.artifact {
    ArtifactSource::Supplied(path) => path,
    ArtifactSource::Generate(input) => {
      state
        .store
        .get_experiment(request.experiment_id)
        .await
        .map_err(ApiError::store)?
        .ok_or_else(|| ApiError::NotFound("Experiment not found".to_owned()))?;

      let generator = state.generator.clone();
      tokio::task::spawn_blocking(move || generator.generate(&input))
        .await
        .map_err(|e| ApiError::Internal(format!("artifact task failed: {e}")))?
        .map_err(|e| ApiError::Artifact(Box::new(e)))?
    }
  };

  let prediction = state
    .store
    .create_prediction(NewPrediction {
      experiment_id: request.experiment_id,
      input_value: request.input_value,
      output_path,
    })
    .await
    .map_err(ApiError::store)?;

  tracing::info!(
    id = prediction.id,
    experiment_id = prediction.experiment_id,
    output_path = %prediction.output_path,
    "recorded prediction"
  );
  Ok(prediction)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /predictions/`
pub async fn list<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<Vec<Prediction>>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let predictions = state.store.list_predictions().await.map_err(ApiError::store)?;
  Ok(Json(predictions))
}

/// `GET /predictions/experiment/:experiment_id`
pub async fn for_experiment<S, G>(
  State(state): State<AppState<S, G>>,
  Path(experiment_id): Path<i64>,
) -> Result<Json<Vec<Prediction>>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let predictions = state
    .store
    .predictions_for_experiment(experiment_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(predictions))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /predictions/` — returns 201 + the stored [`Prediction`].
pub async fn create<S, G>(
  State(state): State<AppState<S, G>>,
  Json(body): Json<PredictionBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let prediction = record(&state, PredictionRequest::from(body)).await?;
  Ok((StatusCode::CREATED, Json(prediction)))
}

/// `POST /predictions/:experiment_id` — runs the generator on `input_data`.
pub async fn generate<S, G>(
  State(state): State<AppState<S, G>>,
  Path(experiment_id): Path<i64>,
  Json(body): Json<GenerateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let request = PredictionRequest {
    experiment_id,
    input_value: body.input_value,
    artifact: ArtifactSource::Generate(body.input_data),
  };
  let prediction = record(&state, request).await?;
  Ok((StatusCode::CREATED, Json(prediction)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /predictions/:id`
pub async fn delete_one<S, G>(
  State(state): State<AppState<S, G>>,
  Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  if !state.store.delete_prediction(id).await.map_err(ApiError::store)? {
    return Err(ApiError::NotFound("Prediction not found".to_owned()));
  }
  tracing::info!(id, "deleted prediction");
  Ok(Json(MessageResponse::new("Prediction deleted successfully")))
}
