//! Handler for `POST /demo/populate`.

use axum::{Json, extract::State};
use flowlab_core::{artifact::ArtifactGenerator, demo::demo_dataset, store::FlowStore};

use crate::{AppState, contracts::PopulateResponse, error::ApiError};

/// `POST /demo/populate` — wipe every row and load the demo dataset.
///
/// The reset and the reseed commit together, so running this twice still
/// leaves exactly the demo rows.
pub async fn populate<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<PopulateResponse>, ApiError>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let summary = state
    .store
    .reseed(&demo_dataset())
    .await
    .map_err(|e| ApiError::Internal(format!("Error populating data: {e}")))?;

  tracing::info!(
    experiments = summary.experiments_created,
    predictions = summary.predictions_created,
    "populated demo data"
  );
  Ok(Json(PopulateResponse::from(summary)))
}
