//! JSON request and response bodies.
//!
//! Read payloads are the core types themselves
//! ([`Experiment`](flowlab_core::experiment::Experiment),
//! [`Prediction`](flowlab_core::prediction::Prediction)), which carry an `id`.
//! Create payloads below never do.

use flowlab_core::{demo::SeedSummary, experiment::NewExperiment, store::Stats};
use serde::{Deserialize, Serialize};

// ─── Requests ─────────────────────────────────────────────────────────────────

/// Body of `POST /experiments/`.
#[derive(Debug, Deserialize)]
pub struct ExperimentBody {
  pub name:        String,
  pub parameters:  String,
  pub description: String,
}

impl From<ExperimentBody> for NewExperiment {
  fn from(b: ExperimentBody) -> Self {
    NewExperiment {
      name:        b.name,
      parameters:  b.parameters,
      description: b.description,
    }
  }
}

/// Body of `POST /predictions/`.
///
/// With `output_path` the caller supplies the artifact; without it one is
/// generated from `input_data` (or from `input_value` when that is absent too).
#[derive(Debug, Deserialize)]
pub struct PredictionBody {
  pub experiment_id: i64,
  pub input_value:   f64,
  pub output_path:   Option<String>,
  pub input_data:    Option<String>,
}

/// Body of `POST /predictions/{experiment_id}`; always generates the artifact.
#[derive(Debug, Deserialize)]
pub struct GenerateBody {
  pub input_data:  String,
  #[serde(default)]
  pub input_value: f64,
}

// ─── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
  pub message: String,
}

impl MessageResponse {
  pub fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PopulateResponse {
  pub message:             String,
  pub experiments_created: usize,
  pub predictions_created: usize,
  pub next_steps:          Vec<String>,
}

impl From<SeedSummary> for PopulateResponse {
  fn from(s: SeedSummary) -> Self {
    PopulateResponse {
      message:             "Demo data populated successfully!".to_owned(),
      experiments_created: s.experiments_created,
      predictions_created: s.predictions_created,
      next_steps:          [
        "Visit /experiments/ to see all experiments",
        "Visit /predictions/ to see all predictions",
        "Try /experiments/1 to get specific experiment",
        "Visit /stats for row counts",
      ]
      .map(str::to_owned)
      .to_vec(),
    }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
  pub database:          String,
  pub total_experiments: u64,
  pub total_predictions: u64,
  pub status:            String,
}

impl From<Stats> for StatsResponse {
  fn from(s: Stats) -> Self {
    StatsResponse {
      database:          "SQLite".to_owned(),
      total_experiments: s.experiments,
      total_predictions: s.predictions,
      status:            "Database connected and operational".to_owned(),
    }
  }
}
