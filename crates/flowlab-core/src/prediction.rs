//! Prediction: one model run for an experiment and the artifact it produced.

use serde::{Deserialize, Serialize};

/// A persisted prediction. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
  pub id:            i64,
  pub experiment_id: i64,
  pub input_value:   f64,
  /// Filesystem path (or URL-like string) of the generated image.
  pub output_path:   String,
}

/// Input for [`FlowStore::create_prediction`](crate::store::FlowStore::create_prediction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPrediction {
  pub experiment_id: i64,
  pub input_value:   f64,
  pub output_path:   String,
}

impl NewPrediction {
  pub fn new(experiment_id: i64, input_value: f64, output_path: impl Into<String>) -> Self {
    Self { experiment_id, input_value, output_path: output_path.into() }
  }
}
