//! Experiment: a named simulation setup that predictions are recorded against.

use serde::{Deserialize, Serialize};

/// A persisted experiment. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
  pub id:          i64,
  /// Unique across the store.
  pub name:        String,
  /// Free-form parameter description, e.g. `"Re=1000, viscosity=0.001"`.
  pub parameters:  String,
  pub description: String,
}

/// Input for [`FlowStore::create_experiment`](crate::store::FlowStore::create_experiment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExperiment {
  pub name:        String,
  pub parameters:  String,
  pub description: String,
}

impl NewExperiment {
  pub fn new(
    name: impl Into<String>,
    parameters: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      name:        name.into(),
      parameters:  parameters.into(),
      description: description.into(),
    }
  }
}
