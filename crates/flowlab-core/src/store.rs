//! The `FlowStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g. `flowlab-store-sqlite`).
//! The HTTP layer (`flowlab-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{
  demo::{SeedExperiment, SeedSummary},
  error::DomainError,
  experiment::{Experiment, NewExperiment},
  prediction::{NewPrediction, Prediction},
};

/// Row counts across the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
  pub experiments: u64,
  pub predictions: u64,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Flowlab store backend.
///
/// Every mutating call commits before it returns; there is no transaction
/// spanning several calls.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait FlowStore: Send + Sync {
  type Error: std::error::Error + DomainError + Send + Sync + 'static;

  // ── Experiments ───────────────────────────────────────────────────────

  /// Persist a new experiment and return it with its assigned id.
  ///
  /// Fails with [`Error::DuplicateName`](crate::Error::DuplicateName) if the
  /// name is taken.
  fn create_experiment(
    &self,
    input: NewExperiment,
  ) -> impl Future<Output = Result<Experiment, Self::Error>> + Send + '_;

  /// All experiments, in insertion order.
  fn list_experiments(
    &self,
  ) -> impl Future<Output = Result<Vec<Experiment>, Self::Error>> + Send + '_;

  /// Retrieve an experiment by id. Returns `None` if not found.
  fn get_experiment(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Experiment>, Self::Error>> + Send + '_;

  /// Delete an experiment together with all of its predictions.
  ///
  /// Returns `false` if no experiment had this id.
  fn delete_experiment(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Predictions ───────────────────────────────────────────────────────

  /// Persist a new prediction and return it with its assigned id.
  ///
  /// Fails with [`Error::ExperimentNotFound`](crate::Error::ExperimentNotFound)
  /// if `input.experiment_id` does not exist.
  fn create_prediction(
    &self,
    input: NewPrediction,
  ) -> impl Future<Output = Result<Prediction, Self::Error>> + Send + '_;

  /// All predictions, in insertion order.
  fn list_predictions(
    &self,
  ) -> impl Future<Output = Result<Vec<Prediction>, Self::Error>> + Send + '_;

  /// Predictions recorded against `experiment_id`. Empty both when the
  /// experiment has none and when it does not exist.
  fn predictions_for_experiment(
    &self,
    experiment_id: i64,
  ) -> impl Future<Output = Result<Vec<Prediction>, Self::Error>> + Send + '_;

  /// Delete a prediction. Returns `false` if no prediction had this id.
  fn delete_prediction(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Whole-store ───────────────────────────────────────────────────────

  /// Remove every row, then insert `seed`. Either all of it happens or none.
  fn reseed<'a>(
    &'a self,
    seed: &'a [SeedExperiment],
  ) -> impl Future<Output = Result<SeedSummary, Self::Error>> + Send + 'a;

  /// Row counts for both tables.
  fn stats(&self) -> impl Future<Output = Result<Stats, Self::Error>> + Send + '_;
}
