//! JSON REST API for Flowlab.
//!
//! Exposes an axum [`Router`] backed by any [`FlowStore`] and
//! [`ArtifactGenerator`]. TLS, tracing layers and the listener are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = flowlab_api::api_router(AppState::new(store, generator));
//! ```

pub mod contracts;
pub mod demo;
pub mod error;
pub mod experiments;
pub mod info;
pub mod predictions;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use flowlab_core::{artifact::ArtifactGenerator, store::FlowStore};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, G> {
  pub store:     Arc<S>,
  pub generator: Arc<G>,
}

impl<S, G> AppState<S, G> {
  pub fn new(store: S, generator: G) -> Self {
    Self { store: Arc::new(store), generator: Arc::new(generator) }
  }
}

impl<S, G> Clone for AppState<S, G> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), generator: self.generator.clone() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// Collection routes answer both with and without a trailing slash.
pub fn api_router<S, G>(state: AppState<S, G>) -> Router<()>
where
  S: FlowStore + 'static,
  G: ArtifactGenerator + 'static,
{
  let experiments = get(experiments::list::<S, G>).post(experiments::create::<S, G>);
  let predictions = get(predictions::list::<S, G>).post(predictions::create::<S, G>);

  Router::new()
    .route("/", get(info::root))
    .route("/stats", get(info::stats::<S, G>))
    // Experiments
    .route("/experiments", experiments.clone())
    .route("/experiments/", experiments)
    .route(
      "/experiments/{id}",
      get(experiments::get_one::<S, G>).delete(experiments::delete_one::<S, G>),
    )
    // Predictions
    .route("/predictions", predictions.clone())
    .route("/predictions/", predictions)
    .route(
      "/predictions/{id}",
      post(predictions::generate::<S, G>).delete(predictions::delete_one::<S, G>),
    )
    .route(
      "/predictions/experiment/{experiment_id}",
      get(predictions::for_experiment::<S, G>),
    )
    // Demo data
    .route("/demo/populate", post(demo::populate::<S, G>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
