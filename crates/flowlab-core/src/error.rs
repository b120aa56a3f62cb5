//! Error types for `flowlab-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("experiment not found: {0}")]
  ExperimentNotFound(i64),

  #[error("an experiment named {0:?} already exists")]
  DuplicateName(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Lets callers recognise domain failures inside a backend's own error type.
///
/// Backends wrap [`Error`] in a variant of their error enum; higher layers
/// (the HTTP API) only ever see the backend type through
/// [`FlowStore::Error`](crate::store::FlowStore::Error).
pub trait DomainError {
  /// The wrapped domain error, if this is one.
  fn domain(&self) -> Option<&Error>;
}

impl DomainError for Error {
  fn domain(&self) -> Option<&Error> { Some(self) }
}
