//! Error types for the flowlab-artifact generator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to write artifact: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to encode png: {0}")]
  Encode(#[from] png::EncodingError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
