//! The `ArtifactGenerator` trait: the pluggable "model" that turns an input
//! into an image on disk.

/// Produces one artifact per call and returns where it was written.
///
/// Implementations must return a path that did not exist before the call.
/// Generation is synchronous and may block on file I/O; async callers should
/// run it on a blocking thread.
pub trait ArtifactGenerator: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Generate an artifact for `input` and return its path.
  fn generate(&self, input: &str) -> Result<String, Self::Error>;
}
