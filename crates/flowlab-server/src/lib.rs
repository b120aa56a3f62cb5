//! Wiring for the Flowlab HTTP server: configuration loading and assembly of
//! the SQLite store, the noise generator and the API router.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::Router;
use flowlab_api::AppState;
use flowlab_artifact::NoiseImageGenerator;
use flowlab_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Prefix for environment overrides, e.g. `FLOWLAB_PORT=9000`.
pub const ENV_PREFIX: &str = "FLOWLAB";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file; a leading `~/` is expanded.
  pub store_path: PathBuf,
  /// Directory that generated images are written into.
  pub output_dir: PathBuf,
}

impl ServerConfig {
  /// Layer defaults, the optional TOML file at `path`, then `FLOWLAB_*`
  /// environment variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000_i64)?
      .set_default("store_path", "fluidflow.db")?
      .set_default("output_dir", "outputs")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Assembly ────────────────────────────────────────────────────────────────

/// Open the store named by `config` and build the traced application router.
pub async fn build_app(config: &ServerConfig) -> anyhow::Result<Router> {
  let store_path = expand_tilde(&config.store_path);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let generator = NoiseImageGenerator::new(expand_tilde(&config.output_dir));

  tracing::info!(
    store = %store_path.display(),
    outputs = %generator.output_dir().display(),
    "opened store"
  );

  Ok(
    flowlab_api::api_router(AppState::new(store, generator))
      .layer(TraceLayer::new_for_http()),
  )
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.store_path, PathBuf::from("fluidflow.db"));
    assert_eq!(cfg.output_dir, PathBuf::from("outputs"));
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 9123\noutput_dir = \"/srv/flow\"\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();

    assert_eq!(cfg.port, 9123);
    assert_eq!(cfg.output_dir, PathBuf::from("/srv/flow"));
    assert_eq!(cfg.store_path, PathBuf::from("fluidflow.db"));
  }

  #[test]
  fn paths_without_tilde_are_untouched() {
    assert_eq!(expand_tilde(Path::new("/var/db.sqlite")), PathBuf::from("/var/db.sqlite"));
    assert_eq!(expand_tilde(Path::new("rel/db")), PathBuf::from("rel/db"));
  }

  #[tokio::test]
  async fn built_app_serves_stats_from_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig {
      host:       "127.0.0.1".to_owned(),
      port:       0,
      store_path: dir.path().join("flow.db"),
      output_dir: dir.path().join("outputs"),
    };

    let app = build_app(&cfg).await.unwrap();
    let resp = app
      .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
      .await
      .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["total_experiments"], 0);
    assert!(dir.path().join("flow.db").exists());
  }
}
