//! [`SqliteStore`] — the SQLite implementation of [`FlowStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use flowlab_core::{
  demo::{SeedExperiment, SeedSummary},
  experiment::{Experiment, NewExperiment},
  prediction::{NewPrediction, Prediction},
  store::{FlowStore, Stats},
};

use crate::{
  row::{self, EXPERIMENT_COLUMNS, PREDICTION_COLUMNS},
  schema::SCHEMA,
  Result,
};

const INSERT_EXPERIMENT: &str =
  "INSERT INTO experiments (name, parameters, description) VALUES (?1, ?2, ?3)";

const INSERT_PREDICTION: &str =
  "INSERT INTO predictions (experiment_id, input_value, output_path) VALUES (?1, ?2, ?3)";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Flowlab store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── FlowStore impl ──────────────────────────────────────────────────────────

impl FlowStore for SqliteStore {
  type Error = crate::Error;

  // ── Experiments ───────────────────────────────────────────────────────────

  async fn create_experiment(&self, input: NewExperiment) -> Result<Experiment> {
    let new = input.clone();

    // `None` means the name collided with an existing row.
    let id: Option<i64> = self
      .conn
      .call(move |conn| {
        match conn.execute(
          INSERT_EXPERIMENT,
          rusqlite::params![new.name, new.parameters, new.description],
        ) {
          Ok(_) => Ok(Some(conn.last_insert_rowid())),
          Err(e) if row::is_unique_violation(&e) => Ok(None),
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    let id = id.ok_or_else(|| flowlab_core::Error::DuplicateName(input.name.clone()))?;

    Ok(Experiment {
      id,
      name: input.name,
      parameters: input.parameters,
      description: input.description,
    })
  }

  async fn list_experiments(&self) -> Result<Vec<Experiment>> {
    let experiments = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {EXPERIMENT_COLUMNS} FROM experiments ORDER BY id"))?;
        let rows = stmt
          .query_map([], row::experiment)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(experiments)
  }

  async fn get_experiment(&self, id: i64) -> Result<Option<Experiment>> {
    let experiment = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {EXPERIMENT_COLUMNS} FROM experiments WHERE id = ?1"),
            rusqlite::params![id],
            row::experiment,
          )
          .optional()?)
      })
      .await?;
    Ok(experiment)
  }

  async fn delete_experiment(&self, id: i64) -> Result<bool> {
    let (removed, orphans) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let orphans =
          tx.execute("DELETE FROM predictions WHERE experiment_id = ?1", rusqlite::params![id])?;
        let removed = tx.execute("DELETE FROM experiments WHERE id = ?1", rusqlite::params![id])?;
        tx.commit()?;
        Ok((removed, orphans))
      })
      .await?;

    if removed > 0 {
      tracing::debug!(experiment_id = id, predictions = orphans, "deleted experiment");
    }
    Ok(removed > 0)
  }

  // ── Predictions ───────────────────────────────────────────────────────────

  async fn create_prediction(&self, input: NewPrediction) -> Result<Prediction> {
    let new = input.clone();

    // `None` means the referenced experiment does not exist.
    let id: Option<i64> = self
      .conn
      .call(move |conn| {
        match conn.execute(
          INSERT_PREDICTION,
          rusqlite::params![new.experiment_id, new.input_value, new.output_path],
        ) {
          Ok(_) => Ok(Some(conn.last_insert_rowid())),
          Err(e) if row::is_foreign_key_violation(&e) => Ok(None),
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    let id = id.ok_or(flowlab_core::Error::ExperimentNotFound(input.experiment_id))?;

    Ok(Prediction {
      id,
      experiment_id: input.experiment_id,
      input_value: input.input_value,
      output_path: input.output_path,
    })
  }

  async fn list_predictions(&self) -> Result<Vec<Prediction>> {
    let predictions = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {PREDICTION_COLUMNS} FROM predictions ORDER BY id"))?;
        let rows = stmt
          .query_map([], row::prediction)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(predictions)
  }

  async fn predictions_for_experiment(&self, experiment_id: i64) -> Result<Vec<Prediction>> {
    let predictions = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PREDICTION_COLUMNS} FROM predictions WHERE experiment_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![experiment_id], row::prediction)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(predictions)
  }

  async fn delete_prediction(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM predictions WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(removed > 0)
  }

  // ── Whole-store ───────────────────────────────────────────────────────────

  async fn reseed(&self, seed: &[SeedExperiment]) -> Result<SeedSummary> {
    let seed = seed.to_vec();

    let summary = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM predictions", [])?;
        tx.execute("DELETE FROM experiments", [])?;

        let mut summary = SeedSummary::default();
        for entry in &seed {
          let e = &entry.experiment;
          tx.execute(
            INSERT_EXPERIMENT,
            rusqlite::params![e.name, e.parameters, e.description],
          )?;
          let experiment_id = tx.last_insert_rowid();
          summary.experiments_created += 1;

          for p in &entry.predictions {
            tx.execute(
              INSERT_PREDICTION,
              rusqlite::params![experiment_id, p.input_value, p.output_path],
            )?;
            summary.predictions_created += 1;
          }
        }

        tx.commit()?;
        Ok(summary)
      })
      .await?;

    Ok(summary)
  }

  async fn stats(&self) -> Result<Stats> {
    let (experiments, predictions): (i64, i64) = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT (SELECT COUNT(*) FROM experiments), (SELECT COUNT(*) FROM predictions)",
          [],
          |r| Ok((r.get(0)?, r.get(1)?)),
        )?)
      })
      .await?;

    Ok(Stats {
      experiments: experiments.unsigned_abs(),
      predictions: predictions.unsigned_abs(),
    })
  }
}
