//! Row mapping between SQLite result rows and the core domain types.

use flowlab_core::{experiment::Experiment, prediction::Prediction};
use rusqlite::{Row, ffi};

pub const EXPERIMENT_COLUMNS: &str = "id, name, parameters, description";
pub const PREDICTION_COLUMNS: &str = "id, experiment_id, input_value, output_path";

pub fn experiment(row: &Row<'_>) -> rusqlite::Result<Experiment> {
  Ok(Experiment {
    id:          row.get(0)?,
    name:        row.get(1)?,
    parameters:  row.get(2)?,
    description: row.get(3)?,
  })
}

pub fn prediction(row: &Row<'_>) -> rusqlite::Result<Prediction> {
  Ok(Prediction {
    id:            row.get(0)?,
    experiment_id: row.get(1)?,
    input_value:   row.get(2)?,
    output_path:   row.get(3)?,
  })
}

/// The extended result code of a failed statement, if SQLite reported one.
fn extended_code(err: &rusqlite::Error) -> Option<i32> {
  match err {
    rusqlite::Error::SqliteFailure(e, _) => Some(e.extended_code),
    _ => None,
  }
}

pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
  extended_code(err) == Some(ffi::SQLITE_CONSTRAINT_UNIQUE)
}

pub fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
  extended_code(err) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}
