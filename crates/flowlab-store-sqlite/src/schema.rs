//! SQL schema for the Flowlab SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout so a future change can detect older files.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `foreign_keys` is a per-connection setting, which is why it lives here
/// rather than in the file.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS experiments (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    parameters  TEXT NOT NULL,
    description TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS predictions (
    id            INTEGER PRIMARY KEY,
    experiment_id INTEGER NOT NULL REFERENCES experiments(id) ON DELETE CASCADE,
    input_value   REAL NOT NULL,
    output_path   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS predictions_experiment_idx ON predictions(experiment_id);

PRAGMA user_version = 1;
";
