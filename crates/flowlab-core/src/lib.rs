//! Core types and trait definitions for the Flowlab experiment store.
//!
//! This crate is deliberately free of HTTP, database and image dependencies.
//! All other crates depend on it.

pub mod artifact;
pub mod demo;
pub mod error;
pub mod experiment;
pub mod prediction;
pub mod store;

pub use error::{Error, Result};
