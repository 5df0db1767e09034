//! Core traits for the Clausewise pipeline.

mod loader;

pub use loader::{LoadFailure, LoadOutcome, Loader};
