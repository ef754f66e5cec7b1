//! scorecast-model: Model artifacts and estimators.
//!
//! Implements the `Predictor` trait for the estimators a scorecast model
//! artifact can contain, and loads the artifact and configuration from disk.

pub mod artifact;
pub mod config;
pub mod error;
pub mod estimator;
pub mod mock;
pub mod pipeline;

pub use artifact::{load_model, read_artifact, sample_model, save_artifact, Estimator};
pub use config::{load_config, ScorecastConfig, DEFAULT_MODEL_PATH};
pub use error::ModelError;
