//! Error types surfaced to the user.
//!
//! Every variant is recoverable: a failed load leaves the session running on
//! the default schema, and a failed submission only ends that submission.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported inline to the user.
#[derive(Debug, Clone, Error)]
pub enum ScorecastError {
    /// The model artifact does not exist at the configured path.
    #[error("Model file not found at {}. Place your model file beside the app.", path.display())]
    ModelFileMissing { path: PathBuf },

    /// The artifact exists but could not be deserialized.
    #[error("Failed to load model: {reason}")]
    ModelLoadFailed { path: PathBuf, reason: String },

    /// The predictor rejected the request or returned no score.
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),

    /// A submission was made without any model loaded.
    #[error("No model available.")]
    NoModel,

    /// The submitted values violate a field's constraints.
    #[error(transparent)]
    InvalidInput(#[from] FormError),
}

impl ScorecastError {
    /// Returns `true` for failures that happened while loading the model.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            ScorecastError::ModelFileMissing { .. } | ScorecastError::ModelLoadFailed { .. }
        )
    }
}

/// Errors raised while collecting form values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("'{0}' is not a form field")]
    UnknownField(String),

    #[error("{name} must be at least {min}, got {value}")]
    BelowMinimum { name: String, value: f64, min: f64 },

    #[error("{name} must be at most {max}, got {value}")]
    AboveMaximum { name: String, value: f64, max: f64 },

    #[error("{name} must be one of {options:?}, got {value}")]
    NotAnOption {
        name: String,
        value: f64,
        options: Vec<i64>,
    },

    #[error("{name} must be a finite number")]
    NotFinite { name: String },

    #[error("expected NAME=VALUE, got '{0}'")]
    MalformedAssignment(String),

    #[error("invalid number for {name}: '{raw}'")]
    InvalidNumber { name: String, raw: String },
}
