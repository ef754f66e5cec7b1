//! Estimator error types.

use thiserror::Error;

/// Errors raised while validating or evaluating an estimator.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Column names differ from the ones seen at fit time.
    #[error("the feature names should match those passed during fit: expected {expected:?}, got {got:?}")]
    FeatureNamesMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },

    /// Column count differs from the fitted width.
    #[error("X has {got} features, but {estimator} is expecting {expected} features as input")]
    FeatureCountMismatch {
        estimator: &'static str,
        expected: usize,
        got: usize,
    },

    /// Rows of one request batch carry different columns.
    #[error("all rows must have the same columns")]
    InconsistentRows,

    #[error("pipeline has no steps")]
    EmptyPipeline,

    #[error("duplicate pipeline step name '{0}'")]
    DuplicateStep(String),

    /// A step that only transforms was asked to predict.
    #[error("{0} does not support predict")]
    NotARegressor(&'static str),

    /// A step that only predicts was placed before the final step.
    #[error("{0} does not support transform")]
    NotATransformer(&'static str),

    /// Fitted parameters are internally inconsistent.
    #[error("invalid {estimator} parameters: {reason}")]
    InvalidParameters {
        estimator: &'static str,
        reason: String,
    },
}
