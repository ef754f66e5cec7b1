//! Core trait definitions for predictors.
//!
//! A predictor is opaque: callers can ask it for scores and probe whether it
//! (or one of its named steps) carries the feature names it was fitted on.
//! Concrete estimators live in `scorecast-model`.

use crate::model::PredictionRequest;

// ---------------------------------------------------------------------------
// Schema capability
// ---------------------------------------------------------------------------

/// Capability of exposing the feature names seen at fit time.
///
/// Returning `None` is the normal answer for estimators fitted on unnamed
/// columns.
pub trait SchemaSource {
    /// Feature names in fit order, if known.
    fn feature_names_in(&self) -> Option<&[String]> {
        None
    }
}

/// A named sub-step of a composite predictor.
#[derive(Clone, Copy)]
pub struct NamedStep<'a> {
    /// Step name as declared in the pipeline.
    pub name: &'a str,
    /// The step itself, probed only for its schema.
    pub step: &'a dyn SchemaSource,
}

impl std::fmt::Debug for NamedStep<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedStep")
            .field("name", &self.name)
            .field("has_schema", &self.step.feature_names_in().is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Predictor trait
// ---------------------------------------------------------------------------

/// Trait for trained regressors that turn feature rows into scores.
pub trait Predictor: SchemaSource + Send + Sync {
    /// Human-readable estimator type (e.g. "Pipeline").
    fn kind(&self) -> &str;

    /// Predict one score per row.
    fn predict(&self, rows: &[PredictionRequest]) -> anyhow::Result<Vec<f64>>;

    /// Ordered named sub-steps, for composite predictors only.
    fn named_steps(&self) -> Option<Vec<NamedStep<'_>>> {
        None
    }
}
