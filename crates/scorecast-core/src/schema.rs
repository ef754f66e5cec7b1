//! Feature schema resolution.
//!
//! Probes a predictor for the feature names it was fitted on, first on the
//! predictor itself and then on its named steps in declaration order.

use serde::{Deserialize, Serialize};

use crate::model::FeatureSchema;
use crate::traits::Predictor;

/// Where the active feature schema came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaOrigin {
    /// Read from the loaded model.
    Detected,
    /// A model is loaded but exposes no feature names.
    Undetectable,
    /// No model could be loaded.
    NoModel,
}

impl SchemaOrigin {
    pub fn is_default(&self) -> bool {
        !matches!(self, SchemaOrigin::Detected)
    }
}

/// Find the feature names a predictor expects.
///
/// Returns `None` when neither the predictor nor any of its named steps
/// carries a schema.
pub fn resolve_schema(predictor: &dyn Predictor) -> Option<FeatureSchema> {
    if let Some(names) = predictor.feature_names_in() {
        tracing::debug!(count = names.len(), "feature names found on predictor");
        return Some(FeatureSchema::from(names));
    }

    let steps = predictor.named_steps()?;
    for step in steps {
        if let Some(names) = step.step.feature_names_in() {
            tracing::debug!(step = step.name, count = names.len(), "feature names found on step");
            return Some(FeatureSchema::from(names));
        }
    }

    None
}

/// Resolve the schema of an optional predictor, falling back to the default
/// six-feature schema. An empty detected schema counts as undetectable.
pub fn resolve_or_default(predictor: Option<&dyn Predictor>) -> (FeatureSchema, SchemaOrigin) {
    match predictor {
        None => (FeatureSchema::default_schema(), SchemaOrigin::NoModel),
        Some(p) => match resolve_schema(p) {
            Some(schema) if !schema.is_empty() => (schema, SchemaOrigin::Detected),
            _ => (FeatureSchema::default_schema(), SchemaOrigin::Undetectable),
        },
    }
}
