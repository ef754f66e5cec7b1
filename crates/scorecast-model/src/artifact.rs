//! Model artifact format and loader.
//!
//! An artifact is a single JSON document describing a fitted estimator,
//! internally tagged by `"type"`:
//!
//! ```json
//! {
//!   "type": "pipeline",
//!   "steps": [
//!     { "name": "scaler", "estimator": { "type": "standard_scaler", "mean": [..], "scale": [..],
//!                                       "feature_names_in": ["study_hours_per_week", ..] } },
//!     { "name": "regressor", "estimator": { "type": "linear_regression",
//!                                          "coefficients": [..], "intercept": 65.0 } }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use scorecast_core::error::ScorecastError;
use scorecast_core::model::{PredictionRequest, DEFAULT_FEATURES};
use scorecast_core::traits::{NamedStep, Predictor, SchemaSource};

use crate::error::ModelError;
use crate::estimator::{DummyRegressor, Frame, LinearRegression, StandardScaler};
use crate::pipeline::{Pipeline, PipelineStep};

/// Any estimator a model artifact can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    StandardScaler(StandardScaler),
    LinearRegression(LinearRegression),
    DummyRegressor(DummyRegressor),
    Pipeline(Pipeline),
}

impl Estimator {
    /// Estimator type name.
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::StandardScaler(_) => StandardScaler::KIND,
            Estimator::LinearRegression(_) => LinearRegression::KIND,
            Estimator::DummyRegressor(_) => DummyRegressor::KIND,
            Estimator::Pipeline(_) => Pipeline::KIND,
        }
    }

    /// Check fitted parameters for internal consistency.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Estimator::StandardScaler(s) => s.validate(),
            Estimator::LinearRegression(r) => r.validate(),
            Estimator::DummyRegressor(_) => Ok(()),
            Estimator::Pipeline(p) => p.validate(),
        }
    }

    pub fn transform(&self, frame: &Frame) -> Result<Frame, ModelError> {
        match self {
            Estimator::StandardScaler(s) => s.transform(frame),
            Estimator::Pipeline(p) => p.transform(frame),
            other => Err(ModelError::NotATransformer(other.kind())),
        }
    }

    pub fn predict_frame(&self, frame: &Frame) -> Result<Vec<f64>, ModelError> {
        match self {
            Estimator::LinearRegression(r) => r.predict(frame),
            Estimator::DummyRegressor(d) => d.predict(frame),
            Estimator::Pipeline(p) => p.predict(frame),
            other => Err(ModelError::NotARegressor(other.kind())),
        }
    }
}

impl SchemaSource for Estimator {
    fn feature_names_in(&self) -> Option<&[String]> {
        match self {
            Estimator::StandardScaler(s) => s.feature_names_in.as_deref(),
            Estimator::LinearRegression(r) => r.feature_names_in.as_deref(),
            Estimator::DummyRegressor(d) => d.feature_names_in.as_deref(),
            Estimator::Pipeline(p) => p
                .steps
                .first()
                .and_then(|s| s.estimator.feature_names_in()),
        }
    }
}

impl Predictor for Estimator {
    fn kind(&self) -> &str {
        Estimator::kind(self)
    }

    fn predict(&self, rows: &[PredictionRequest]) -> anyhow::Result<Vec<f64>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let frame = Frame::from_requests(rows)?;
        Ok(self.predict_frame(&frame)?)
    }

    fn named_steps(&self) -> Option<Vec<NamedStep<'_>>> {
        match self {
            Estimator::Pipeline(p) => Some(
                p.steps
                    .iter()
                    .map(|s| NamedStep {
                        name: s.name.as_str(),
                        step: &s.estimator,
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Read and validate a model artifact.
pub fn read_artifact(path: &Path) -> Result<Estimator, ScorecastError> {
    if !path.exists() {
        return Err(ScorecastError::ModelFileMissing {
            path: path.to_path_buf(),
        });
    }

    let load_failed = |reason: String| ScorecastError::ModelLoadFailed {
        path: path.to_path_buf(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
    let estimator: Estimator =
        serde_json::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
    estimator
        .validate()
        .map_err(|e| load_failed(e.to_string()))?;

    tracing::info!(kind = estimator.kind(), path = %path.display(), "model loaded");
    Ok(estimator)
}

/// Load a model artifact as a shared, read-only predictor.
pub fn load_model(path: &Path) -> Result<Arc<dyn Predictor>, ScorecastError> {
    let estimator = read_artifact(path)?;
    Ok(Arc::new(estimator))
}

/// Write a model artifact as pretty-printed JSON.
pub fn save_artifact(estimator: &Estimator, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(estimator).context("failed to serialize model")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write model to {}", path.display()))?;
    Ok(())
}

/// A small demonstration model over the default feature set.
pub fn sample_model() -> Estimator {
    let names: Vec<String> = DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect();
    Estimator::Pipeline(Pipeline {
        steps: vec![
            PipelineStep {
                name: "scaler".into(),
                estimator: Estimator::StandardScaler(StandardScaler {
                    mean: vec![12.0, 85.0, 65.0, 7.0, 2.0, 17.0],
                    scale: vec![5.0, 10.0, 15.0, 1.5, 1.0, 1.5],
                    feature_names_in: Some(names),
                }),
            },
            PipelineStep {
                name: "regressor".into(),
                estimator: Estimator::LinearRegression(LinearRegression {
                    coefficients: vec![4.0, 3.0, 6.0, 1.0, 1.5, -0.5],
                    intercept: 65.0,
                    feature_names_in: None,
                }),
            },
        ],
    })
}
