//! Composite predictor made of ordered, named steps.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::artifact::Estimator;
use crate::error::ModelError;
use crate::estimator::Frame;

/// One named step of a pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub name: String,
    pub estimator: Estimator,
}

/// Every step but the last transforms; the last one predicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub steps: Vec<PipelineStep>,
}

impl Pipeline {
    pub const KIND: &'static str = "Pipeline";

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.steps.is_empty() {
            return Err(ModelError::EmptyPipeline);
        }
        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(step.name.as_str()) {
                return Err(ModelError::DuplicateStep(step.name.clone()));
            }
            step.estimator.validate()?;
        }
        Ok(())
    }

    pub fn transform(&self, frame: &Frame) -> Result<Frame, ModelError> {
        let mut current = frame.clone();
        for step in &self.steps {
            current = step.estimator.transform(&current)?;
        }
        Ok(current)
    }

    pub fn predict(&self, frame: &Frame) -> Result<Vec<f64>, ModelError> {
        let (last, head) = self.steps.split_last().ok_or(ModelError::EmptyPipeline)?;

        let mut current = frame.clone();
        for step in head {
            tracing::debug!(step = %step.name, kind = step.estimator.kind(), "transform");
            current = step.estimator.transform(&current)?;
        }
        tracing::debug!(step = %last.name, kind = last.estimator.kind(), "predict");
        last.estimator.predict_frame(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{DummyRegressor, LinearRegression, StandardScaler};

    fn step(name: &str, estimator: Estimator) -> PipelineStep {
        PipelineStep {
            name: name.into(),
            estimator,
        }
    }

    fn scaler() -> Estimator {
        Estimator::StandardScaler(StandardScaler {
            mean: vec![1.0],
            scale: vec![2.0],
            feature_names_in: Some(vec!["x".into()]),
        })
    }

    fn regressor() -> Estimator {
        Estimator::LinearRegression(LinearRegression {
            coefficients: vec![10.0],
            intercept: 50.0,
            feature_names_in: None,
        })
    }

    #[test]
    fn scaler_then_regressor() {
        let pipeline = Pipeline {
            steps: vec![step("scaler", scaler()), step("regressor", regressor())],
        };
        pipeline.validate().unwrap();
        let frame = Frame {
            columns: Some(vec!["x".into()]),
            rows: vec![vec![5.0]],
        };
        // (5 - 1) / 2 * 10 + 50
        assert_eq!(pipeline.predict(&frame).unwrap(), vec![70.0]);
    }

    #[test]
    fn empty_pipeline_is_invalid() {
        let pipeline = Pipeline { steps: vec![] };
        assert_eq!(pipeline.validate(), Err(ModelError::EmptyPipeline));
        assert_eq!(
            pipeline.predict(&Frame::unnamed(vec![])),
            Err(ModelError::EmptyPipeline)
        );
    }

    #[test]
    fn duplicate_step_names_are_invalid() {
        let pipeline = Pipeline {
            steps: vec![step("a", scaler()), step("a", regressor())],
        };
        assert_eq!(
            pipeline.validate(),
            Err(ModelError::DuplicateStep("a".into()))
        );
    }

    #[test]
    fn regressor_cannot_transform() {
        let pipeline = Pipeline {
            steps: vec![
                step("first", regressor()),
                step(
                    "last",
                    Estimator::DummyRegressor(DummyRegressor {
                        constant: 1.0,
                        feature_names_in: None,
                    }),
                ),
            ],
        };
        let err = pipeline
            .predict(&Frame::unnamed(vec![vec![1.0]]))
            .unwrap_err();
        assert_eq!(err, ModelError::NotATransformer("LinearRegression"));
    }

    #[test]
    fn scaler_cannot_predict() {
        let pipeline = Pipeline {
            steps: vec![step("scaler", scaler())],
        };
        let frame = Frame {
            columns: Some(vec!["x".into()]),
            rows: vec![vec![1.0]],
        };
        assert_eq!(
            pipeline.predict(&frame),
            Err(ModelError::NotARegressor("StandardScaler"))
        );
    }
}
