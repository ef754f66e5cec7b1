//! Leaf estimators: standard scaler, linear regression, dummy regressor.
//!
//! Each estimator may carry the feature names it was fitted on. When it does,
//! incoming named columns must match them exactly, in order; otherwise only
//! the column count is checked.

use serde::{Deserialize, Serialize};

use scorecast_core::model::PredictionRequest;

use crate::error::ModelError;

/// A batch of rows, optionally labelled with column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Column names; `None` after a transform step.
    pub columns: Option<Vec<String>>,
    pub rows: Vec<Vec<f64>>,
}

impl Frame {
    /// Build a named frame from prediction requests.
    pub fn from_requests(requests: &[PredictionRequest]) -> Result<Self, ModelError> {
        let columns: Vec<String> = match requests.first() {
            Some(first) => first.names().map(str::to_string).collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::with_capacity(requests.len());
        for request in requests {
            if !request.names().eq(columns.iter().map(String::as_str)) {
                return Err(ModelError::InconsistentRows);
            }
            rows.push(request.values().collect());
        }

        Ok(Self {
            columns: Some(columns),
            rows,
        })
    }

    /// Build an unnamed frame.
    pub fn unnamed(rows: Vec<Vec<f64>>) -> Self {
        Self {
            columns: None,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        match &self.columns {
            Some(cols) => cols.len(),
            None => self.rows.first().map(Vec::len).unwrap_or(0),
        }
    }

    /// Check the frame against what an estimator was fitted on.
    pub(crate) fn check(
        &self,
        estimator: &'static str,
        names: Option<&[String]>,
        expected: Option<usize>,
    ) -> Result<(), ModelError> {
        if let (Some(columns), Some(names)) = (&self.columns, names) {
            if columns.as_slice() != names {
                return Err(ModelError::FeatureNamesMismatch {
                    expected: names.to_vec(),
                    got: columns.clone(),
                });
            }
        }
        if let Some(expected) = expected {
            let got = self.width();
            if got != expected {
                return Err(ModelError::FeatureCountMismatch {
                    estimator,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }
}

fn check_names(
    estimator: &'static str,
    names: Option<&[String]>,
    width: usize,
) -> Result<(), ModelError> {
    match names {
        Some(names) if names.len() != width => Err(ModelError::InvalidParameters {
            estimator,
            reason: format!(
                "{} feature names for {width} fitted columns",
                names.len()
            ),
        }),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// StandardScaler
// ---------------------------------------------------------------------------

/// Standardizes features as `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
}

impl StandardScaler {
    pub const KIND: &'static str = "StandardScaler";

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::InvalidParameters {
                estimator: Self::KIND,
                reason: format!(
                    "mean has {} values but scale has {}",
                    self.mean.len(),
                    self.scale.len()
                ),
            });
        }
        check_names(Self::KIND, self.feature_names_in.as_deref(), self.mean.len())
    }

    pub fn transform(&self, frame: &Frame) -> Result<Frame, ModelError> {
        frame.check(
            Self::KIND,
            self.feature_names_in.as_deref(),
            Some(self.mean.len()),
        )?;

        let rows = frame
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.mean.iter().zip(&self.scale))
                    .map(|(x, (mean, scale))| {
                        // zero variance columns are left unscaled
                        let scale = if *scale == 0.0 { 1.0 } else { *scale };
                        (x - mean) / scale
                    })
                    .collect()
            })
            .collect();

        Ok(Frame::unnamed(rows))
    }
}

// ---------------------------------------------------------------------------
// LinearRegression
// ---------------------------------------------------------------------------

/// Ordinary linear model: `intercept + coefficients · x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
}

impl LinearRegression {
    pub const KIND: &'static str = "LinearRegression";

    pub fn validate(&self) -> Result<(), ModelError> {
        check_names(
            Self::KIND,
            self.feature_names_in.as_deref(),
            self.coefficients.len(),
        )
    }

    pub fn predict(&self, frame: &Frame) -> Result<Vec<f64>, ModelError> {
        frame.check(
            Self::KIND,
            self.feature_names_in.as_deref(),
            Some(self.coefficients.len()),
        )?;

        Ok(frame
            .rows
            .iter()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(&self.coefficients)
                        .map(|(x, c)| x * c)
                        .sum::<f64>()
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// DummyRegressor
// ---------------------------------------------------------------------------

/// Predicts the same constant for every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DummyRegressor {
    pub constant: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names_in: Option<Vec<String>>,
}

impl DummyRegressor {
    pub const KIND: &'static str = "DummyRegressor";

    pub fn predict(&self, frame: &Frame) -> Result<Vec<f64>, ModelError> {
        let names = self.feature_names_in.as_deref();
        frame.check(Self::KIND, names, names.map(<[String]>::len))?;
        Ok(vec![self.constant; frame.rows.len()])
    }
}
