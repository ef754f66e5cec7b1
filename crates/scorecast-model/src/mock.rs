//! Mock predictor for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use scorecast_core::model::PredictionRequest;
use scorecast_core::traits::{Predictor, SchemaSource};

/// A mock predictor for exercising sessions without a model file.
///
/// Returns a fixed score per row, or fails with a fixed message.
pub struct MockPredictor {
    /// Score returned for every row.
    score: f64,
    /// Feature names exposed to the schema resolver.
    feature_names: Option<Vec<String>>,
    /// Failure message returned instead of scores.
    failure: Option<String>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Rows from the last call.
    last_rows: Mutex<Option<Vec<PredictionRequest>>>,
}

impl MockPredictor {
    /// Create a mock that always predicts the same score.
    pub fn with_fixed_score(score: f64) -> Self {
        Self {
            score,
            feature_names: None,
            failure: None,
            call_count: AtomicU32::new(0),
            last_rows: Mutex::new(None),
        }
    }

    /// Create a mock whose predictions always fail.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::with_fixed_score(0.0)
        }
    }

    /// Expose the given feature names.
    pub fn with_feature_names(mut self, names: &[&str]) -> Self {
        self.feature_names = Some(names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Get the number of calls made to this predictor.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the rows passed to the last call.
    pub fn last_rows(&self) -> Option<Vec<PredictionRequest>> {
        self.last_rows.lock().ok().and_then(|rows| rows.clone())
    }
}

impl SchemaSource for MockPredictor {
    fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}

impl Predictor for MockPredictor {
    fn kind(&self) -> &str {
        "MockPredictor"
    }

    fn predict(&self, rows: &[PredictionRequest]) -> anyhow::Result<Vec<f64>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_rows.lock() {
            *last = Some(rows.to_vec());
        }

        if let Some(message) = &self.failure {
            anyhow::bail!("{message}");
        }
        Ok(vec![self.score; rows.len()])
    }
}
