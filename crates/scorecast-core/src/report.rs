//! Prediction report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::PredictionRequest;
use crate::predict::format_score;

/// Shown under every result; the supported estimators give point estimates only.
pub const UNCERTAINTY_NOTE: &str = "No uncertainty estimate available for this model. Consider using ensemble regressors for prediction intervals.";

/// Outcome of a single successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the prediction was made.
    pub created_at: DateTime<Utc>,
    /// Estimator type of the model that produced the score.
    pub model_kind: String,
    /// Submitted inputs, in form order.
    pub inputs: PredictionRequest,
    /// Predicted exam score.
    pub score: f64,
}

impl PredictionReport {
    pub fn new(model_kind: impl Into<String>, inputs: PredictionRequest, score: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            model_kind: model_kind.into(),
            inputs,
            score,
        }
    }

    /// `Predicted exam score: 72.50`
    pub fn headline(&self) -> String {
        format_score(self.score)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: PredictionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PredictionReport {
        let inputs: PredictionRequest = vec![("study_hours_per_week", 12.0), ("age", 17.0)]
            .into_iter()
            .collect();
        PredictionReport::new("LinearRegression", inputs, 72.5)
    }

    #[test]
    fn headline_uses_two_decimals() {
        assert_eq!(sample().headline(), "Predicted exam score: 72.50");
    }

    #[test]
    fn save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = sample();

        report.save_json(&path).unwrap();
        let loaded = PredictionReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.model_kind, "LinearRegression");
        assert_eq!(loaded.inputs, report.inputs);
        assert_eq!(loaded.score, 72.5);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = PredictionReport::load_json(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }
}
