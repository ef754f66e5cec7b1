//! A loaded model together with its resolved form.
//!
//! The session is built once at startup from the outcome of loading the
//! model artifact and is read-only afterwards. A failed load is remembered
//! and reported, while the form falls back to the default schema.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ScorecastError;
use crate::form::Form;
use crate::model::FeatureSchema;
use crate::predict::predict_score;
use crate::report::PredictionReport;
use crate::schema::{resolve_or_default, SchemaOrigin};
use crate::traits::Predictor;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Success => write!(f, "ok"),
            StatusLevel::Info => write!(f, "info"),
            StatusLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusLine {
    fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Process-wide, read-only model state.
pub struct Session {
    model: Option<Arc<dyn Predictor>>,
    load_error: Option<ScorecastError>,
    schema: FeatureSchema,
    origin: SchemaOrigin,
    form: Form,
}

impl Session {
    /// Build a session from the outcome of loading a model.
    pub fn new(loaded: Result<Arc<dyn Predictor>, ScorecastError>) -> Self {
        let (model, load_error) = match loaded {
            Ok(model) => (Some(model), None),
            Err(e) => {
                tracing::warn!("{e}");
                (None, Some(e))
            }
        };

        let (schema, origin) = resolve_or_default(model.as_deref());
        tracing::info!(
            features = schema.len(),
            origin = ?origin,
            "session ready"
        );
        let form = Form::build(&schema);

        Self {
            model,
            load_error,
            schema,
            origin,
            form,
        }
    }

    pub fn model(&self) -> Option<&Arc<dyn Predictor>> {
        self.model.as_ref()
    }

    pub fn model_kind(&self) -> Option<&str> {
        self.model.as_deref().map(|m| m.kind())
    }

    pub fn load_error(&self) -> Option<&ScorecastError> {
        self.load_error.as_ref()
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn origin(&self) -> SchemaOrigin {
        self.origin
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Feature names read from the model, if any.
    pub fn detected_features(&self) -> Option<&FeatureSchema> {
        match self.origin {
            SchemaOrigin::Detected => Some(&self.schema),
            _ => None,
        }
    }

    /// Status messages describing how the form was derived.
    pub fn status(&self) -> Vec<StatusLine> {
        let mut lines = Vec::new();
        match self.origin {
            SchemaOrigin::Detected => lines.push(StatusLine::new(
                StatusLevel::Success,
                format!("Model loaded: detected {} feature(s).", self.schema.len()),
            )),
            SchemaOrigin::NoModel => {
                let message = self
                    .load_error
                    .as_ref()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| ScorecastError::NoModel.to_string());
                lines.push(StatusLine::new(StatusLevel::Warning, message));
            }
            SchemaOrigin::Undetectable => lines.push(StatusLine::new(
                StatusLevel::Info,
                "Model loaded but no feature names were detectable. Provide them manually if needed.",
            )),
        }
        if self.origin.is_default() {
            lines.push(StatusLine::new(
                StatusLevel::Info,
                "No features detected. Using default feature set for demonstration.",
            ));
        }
        lines
    }

    /// Collect the submitted values and predict a score.
    pub fn submit(
        &self,
        inputs: &HashMap<String, f64>,
    ) -> Result<PredictionReport, ScorecastError> {
        let Some(model) = self.model.as_deref() else {
            return Err(self.load_error.clone().unwrap_or(ScorecastError::NoModel));
        };

        let request = self.form.collect(inputs)?;
        let score = predict_score(model, &request)?;
        Ok(PredictionReport::new(model.kind(), request, score))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("model", &self.model_kind())
            .field("load_error", &self.load_error)
            .field("schema", &self.schema)
            .field("origin", &self.origin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::model::PredictionRequest;
    use crate::traits::SchemaSource;

    struct Linear {
        names: Option<Vec<String>>,
    }

    impl SchemaSource for Linear {
        fn feature_names_in(&self) -> Option<&[String]> {
            self.names.as_deref()
        }
    }

    impl Predictor for Linear {
        fn kind(&self) -> &str {
            "Linear"
        }

        fn predict(&self, rows: &[PredictionRequest]) -> anyhow::Result<Vec<f64>> {
            Ok(rows.iter().map(|r| r.values().sum::<f64>()).collect())
        }
    }

    fn missing() -> ScorecastError {
        ScorecastError::ModelFileMissing {
            path: PathBuf::from("student_exam_score_prediction.json"),
        }
    }

    #[test]
    fn missing_model_warns_and_uses_default_schema() {
        let session = Session::new(Err(missing()));
        assert_eq!(session.schema().len(), 6);
        assert_eq!(session.origin(), SchemaOrigin::NoModel);
        assert!(session.model_kind().is_none());
        assert!(session.detected_features().is_none());

        let status = session.status();
        assert_eq!(status[0].level, StatusLevel::Warning);
        assert!(status[0]
            .message
            .contains("student_exam_score_prediction.json"));
        assert_eq!(status[1].level, StatusLevel::Info);
    }

    #[test]
    fn submit_without_model_returns_load_error() {
        let session = Session::new(Err(missing()));
        let err = session.submit(&HashMap::new()).unwrap_err();
        assert!(err.is_load_failure());
    }

    #[test]
    fn detected_schema_drives_form() {
        let model: Arc<dyn Predictor> = Arc::new(Linear {
            names: Some(vec!["is_full_time".into(), "previous_score".into()]),
        });
        let session = Session::new(Ok(model));
        assert_eq!(session.origin(), SchemaOrigin::Detected);
        assert_eq!(session.form().len(), 2);
        assert_eq!(session.status().len(), 1);
        assert_eq!(
            session.status()[0].message,
            "Model loaded: detected 2 feature(s)."
        );

        let mut inputs = HashMap::new();
        inputs.insert("is_full_time".to_string(), 1.0);
        let report = session.submit(&inputs).unwrap();
        assert_eq!(report.score, 61.0);
        assert_eq!(report.model_kind, "Linear");
        assert_eq!(report.inputs.len(), 2);
    }

    #[test]
    fn opaque_model_uses_default_schema() {
        let model: Arc<dyn Predictor> = Arc::new(Linear { names: None });
        let session = Session::new(Ok(model));
        assert_eq!(session.origin(), SchemaOrigin::Undetectable);
        assert_eq!(session.schema(), &FeatureSchema::default_schema());
        assert_eq!(session.status()[0].level, StatusLevel::Info);
        assert_eq!(session.model_kind(), Some("Linear"));
    }

    #[test]
    fn invalid_input_is_rejected_before_prediction() {
        let model: Arc<dyn Predictor> = Arc::new(Linear {
            names: Some(vec!["attendance_pct".into()]),
        });
        let session = Session::new(Ok(model));
        let mut inputs = HashMap::new();
        inputs.insert("attendance_pct".to_string(), 150.0);
        assert!(matches!(
            session.submit(&inputs),
            Err(ScorecastError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_feature_list_is_reported_as_undetectable() {
        let model: Arc<dyn Predictor> = Arc::new(Linear {
            names: Some(Vec::new()),
        });
        let session = Session::new(Ok(model));
        assert_eq!(session.origin(), SchemaOrigin::Undetectable);
        assert!(session.detected_features().is_none());
        assert_eq!(session.form().len(), 6);

        let status = session.status();
        assert_eq!(status[0].level, StatusLevel::Info);
        assert!(status[0].message.contains("no feature names were detectable"));
    }
}
