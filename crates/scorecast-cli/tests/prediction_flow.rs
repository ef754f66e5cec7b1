//! End-to-end session tests: load, resolve, build form, submit, render.
//!
//! These run against the mock predictor and real artifacts on disk, without
//! going through the binary.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use scorecast_core::error::ScorecastError;
use scorecast_core::field::FieldKind;
use scorecast_core::schema::SchemaOrigin;
use scorecast_core::session::{Session, StatusLevel};
use scorecast_core::traits::Predictor;
use scorecast_model::mock::MockPredictor;
use scorecast_model::{load_model, sample_model, save_artifact};
use scorecast_report::text::render_text;
use scorecast_report::Outcome;

#[test]
fn mock_with_schema_predicts_formatted_score() {
    let mock = Arc::new(
        MockPredictor::with_fixed_score(72.5)
            .with_feature_names(&["attendance_pct", "sleep_hours", "is_full_time"]),
    );
    let session = Session::new(Ok(mock.clone() as Arc<dyn Predictor>));

    assert_eq!(session.origin(), SchemaOrigin::Detected);
    let kinds: Vec<FieldKind> = session.form().fields.iter().map(|f| f.spec.kind).collect();
    assert_eq!(
        kinds,
        vec![FieldKind::Percentage, FieldKind::Duration, FieldKind::Binary]
    );

    let report = session.submit(&HashMap::new()).unwrap();
    assert_eq!(report.headline(), "Predicted exam score: 72.50");

    // The predictor received exactly one row whose keys match the schema.
    assert_eq!(mock.call_count(), 1);
    let rows = mock.last_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].names().collect::<Vec<_>>(),
        session.schema().iter().collect::<Vec<_>>()
    );
}

#[test]
fn failing_mock_surfaces_reason() {
    let mock = MockPredictor::failing("could not convert string to float");
    let session = Session::new(Ok(Arc::new(mock) as Arc<dyn Predictor>));

    assert_eq!(session.origin(), SchemaOrigin::Undetectable);
    let err = session.submit(&HashMap::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Prediction failed: could not convert string to float"
    );

    let text = render_text(&session, Outcome::Error(&err));
    assert!(text.contains("[error] Prediction failed"));
}

#[test]
fn missing_file_yields_default_schema_and_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("student_exam_score_prediction.json");
    let session = Session::new(load_model(&path));

    assert_eq!(session.schema().len(), 6);
    let status = session.status();
    assert_eq!(status[0].level, StatusLevel::Warning);
    assert!(status[0]
        .message
        .contains("student_exam_score_prediction.json"));
    assert!(matches!(
        session.submit(&HashMap::new()),
        Err(ScorecastError::ModelFileMissing { .. })
    ));
}

#[test]
fn sample_model_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("model.json");
    save_artifact(&sample_model(), &path).unwrap();

    let session = Session::new(load_model(&path));
    assert_eq!(session.model_kind(), Some("Pipeline"));
    assert_eq!(session.origin(), SchemaOrigin::Detected);

    let mut inputs = HashMap::new();
    inputs.insert("study_hours_per_week".to_string(), 12.0);
    inputs.insert("attendance_pct".to_string(), 85.0);
    inputs.insert("previous_score".to_string(), 65.0);
    inputs.insert("sleep_hours".to_string(), 7.0);
    inputs.insert("parental_education_level".to_string(), 2.0);
    inputs.insert("age".to_string(), 17.0);

    let report = session.submit(&inputs).unwrap();
    assert_eq!(report.headline(), "Predicted exam score: 65.00");

    // More study than average raises the score.
    inputs.insert("study_hours_per_week".to_string(), 22.0);
    let better = session.submit(&inputs).unwrap();
    assert!(better.score > report.score);
}
