//! Prediction invocation.

use crate::error::ScorecastError;
use crate::model::PredictionRequest;
use crate::traits::Predictor;

/// Run the predictor on a single request and return the first score.
pub fn predict_score(
    predictor: &dyn Predictor,
    request: &PredictionRequest,
) -> Result<f64, ScorecastError> {
    let scores = predictor
        .predict(std::slice::from_ref(request))
        .map_err(|e| ScorecastError::PredictionFailed(format!("{e:#}")))?;

    let score = scores
        .first()
        .copied()
        .ok_or_else(|| ScorecastError::PredictionFailed("model returned no scores".into()))?;

    if !score.is_finite() {
        return Err(ScorecastError::PredictionFailed(format!(
            "model returned a non-finite score ({score})"
        )));
    }

    tracing::debug!(score, "prediction complete");
    Ok(score)
}

/// The result line shown to the user.
pub fn format_score(score: f64) -> String {
    format!("Predicted exam score: {score:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SchemaSource;

    struct Fixed(Vec<f64>);

    impl SchemaSource for Fixed {}

    impl Predictor for Fixed {
        fn kind(&self) -> &str {
            "Fixed"
        }

        fn predict(&self, _rows: &[PredictionRequest]) -> anyhow::Result<Vec<f64>> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl SchemaSource for Failing {}

    impl Predictor for Failing {
        fn kind(&self) -> &str {
            "Failing"
        }

        fn predict(&self, _rows: &[PredictionRequest]) -> anyhow::Result<Vec<f64>> {
            anyhow::bail!("X has 3 features, but model is expecting 6")
        }
    }

    #[test]
    fn first_score_is_used() {
        let score = predict_score(&Fixed(vec![72.5, 10.0]), &PredictionRequest::new()).unwrap();
        assert_eq!(score, 72.5);
        assert_eq!(format_score(score), "Predicted exam score: 72.50");
    }

    #[test]
    fn failure_text_is_surfaced() {
        let err = predict_score(&Failing, &PredictionRequest::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Prediction failed: X has 3 features, but model is expecting 6"
        );
    }

    #[test]
    fn empty_and_non_finite_outputs_fail() {
        assert!(predict_score(&Fixed(vec![]), &PredictionRequest::new()).is_err());
        assert!(predict_score(&Fixed(vec![f64::NAN]), &PredictionRequest::new()).is_err());
    }

    #[test]
    fn format_rounds_to_two_decimals() {
        assert_eq!(format_score(0.0), "Predicted exam score: 0.00");
        assert_eq!(format_score(88.126), "Predicted exam score: 88.13");
    }
}
