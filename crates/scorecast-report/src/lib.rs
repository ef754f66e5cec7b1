//! scorecast-report: Rendering of the input form and prediction results.

pub mod html;
pub mod text;

use scorecast_core::error::ScorecastError;
use scorecast_core::report::PredictionReport;

/// What to show below the form.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// Nothing submitted yet.
    Pending,
    Prediction(&'a PredictionReport),
    Error(&'a ScorecastError),
}

impl<'a> From<&'a Result<PredictionReport, ScorecastError>> for Outcome<'a> {
    fn from(result: &'a Result<PredictionReport, ScorecastError>) -> Self {
        match result {
            Ok(report) => Outcome::Prediction(report),
            Err(e) => Outcome::Error(e),
        }
    }
}
