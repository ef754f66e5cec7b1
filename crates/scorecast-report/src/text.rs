//! Plain-text rendering for terminals and logs.

use scorecast_core::report::{PredictionReport, UNCERTAINTY_NOTE};
use scorecast_core::session::Session;

use crate::Outcome;

/// Render status lines, then the outcome.
pub fn render_text(session: &Session, outcome: Outcome<'_>) -> String {
    let mut out = String::new();

    for line in session.status() {
        out.push_str(&format!("[{}] {}\n", line.level, line.message));
    }

    match outcome {
        Outcome::Pending => {}
        Outcome::Prediction(report) => {
            out.push('\n');
            out.push_str(&render_prediction(session, report));
        }
        Outcome::Error(e) => {
            out.push('\n');
            out.push_str(&format!("[error] {e}\n"));
        }
    }

    out
}

/// Headline, input echo, and uncertainty note.
pub fn render_prediction(session: &Session, report: &PredictionReport) -> String {
    let mut out = String::new();
    out.push_str(&report.headline());
    out.push_str("\n\nInput summary\n");

    let width = report.inputs.names().map(str::len).max().unwrap_or(0);
    for input in report.inputs.iter() {
        let shown = match session.form().field(&input.name) {
            Some(field) => field.spec.format_value(input.value),
            None => input.value.to_string(),
        };
        out.push_str(&format!("  {:<width$}  {shown}\n", input.name));
    }

    out.push('\n');
    out.push_str(UNCERTAINTY_NOTE);
    out.push('\n');
    out
}
