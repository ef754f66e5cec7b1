//! HTML form page.
//!
//! Produces a self-contained HTML file with all CSS inlined: the status
//! banners, one input per feature, the outcome of the last submission, and a
//! side card describing the model.

use std::path::Path;

use anyhow::Result;

use scorecast_core::form::FormField;
use scorecast_core::report::UNCERTAINTY_NOTE;
use scorecast_core::session::{Session, StatusLevel};

use crate::Outcome;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn status_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Success => "success",
        StatusLevel::Info => "info",
        StatusLevel::Warning => "warning",
    }
}

fn render_input(field: &FormField, value: f64) -> String {
    let name = html_escape(&field.name);
    let mut html = format!("<label for=\"{name}\">{name}</label>\n");

    if let Some(options) = &field.spec.options {
        html.push_str(&format!("<select id=\"{name}\" name=\"{name}\">"));
        for option in options {
            let selected = if *option as f64 == value {
                " selected"
            } else {
                ""
            };
            html.push_str(&format!("<option value=\"{option}\"{selected}>{option}</option>"));
        }
        html.push_str("</select>\n");
        return html;
    }

    html.push_str(&format!(
        "<input type=\"number\" id=\"{name}\" name=\"{name}\" value=\"{}\" step=\"{}\"",
        field.spec.format_value(value),
        field.spec.step
    ));
    if let Some(min) = field.spec.min {
        html.push_str(&format!(" min=\"{min}\""));
    }
    if let Some(max) = field.spec.max {
        html.push_str(&format!(" max=\"{max}\""));
    }
    html.push_str(">\n");
    html
}

/// Generate the form page for a session and the outcome of a submission.
pub fn generate_html(session: &Session, outcome: Outcome<'_>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Student Exam Score Predictor</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n<main>\n<div class=\"content\">\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Student Exam Score Predictor</h1>\n");
    html.push_str("<p class=\"muted\">Enter student attributes to get a predicted exam score. The app auto-detects features when possible.</p>\n");
    html.push_str("</header>\n");

    for line in session.status() {
        html.push_str(&format!(
            "<div class=\"banner {}\">{}</div>\n",
            status_class(line.level),
            html_escape(&line.message)
        ));
    }

    // Inputs, pre-filled with the last submission when there is one
    let submitted = match outcome {
        Outcome::Prediction(report) => Some(&report.inputs),
        _ => None,
    };
    html.push_str("<h2>Student inputs</h2>\n");
    html.push_str("<form id=\"predict_form\">\n<div class=\"grid\">\n");
    for field in &session.form().fields {
        let value = submitted
            .and_then(|inputs| inputs.get(&field.name))
            .unwrap_or(field.spec.default);
        html.push_str("<div class=\"field\">\n");
        html.push_str(&render_input(field, value));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</form>\n");
    html.push_str(
        "<p class=\"hint muted\">This page does not submit. Score these inputs with \
         <code>scorecast predict --set NAME=VALUE</code> or \
         <code>scorecast predict --input values.json</code>.</p>\n",
    );

    // Outcome
    match outcome {
        Outcome::Pending => {}
        Outcome::Error(e) => {
            html.push_str(&format!(
                "<div class=\"banner error\">{}</div>\n",
                html_escape(&e.to_string())
            ));
        }
        Outcome::Prediction(report) => {
            html.push_str(&format!(
                "<div class=\"banner success\">{}</div>\n",
                html_escape(&report.headline())
            ));
            html.push_str("<h2>Input summary</h2>\n<table class=\"summary\">\n<tbody>\n");
            for input in report.inputs.iter() {
                let shown = match session.form().field(&input.name) {
                    Some(field) => field.spec.format_value(input.value),
                    None => input.value.to_string(),
                };
                html.push_str(&format!(
                    "<tr><th>{}</th><td>{}</td></tr>\n",
                    html_escape(&input.name),
                    shown
                ));
            }
            html.push_str("</tbody></table>\n");
            html.push_str(&format!(
                "<div class=\"banner info\">{}</div>\n",
                html_escape(UNCERTAINTY_NOTE)
            ));

            html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
            html.push_str("<pre><code>");
            html.push_str(&html_escape(
                &serde_json::to_string_pretty(report).unwrap_or_default(),
            ));
            html.push_str("</code></pre>\n</details>\n");
        }
    }
    html.push_str("</div>\n");

    // Model card
    html.push_str("<aside class=\"card\">\n<h3>Model &amp; Features</h3>\n");
    match session.model_kind() {
        None => html.push_str("<div class=\"banner warning\">No model loaded</div>\n"),
        Some(kind) => {
            html.push_str(&format!(
                "<p>Model type: <code>{}</code></p>\n",
                html_escape(kind)
            ));
            match session.detected_features() {
                Some(schema) => {
                    html.push_str("<p>Detected feature names:</p>\n<ul>\n");
                    for name in schema.iter() {
                        let explanation = session
                            .form()
                            .field(name)
                            .map(|f| f.explanation.as_str())
                            .unwrap_or_default();
                        html.push_str(&format!(
                            "<li><strong>{}</strong>: {}</li>\n",
                            html_escape(name),
                            html_escape(explanation)
                        ));
                    }
                    html.push_str("</ul>\n");
                }
                None => html.push_str(
                    "<p>Feature names not detectable. Using defaults.</p>\n",
                ),
            }
        }
    }
    html.push_str("</aside>\n</main>\n");

    html.push_str("<footer class=\"muted\">This app provides predicted exam scores based on a saved ML model. Always validate predictions before using them for important decisions.</footer>\n");
    html.push_str("</body>\n</html>");
    html
}

/// Write the form page to a file.
pub fn write_html(session: &Session, outcome: Outcome<'_>, path: &Path) -> Result<()> {
    let html = generate_html(session, outcome);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --muted: #6b7280; --border: #e5e7eb; --success: #dcfce7; --info: #dbeafe; --warning: #fef9c3; --error: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --success: #064e3b; --info: #1e3a8a; --warning: #713f12; --error: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
main { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
h1 { font-size: 28px; font-weight: 700; }
.muted { color: var(--muted); }
.banner { padding: 0.75rem 1rem; border-radius: 8px; margin: 0.5rem 0; }
.success { background: var(--success); }
.info { background: var(--info); }
.warning { background: var(--warning); }
.error { background: var(--error); }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.field label { display: block; font-size: 13px; margin-bottom: 0.25rem; }
.field input, .field select { width: 100%; padding: 0.4rem; }
.hint { margin-top: 1rem; font-size: 13px; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
.card { padding: 18px; border-radius: 12px; box-shadow: 0 6px 18px rgba(15, 23, 42, 0.06); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
footer { margin-top: 2rem; font-size: 13px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use scorecast_core::error::ScorecastError;
    use scorecast_core::model::PredictionRequest;
    use scorecast_core::report::PredictionReport;
    use scorecast_core::traits::{Predictor, SchemaSource};

    struct Named(Vec<String>);

    impl SchemaSource for Named {
        fn feature_names_in(&self) -> Option<&[String]> {
            Some(&self.0)
        }
    }

    impl Predictor for Named {
        fn kind(&self) -> &str {
            "LinearRegression"
        }

        fn predict(&self, rows: &[PredictionRequest]) -> anyhow::Result<Vec<f64>> {
            Ok(vec![72.5; rows.len()])
        }
    }

    fn detected_session() -> Session {
        let model: Arc<dyn Predictor> = Arc::new(Named(vec![
            "attendance_pct".into(),
            "gender".into(),
            "<script>".into(),
        ]));
        Session::new(Ok(model))
    }

    #[test]
    fn pending_page_contains_form() {
        let html = generate_html(&detected_session(), Outcome::Pending);
        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("name=\"attendance_pct\" value=\"75\" step=\"1\" min=\"0\" max=\"100\""));
        assert!(html.contains("<select id=\"gender\" name=\"gender\"><option value=\"0\" selected>0</option><option value=\"1\">1</option></select>"));
        assert!(html.contains("Model type: <code>LinearRegression</code>"));
        assert!(html.contains("Detected feature names:"));
        assert!(!html.contains("Predicted exam score:"));
        assert!(!html.contains("<button"));
        assert!(html.contains("<code>scorecast predict --input values.json</code>"));
    }

    #[test]
    fn feature_names_are_escaped() {
        let html = generate_html(&detected_session(), Outcome::Pending);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<li><strong><script>"));
    }

    #[test]
    fn prediction_page_shows_score_and_inputs() {
        let session = detected_session();
        let mut inputs = std::collections::HashMap::new();
        inputs.insert("gender".to_string(), 1.0);
        let result = session.submit(&inputs);

        let html = generate_html(&session, Outcome::from(&result));
        assert!(html.contains("Predicted exam score: 72.50"));
        assert!(html.contains("<tr><th>gender</th><td>1</td></tr>"));
        assert!(html.contains("<option value=\"1\" selected>1</option>"));
        assert!(html.contains(UNCERTAINTY_NOTE));
        assert!(html.contains("Raw JSON Data"));
        assert!(html.contains("&quot;model_kind&quot;: &quot;LinearRegression&quot;"));
    }

    #[test]
    fn missing_model_page_warns() {
        let session = Session::new(Err(ScorecastError::ModelFileMissing {
            path: PathBuf::from("student_exam_score_prediction.json"),
        }));
        let html = generate_html(&session, Outcome::Pending);
        assert!(html.contains("banner warning"));
        assert!(html.contains("student_exam_score_prediction.json"));
        assert!(html.contains("No model loaded"));
        assert_eq!(html.matches("class=\"field\"").count(), 6);
    }

    #[test]
    fn error_outcome_is_rendered() {
        let err = ScorecastError::PredictionFailed("bad <shape>".into());
        let html = generate_html(&detected_session(), Outcome::Error(&err));
        assert!(html.contains("banner error\">Prediction failed: bad &lt;shape&gt;"));
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.html");

        write_html(&detected_session(), Outcome::Pending, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<form id=\"predict_form\""));
    }

    #[test]
    fn report_from_other_session_falls_back_to_raw_values() {
        let session = detected_session();
        let inputs: PredictionRequest = vec![("unknown", 1.5)].into_iter().collect();
        let report = PredictionReport::new("LinearRegression", inputs, 10.0);
        let html = generate_html(&session, Outcome::Prediction(&report));
        assert!(html.contains("<tr><th>unknown</th><td>1.5</td></tr>"));
    }
}
