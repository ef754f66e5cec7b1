//! Feature-name heuristics for form fields.
//!
//! A feature name is lower-cased and matched against ordered keyword groups;
//! the first group with a substring hit decides the field kind. The same
//! approach, with its own ladder, produces a one-line explanation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Input kind assigned to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// 0-100 percentage, whole-number steps.
    Percentage,
    /// Hours, one decimal.
    Duration,
    /// 0-100 prior score.
    Score,
    /// 0/1 coded category.
    Binary,
    /// Anything else.
    Numeric,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Percentage => write!(f, "percentage"),
            FieldKind::Duration => write!(f, "duration"),
            FieldKind::Score => write!(f, "score"),
            FieldKind::Binary => write!(f, "binary"),
            FieldKind::Numeric => write!(f, "numeric"),
        }
    }
}

/// Allowed values for binary fields.
pub const BINARY_OPTIONS: [i64; 2] = [0, 1];

/// Rendering and validation metadata for one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub kind: FieldKind,
    /// Value pre-filled in the form.
    pub default: f64,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Increment between neighbouring values.
    pub step: f64,
    /// Digits shown after the decimal point.
    pub decimals: usize,
    /// Closed set of allowed values (binary fields only).
    #[serde(default)]
    pub options: Option<Vec<i64>>,
}

impl FieldKind {
    /// The field template for this kind.
    pub fn spec(self) -> FieldSpec {
        match self {
            FieldKind::Percentage => FieldSpec {
                kind: self,
                default: 75.0,
                min: Some(0.0),
                max: Some(100.0),
                step: 1.0,
                decimals: 0,
                options: None,
            },
            FieldKind::Duration => FieldSpec {
                kind: self,
                default: 10.0,
                min: Some(0.0),
                max: Some(200.0),
                step: 0.1,
                decimals: 1,
                options: None,
            },
            FieldKind::Score => FieldSpec {
                kind: self,
                default: 60.0,
                min: Some(0.0),
                max: Some(100.0),
                step: 0.01,
                decimals: 2,
                options: None,
            },
            FieldKind::Binary => FieldSpec {
                kind: self,
                default: BINARY_OPTIONS[0] as f64,
                min: None,
                max: None,
                step: 1.0,
                decimals: 0,
                options: Some(BINARY_OPTIONS.to_vec()),
            },
            FieldKind::Numeric => FieldSpec {
                kind: self,
                default: 0.0,
                min: None,
                max: None,
                step: 0.01,
                decimals: 2,
                options: None,
            },
        }
    }
}

impl FieldSpec {
    /// Format a value with this field's display precision.
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.decimals)
    }

    /// Human-readable bounds, e.g. `[0, 100]`, `{0, 1}` or `any`.
    pub fn describe_bounds(&self) -> String {
        if let Some(options) = &self.options {
            let opts: Vec<String> = options.iter().map(|o| o.to_string()).collect();
            return format!("{{{}}}", opts.join(", "));
        }
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => format!("[{lo}, {hi}]"),
            (Some(lo), None) => format!(">= {lo}"),
            (None, Some(hi)) => format!("<= {hi}"),
            (None, None) => "any".to_string(),
        }
    }
}

/// Keyword groups in priority order; first hit wins.
const FIELD_RULES: &[(&[&str], FieldKind)] = &[
    (&["pct", "percent", "attendance"], FieldKind::Percentage),
    (&["hours", "study", "sleep"], FieldKind::Duration),
    (&["score", "previous"], FieldKind::Score),
    (&["gender", "encoded", "binary", "is_"], FieldKind::Binary),
];

const EXPLANATION_RULES: &[(&[&str], &str)] = &[
    (
        &["study", "hours"],
        "Estimated weekly study hours; higher values often correlate with better exam performance.",
    ),
    (
        &["attendance"],
        "Attendance percentage; better class attendance typically improves scores.",
    ),
    (
        &["prev", "score"],
        "Previous academic performance; a strong predictor of future scores.",
    ),
    (
        &["sleep"],
        "Average sleep hours per night; both insufficient and excessive sleep can impact performance.",
    ),
    (&["age"], "Age of the student in years."),
    (&["gender"], "Encoded gender (e.g., 0 = female, 1 = male)."),
    (
        &["parent", "socio", "income"],
        "Socioeconomic factors (family support, parental education, income) that influence educational outcomes.",
    ),
];

const FALLBACK_EXPLANATION: &str =
    "Feature used by the model; typically related to student background, study behaviour, or prior performance.";

fn first_match<'a, T: Copy>(name: &str, rules: &'a [(&'a [&'a str], T)]) -> Option<T> {
    let lower = name.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, value)| *value)
}

/// Classify a feature name into a field spec.
pub fn classify(feature_name: &str) -> FieldSpec {
    first_match(feature_name, FIELD_RULES)
        .unwrap_or(FieldKind::Numeric)
        .spec()
}

/// One-line description of what a feature means.
pub fn explain(feature_name: &str) -> &'static str {
    first_match(feature_name, EXPLANATION_RULES).unwrap_or(FALLBACK_EXPLANATION)
}
