//! Core data model types for scorecast.
//!
//! A [`FeatureSchema`] is the ordered list of inputs a predictor expects; a
//! [`PredictionRequest`] is one row of values keyed by those names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Features shown when no model schema can be detected.
pub const DEFAULT_FEATURES: [&str; 6] = [
    "study_hours_per_week",
    "attendance_pct",
    "previous_score",
    "sleep_hours",
    "parental_education_level",
    "age",
];

/// Ordered feature names, matching the column order a predictor was fit on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema(Vec<String>);

impl FeatureSchema {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// The six-feature demonstration schema.
    pub fn default_schema() -> Self {
        Self(DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}

impl From<&[String]> for FeatureSchema {
    fn from(names: &[String]) -> Self {
        Self(names.to_vec())
    }
}

/// One named input value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValue {
    pub name: String,
    pub value: f64,
}

/// A single row of named feature values, kept in form order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRequest {
    values: Vec<FeatureValue>,
}

impl PredictionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any earlier value for the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.values.iter_mut().find(|v| v.name == name) {
            Some(existing) => existing.value = value,
            None => self.values.push(FeatureValue { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(|v| v.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PredictionRequest {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut request = PredictionRequest::new();
        for (name, value) in iter {
            request.insert(name, value);
        }
        request
    }
}

impl fmt::Display for PredictionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .values
            .iter()
            .map(|v| format!("{}={}", v.name, v.value))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
