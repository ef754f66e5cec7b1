//! Form generation and value collection.
//!
//! A [`Form`] pairs each schema feature with its field spec and explanation.
//! Collecting values walks the fields in schema order so the resulting
//! request has the column order the predictor was fitted on.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::field::{classify, explain, FieldSpec};
use crate::model::{FeatureSchema, PredictionRequest};

/// One input of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub spec: FieldSpec,
    pub explanation: String,
}

impl FormField {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            spec: classify(name),
            explanation: explain(name).to_string(),
        }
    }

    /// Check a value against this field's constraints.
    pub fn validate(&self, value: f64) -> Result<(), FormError> {
        if !value.is_finite() {
            return Err(FormError::NotFinite {
                name: self.name.clone(),
            });
        }
        if let Some(options) = &self.spec.options {
            if !options.iter().any(|&o| o as f64 == value) {
                return Err(FormError::NotAnOption {
                    name: self.name.clone(),
                    value,
                    options: options.clone(),
                });
            }
        }
        if let Some(min) = self.spec.min {
            if value < min {
                return Err(FormError::BelowMinimum {
                    name: self.name.clone(),
                    value,
                    min,
                });
            }
        }
        if let Some(max) = self.spec.max {
            if value > max {
                return Err(FormError::AboveMaximum {
                    name: self.name.clone(),
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// The input form for a feature schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub fields: Vec<FormField>,
}

impl Form {
    /// Build one field per schema feature, in schema order.
    pub fn build(schema: &FeatureSchema) -> Self {
        Self {
            fields: schema.iter().map(FormField::new).collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A request holding every field's default value.
    pub fn defaults(&self) -> PredictionRequest {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.spec.default))
            .collect()
    }

    /// Collect submitted values into a request.
    ///
    /// Fields without a submitted value keep their default.
    pub fn collect(&self, inputs: &HashMap<String, f64>) -> Result<PredictionRequest, FormError> {
        let mut unknown: Vec<&String> = inputs
            .keys()
            .filter(|name| self.field(name).is_none())
            .collect();
        unknown.sort();
        if let Some(name) = unknown.first() {
            return Err(FormError::UnknownField((*name).clone()));
        }

        let mut request = PredictionRequest::new();
        for field in &self.fields {
            let value = inputs.get(&field.name).copied().unwrap_or(field.spec.default);
            field.validate(value)?;
            request.insert(field.name.clone(), value);
        }
        Ok(request)
    }
}

/// Parse a `NAME=VALUE` pair.
pub fn parse_assignment(raw: &str) -> Result<(String, f64), FormError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| FormError::MalformedAssignment(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::MalformedAssignment(raw.to_string()));
    }
    let value = value.trim();
    let parsed = value.parse::<f64>().map_err(|_| FormError::InvalidNumber {
        name: name.to_string(),
        raw: value.to_string(),
    })?;
    Ok((name.to_string(), parsed))
}
