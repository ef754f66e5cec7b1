//! scorecast-core: Feature schema resolution, form typing, and prediction sessions.
//!
//! This crate defines the predictor traits, the data model for feature
//! schemas and prediction requests, and the keyword heuristics that turn a
//! feature name into a typed form field.

pub mod error;
pub mod field;
pub mod form;
pub mod model;
pub mod predict;
pub mod report;
pub mod schema;
pub mod session;
pub mod traits;

pub use error::{FormError, ScorecastError};
pub use field::{classify, explain, FieldKind, FieldSpec};
pub use form::{Form, FormField};
pub use model::{FeatureSchema, FeatureValue, PredictionRequest};
pub use schema::{resolve_schema, SchemaOrigin};
pub use session::Session;
pub use traits::{NamedStep, Predictor, SchemaSource};
