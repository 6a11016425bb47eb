//! Features Module - Clinical Input
//!
//! Tách phần input ra khỏi scoring: record + form coercion.
//!
//! ## Structure
//! - `record`: FeatureRecord (8 chỉ số) + validation
//! - `form`: RawForm, field descriptors, `parseFloat`-style coercion

pub mod record;
pub mod form;


// Re-export common types
pub use record::{FeatureError, FeatureRecord, FEATURE_COUNT, FEATURE_NAMES};
pub use form::{form_field, parse_float_prefix, FormField, FormValue, RawForm, FORM_FIELDS};
