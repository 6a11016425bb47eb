//! Form Input
//!
//! Chuyển raw form input -> FeatureRecord.
//! Không reject input sai format - coerce về 0. Chỉ reject số âm.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::record::{FeatureError, FeatureRecord};

// ============================================================================
// FIELD DESCRIPTORS (UI affordances only, không phải validation)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub step: f64,
}

pub const FORM_FIELDS: [FormField; 8] = [
    FormField { name: "pregnancies", label: "Pregnancies", min: 0.0, max: 20.0, unit: "count", step: 1.0 },
    FormField { name: "glucose", label: "Glucose", min: 0.0, max: 300.0, unit: "mg/dL", step: 1.0 },
    FormField { name: "bloodPressure", label: "Blood Pressure", min: 0.0, max: 200.0, unit: "mm Hg", step: 1.0 },
    FormField { name: "skinThickness", label: "Skin Thickness", min: 0.0, max: 100.0, unit: "mm", step: 1.0 },
    FormField { name: "insulin", label: "Insulin", min: 0.0, max: 900.0, unit: "mu U/ml", step: 1.0 },
    FormField { name: "bmi", label: "BMI", min: 0.0, max: 70.0, unit: "kg/m²", step: 0.01 },
    FormField { name: "dpf", label: "Diabetes Pedigree", min: 0.0, max: 3.0, unit: "score", step: 0.01 },
    FormField { name: "age", label: "Age", min: 0.0, max: 120.0, unit: "years", step: 1.0 },
];

/// Look up a descriptor by field name
pub fn form_field(name: &str) -> Option<&'static FormField> {
    FORM_FIELDS.iter().find(|f| f.name == name)
}

// ============================================================================
// RAW FORM
// ============================================================================

/// A single submitted value: whatever the front end sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
    /// null, booleans, arrays... đều coerce về 0
    Other(serde_json::Value),
}

impl FormValue {
    /// `parseFloat(v) || 0`
    pub fn coerce(&self) -> f64 {
        let value = match self {
            FormValue::Number(n) => *n,
            FormValue::Text(s) => parse_float_prefix(s).unwrap_or(0.0),
            FormValue::Other(_) => 0.0,
        };
        if value.is_finite() { value } else { 0.0 }
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        FormValue::Number(n)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

/// Field name -> submitted value. Unknown names are ignored, missing ones read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawForm {
    pub values: HashMap<String, FormValue>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<FormValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Form prefilled with the default record
    pub fn defaults() -> Self {
        let record = FeatureRecord::default();
        FORM_FIELDS
            .iter()
            .zip(record.as_array())
            .fold(Self::new(), |form, (field, value)| form.with(field.name, value))
    }

    fn number(&self, name: &str) -> f64 {
        self.values.get(name).map(FormValue::coerce).unwrap_or(0.0)
    }

    fn count(&self, name: &'static str) -> Result<u32, FeatureError> {
        let value = self.number(name);
        if value < 0.0 {
            return Err(FeatureError::Negative { field: name, value });
        }
        Ok(value.trunc().min(u32::MAX as f64) as u32)
    }
}

impl FeatureRecord {
    /// Build a record from a submitted form.
    pub fn from_form(form: &RawForm) -> Result<Self, FeatureError> {
        let record = FeatureRecord {
            pregnancies: form.count("pregnancies")?,
            glucose: form.number("glucose"),
            blood_pressure: form.number("bloodPressure"),
            skin_thickness: form.number("skinThickness"),
            insulin: form.number("insulin"),
            bmi: form.number("bmi"),
            dpf: form.number("dpf"),
            age: form.count("age")?,
        };
        record.validated()
    }
}

/// Longest leading decimal literal, the way `parseFloat` reads it.
/// "12.5mg" -> 12.5, "  7" -> 7, "abc" -> None, "Infinity" -> inf.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if has_digits || frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    // Exponent only counts if at least one digit follows
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
