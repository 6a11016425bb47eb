//! Feature Record
//!
//! Bộ 8 chỉ số lâm sàng của một bệnh nhân (Pima layout).
//! Immutable per prediction - tạo từ form, dùng một lần rồi bỏ.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of clinical fields in a record
pub const FEATURE_COUNT: usize = 8;

/// Canonical field names, in form order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "pregnancies",
    "glucose",
    "bloodPressure",
    "skinThickness",
    "insulin",
    "bmi",
    "dpf",
    "age",
];

/// One patient's clinical metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub pregnancies: u32,
    /// Plasma glucose (mg/dL)
    pub glucose: f64,
    /// Diastolic blood pressure (mm Hg)
    pub blood_pressure: f64,
    /// Triceps skin fold thickness (mm)
    pub skin_thickness: f64,
    /// 2-hour serum insulin (mu U/ml)
    pub insulin: f64,
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Diabetes pedigree function
    pub dpf: f64,
    pub age: u32,
}

/// Default form values
impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            pregnancies: 0,
            glucose: 120.0,
            blood_pressure: 80.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 25.0,
            dpf: 0.5,
            age: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl FeatureRecord {
    /// Check the only hard rules: every value finite and non-negative.
    pub fn validate(&self) -> Result<(), FeatureError> {
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(FeatureError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(FeatureError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Validated constructor
    pub fn validated(self) -> Result<Self, FeatureError> {
        self.validate().map(|_| self)
    }

    /// All values as f64, in `FEATURE_NAMES` order
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pregnancies as f64,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.dpf,
            self.age as f64,
        ]
    }

    fn float_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("glucose", self.glucose),
            ("bloodPressure", self.blood_pressure),
            ("skinThickness", self.skin_thickness),
            ("insulin", self.insulin),
            ("bmi", self.bmi),
            ("dpf", self.dpf),
        ]
    }
}
