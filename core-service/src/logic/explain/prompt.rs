//! Explanation Request
//!
//! Payload gửi lên text-generation service: 5 features quan trọng nhất
//! + hybrid score (dạng %) + output schema bắt buộc.

use serde::Serialize;
use serde_json::{json, Value};

use crate::logic::features::FeatureRecord;
use crate::logic::risk::format_percent;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationRequest {
    pub glucose: f64,
    pub bmi: f64,
    pub age: u32,
    pub dpf: f64,
    pub insulin: f64,
    /// e.g. "73.5%"
    pub hybrid_score: String,
}

impl ExplanationRequest {
    pub fn new(features: &FeatureRecord, hybrid_score: f64) -> Self {
        Self {
            glucose: features.glucose,
            bmi: features.bmi,
            age: features.age,
            dpf: features.dpf,
            insulin: features.insulin,
            hybrid_score: format_percent(hybrid_score),
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Analyze these diabetes risk features and provide a clinical XAI report.\n\
             \n\
             Metrics:\n\
             - Glucose: {} mg/dL\n\
             - BMI: {}\n\
             - Age: {}\n\
             - DPF: {}\n\
             - Insulin: {}\n\
             \n\
             Hybrid ML Consensus Score: {}\n\
             \n\
             Requirements:\n\
             1. Identify the 3 most critical features influencing this specific patient's risk.\n\
             2. Provide a 2-sentence professional clinical summary of the risk profile.\n\
             3. Suggest 4 specific, actionable lifestyle or medical steps.\n",
            self.glucose, self.bmi, self.age, self.dpf, self.insulin, self.hybrid_score,
        )
    }
}

/// Structured-output schema: all three fields required
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "analysis": { "type": "STRING" },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "topFactors": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["analysis", "recommendations", "topFactors"]
    })
}
