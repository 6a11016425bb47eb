use serde::{Deserialize, Serialize};

/// Structured explanation returned by the text-generation service.
/// Shape khớp với response schema - thiếu field nào là parse lỗi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationResult {
    /// Short (2-sentence) clinical summary
    pub analysis: String,
    /// Expected 4 actionable steps
    pub recommendations: Vec<String>,
    /// Expected 3 most influential features
    pub top_factors: Vec<String>,
}

pub const EXPECTED_RECOMMENDATIONS: usize = 4;
pub const EXPECTED_TOP_FACTORS: usize = 3;

pub const FALLBACK_ANALYSIS: &str = "The system is currently unable to generate deep clinical insights. Please review the raw hybrid scores below.";

pub const FALLBACK_RECOMMENDATIONS: [&str; EXPECTED_RECOMMENDATIONS] = [
    "Consult a specialist for a fasting plasma glucose test",
    "Monitor carbohydrate intake",
    "Maintain regular physical activity (150 mins/week)",
    "Schedule a follow-up screening in 3 months",
];

pub const FALLBACK_TOP_FACTORS: [&str; EXPECTED_TOP_FACTORS] = ["Blood Glucose", "BMI", "Age"];

impl ExplanationResult {
    /// Static canned explanation used whenever the remote call fails
    pub fn fallback() -> Self {
        Self {
            analysis: FALLBACK_ANALYSIS.to_string(),
            recommendations: FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
            top_factors: FALLBACK_TOP_FACTORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_expected_shape(&self) -> bool {
        self.recommendations.len() == EXPECTED_RECOMMENDATIONS
            && self.top_factors.len() == EXPECTED_TOP_FACTORS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplanationSource {
    Remote,
    Fallback,
}

impl ExplanationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplanationSource::Remote => "remote",
            ExplanationSource::Fallback => "fallback",
        }
    }
}

/// What the requester hands back: always a result, plus where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub result: ExplanationResult,
    pub source: ExplanationSource,
    /// Why the fallback was used (None for remote results)
    pub fallback_reason: Option<String>,
}

impl Explanation {
    pub fn remote(result: ExplanationResult) -> Self {
        Self {
            result,
            source: ExplanationSource::Remote,
            fallback_reason: None,
        }
    }

    pub fn fallback(reason: impl std::fmt::Display) -> Self {
        Self {
            result: ExplanationResult::fallback(),
            source: ExplanationSource::Fallback,
            fallback_reason: Some(reason.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ExplanationSource::Fallback
    }
}
