use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::logic::explain::{Explanation, ExplanationSource};
use crate::logic::features::FeatureError;
use crate::logic::model::{ScorePair, BOOSTED_MODEL, STRUCTURAL_MODEL};
use crate::logic::risk::{format_percent, HybridResult, RiskCategory};

pub const HYBRID_LABEL: &str = "Hybrid Ensemble";

/// Final, display-only report of one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,

    pub hybrid_score: f64,
    pub rf_prob: f64,
    pub xgb_prob: f64,
    pub risk_category: RiskCategory,

    pub contributing_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub ai_analysis: String,
    pub explanation_source: ExplanationSource,
}

/// One bar of the "Ensemble Voting" chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsembleVote {
    pub name: String,
    /// Rounded percentage
    pub value: u32,
}

impl PredictionResult {
    pub fn assemble(scores: &ScorePair, hybrid: &HybridResult, explanation: Explanation) -> Self {
        let Explanation { result, source, .. } = explanation;
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            hybrid_score: hybrid.hybrid,
            rf_prob: scores.rf,
            xgb_prob: scores.xgb,
            risk_category: hybrid.risk_category,
            contributing_factors: result.top_factors,
            recommendations: result.recommendations,
            ai_analysis: result.analysis,
            explanation_source: source,
        }
    }

    /// e.g. "95.0%"
    pub fn hybrid_percent(&self) -> String {
        format_percent(self.hybrid_score)
    }

    pub fn ensemble_votes(&self) -> Vec<EnsembleVote> {
        [
            (STRUCTURAL_MODEL.name, self.rf_prob),
            (BOOSTED_MODEL.name, self.xgb_prob),
            (HYBRID_LABEL, self.hybrid_score),
        ]
        .iter()
        .map(|(name, prob)| EnsembleVote {
            name: name.to_string(),
            value: (prob * 100.0).round() as u32,
        })
        .collect()
    }

    /// Note shown when the remote analysis could not be produced
    pub fn analysis_note(&self) -> Option<&'static str> {
        match self.explanation_source {
            ExplanationSource::Remote => None,
            ExplanationSource::Fallback => Some("Deep AI analysis was unavailable; showing generic guidance."),
        }
    }
}

// ============================================================================
// STATE MACHINE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionState {
    /// No request in flight, form active
    Idle,
    /// Request in flight, form locked
    Pending { started_at: DateTime<Utc> },
    /// Result displayed, form inactive until reset
    Complete(Box<PredictionResult>),
}

impl PredictionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionState::Idle => "idle",
            PredictionState::Pending { .. } => "pending",
            PredictionState::Complete(_) => "complete",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PredictionState::Pending { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrchestratorError {
    #[error("A prediction is already in progress")]
    Busy,

    #[error("A result is displayed; reset before submitting again")]
    ResultPending,

    #[error("Cannot reset while a prediction is in progress")]
    ResetWhilePending,

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] FeatureError),
}
