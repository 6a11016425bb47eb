//! Hybrid Combiner
//!
//! CHỈ chứa logic combine + classify - không có types, không có policy.
//! Input: ScorePair
//! Output: HybridResult

use super::rules::RiskThresholds;
use super::types::{HybridResult, RiskCategory};
use crate::logic::model::ScorePair;

// ============================================================================
// MAIN COMBINE FUNCTION
// ============================================================================

/// Average both model probabilities and assign a tier
pub fn combine(scores: &ScorePair) -> HybridResult {
    combine_with_thresholds(scores, &RiskThresholds::default())
}

/// Combine with custom tier boundaries
pub fn combine_with_thresholds(scores: &ScorePair, thresholds: &RiskThresholds) -> HybridResult {
    let hybrid = (scores.rf + scores.xgb) / 2.0;

    HybridResult {
        hybrid,
        risk_category: classify_with_thresholds(hybrid, thresholds),
    }
}

/// Tier for a hybrid score
pub fn classify(hybrid: f64) -> RiskCategory {
    classify_with_thresholds(hybrid, &RiskThresholds::default())
}

pub fn classify_with_thresholds(hybrid: f64, thresholds: &RiskThresholds) -> RiskCategory {
    if hybrid < thresholds.low_max {
        RiskCategory::Low
    } else if hybrid < thresholds.high_min {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}

// ============================================================================
// TESTS
// ============================================================================
