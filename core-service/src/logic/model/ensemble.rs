//! Hybrid Ensemble
//!
//! Chạy cả hai heuristic models, trả về ScorePair.
//! Pure - cùng input luôn cho cùng output (bit-identical).

use serde::{Deserialize, Serialize};

use super::heuristics::{simulate_boosted, simulate_structural, BOOSTED_MODEL, STRUCTURAL_MODEL};
use crate::logic::features::FeatureRecord;

/// Two independently bounded probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    /// Structural ("Random Forest") probability, [0.05, 0.95]
    pub rf: f64,
    /// Boosted ("XGBoost") probability, [0.03, 0.98]
    pub xgb: f64,
}

/// Score a record with both models
pub fn score_features(record: &FeatureRecord) -> ScorePair {
    let pair = ScorePair {
        rf: simulate_structural(record),
        xgb: simulate_boosted(record),
    };

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "{}: {:.2} {:?} | {}: {:.2} {:?}",
            STRUCTURAL_MODEL.name,
            pair.rf,
            STRUCTURAL_MODEL.evaluate(record).fired,
            BOOSTED_MODEL.name,
            pair.xgb,
            BOOSTED_MODEL.evaluate(record).fired,
        );
    }

    pair
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_low_risk_hits_floors() {
        let record = FeatureRecord {
            pregnancies: 0,
            glucose: 85.0,
            blood_pressure: 66.0,
            skin_thickness: 29.0,
            insulin: 0.0,
            bmi: 26.6,
            dpf: 0.35,
            age: 31,
        };
        let pair = score_features(&record);
        assert_eq!(pair.rf, 0.05);
        assert_eq!(pair.xgb, 0.03);
    }

    #[test]
    fn test_scenario_high_risk_hits_ceiling() {
        let record = FeatureRecord {
            pregnancies: 6,
            glucose: 155.0,
            blood_pressure: 95.0,
            skin_thickness: 45.0,
            insulin: 250.0,
            bmi: 38.0,
            dpf: 0.6,
            age: 55,
        };
        let pair = score_features(&record);
        // 0.4 + 0.2 + 0.15 + 0.15 + 0.1 = 1.0 -> clamped
        assert_eq!(pair.rf, 0.95);
        // 0.5 + 0.15 + 0.2 + 0.1 = 0.95, dưới ceiling 0.98
        assert!((pair.xgb - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let record = FeatureRecord {
            glucose: 133.3,
            bmi: 31.7,
            insulin: 210.0,
            ..Default::default()
        };
        let first = score_features(&record);
        let second = score_features(&record);
        assert_eq!(first.rf.to_bits(), second.rf.to_bits());
        assert_eq!(first.xgb.to_bits(), second.xgb.to_bits());
    }
}
