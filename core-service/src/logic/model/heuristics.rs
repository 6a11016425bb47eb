//! Heuristic Models
//!
//! Hai "classifier" giả lập bằng threshold rules (Pima feature patterns).
//! Không phải ML thật - cutpoints giữ nguyên, không tune.

use super::rules::{Metric, Rule, RuleSet, RuleStep, Threshold};
use crate::logic::features::FeatureRecord;

// ============================================================================
// STRUCTURAL MODEL ("Random Forest")
// ============================================================================

pub const STRUCTURAL_FLOOR: f64 = 0.05;
pub const STRUCTURAL_CEILING: f64 = 0.95;

pub static STRUCTURAL_MODEL: RuleSet = RuleSet {
    name: "Random Forest",
    steps: &[
        RuleStep::FirstOf(&[
            Rule { when: &[Threshold { metric: Metric::Glucose, above: 140.0 }], weight: 0.4 },
            Rule { when: &[Threshold { metric: Metric::Glucose, above: 120.0 }], weight: 0.2 },
        ]),
        RuleStep::Always(Rule { when: &[Threshold { metric: Metric::Bmi, above: 30.0 }], weight: 0.2 }),
        RuleStep::Always(Rule { when: &[Threshold { metric: Metric::Age, above: 45.0 }], weight: 0.15 }),
        RuleStep::Always(Rule { when: &[Threshold { metric: Metric::Dpf, above: 0.5 }], weight: 0.15 }),
        RuleStep::Always(Rule { when: &[Threshold { metric: Metric::Pregnancies, above: 5.0 }], weight: 0.1 }),
    ],
    floor: STRUCTURAL_FLOOR,
    ceiling: STRUCTURAL_CEILING,
};

// ============================================================================
// BOOSTED MODEL ("XGBoost") - nhiều interaction effects hơn
// ============================================================================

pub const BOOSTED_FLOOR: f64 = 0.03;
pub const BOOSTED_CEILING: f64 = 0.98;

pub static BOOSTED_MODEL: RuleSet = RuleSet {
    name: "XGBoost",
    steps: &[
        RuleStep::FirstOf(&[
            Rule {
                when: &[
                    Threshold { metric: Metric::Glucose, above: 150.0 },
                    Threshold { metric: Metric::Bmi, above: 35.0 },
                ],
                weight: 0.5,
            },
            Rule { when: &[Threshold { metric: Metric::Glucose, above: 130.0 }], weight: 0.25 },
        ]),
        RuleStep::Always(Rule { when: &[Threshold { metric: Metric::Insulin, above: 200.0 }], weight: 0.15 }),
        RuleStep::Always(Rule {
            when: &[
                Threshold { metric: Metric::Age, above: 50.0 },
                Threshold { metric: Metric::BloodPressure, above: 90.0 },
            ],
            weight: 0.2,
        }),
        RuleStep::Always(Rule { when: &[Threshold { metric: Metric::SkinThickness, above: 40.0 }], weight: 0.1 }),
    ],
    floor: BOOSTED_FLOOR,
    ceiling: BOOSTED_CEILING,
};

/// Random Forest analog, in [0.05, 0.95]
pub fn simulate_structural(record: &FeatureRecord) -> f64 {
    STRUCTURAL_MODEL.score(record)
}

/// XGBoost analog, in [0.03, 0.98]
pub fn simulate_boosted(record: &FeatureRecord) -> f64 {
    BOOSTED_MODEL.score(record)
}
