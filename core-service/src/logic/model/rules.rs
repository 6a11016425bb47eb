//! Rule Evaluator
//!
//! Một evaluator dùng chung cho cả hai heuristic models.
//! Rule set = danh sách steps (predicate, weight) + floor/ceiling clamp.
//! KHÔNG chứa thresholds cụ thể - xem `heuristics.rs`.

use serde::Serialize;

use crate::logic::features::FeatureRecord;

// ============================================================================
// METRIC SELECTOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    Dpf,
    Age,
}

impl Metric {
    pub fn value(&self, record: &FeatureRecord) -> f64 {
        match self {
            Metric::Pregnancies => record.pregnancies as f64,
            Metric::Glucose => record.glucose,
            Metric::BloodPressure => record.blood_pressure,
            Metric::SkinThickness => record.skin_thickness,
            Metric::Insulin => record.insulin,
            Metric::Bmi => record.bmi,
            Metric::Dpf => record.dpf,
            Metric::Age => record.age as f64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Pregnancies => "pregnancies",
            Metric::Glucose => "glucose",
            Metric::BloodPressure => "bloodPressure",
            Metric::SkinThickness => "skinThickness",
            Metric::Insulin => "insulin",
            Metric::Bmi => "bmi",
            Metric::Dpf => "dpf",
            Metric::Age => "age",
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Strict `metric > above`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub metric: Metric,
    pub above: f64,
}

impl Threshold {
    pub fn holds(&self, record: &FeatureRecord) -> bool {
        self.metric.value(record) > self.above
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} > {}", self.metric.as_str(), self.above)
    }
}

/// Adds `weight` when every threshold holds
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub when: &'static [Threshold],
    pub weight: f64,
}

impl Rule {
    pub fn matches(&self, record: &FeatureRecord) -> bool {
        self.when.iter().all(|t| t.holds(record))
    }

    pub fn label(&self) -> String {
        self.when
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" && ")
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RuleStep {
    /// Independent rule
    Always(Rule),
    /// Mutually exclusive branches: chỉ rule đầu tiên match được cộng
    FirstOf(&'static [Rule]),
}

/// One heuristic model
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub name: &'static str,
    pub steps: &'static [RuleStep],
    pub floor: f64,
    pub ceiling: f64,
}

/// Evaluation trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOutcome {
    /// Accumulated score before clamping
    pub raw: f64,
    /// Clamped to [floor, ceiling]
    pub score: f64,
    pub fired: Vec<String>,
}

impl RuleSet {
    pub fn evaluate(&self, record: &FeatureRecord) -> RuleOutcome {
        let mut raw = 0.0_f64;
        let mut fired = Vec::new();

        for step in self.steps {
            let hit = match step {
                RuleStep::Always(rule) => Some(rule).filter(|r| r.matches(record)),
                RuleStep::FirstOf(branches) => branches.iter().find(|r| r.matches(record)),
            };
            if let Some(rule) = hit {
                raw += rule.weight;
                fired.push(rule.label());
            }
        }

        RuleOutcome {
            raw,
            score: raw.max(self.floor).min(self.ceiling),
            fired,
        }
    }

    /// Clamped score only
    pub fn score(&self, record: &FeatureRecord) -> f64 {
        self.evaluate(record).score
    }
}
