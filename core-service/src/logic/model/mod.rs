//! Model Module - Heuristic Scoring Engine
//!
//! Hai heuristic "classifiers" chạy trên cùng một rule evaluator.
//!
//! ## Structure
//! - `rules`: generic evaluator (thresholds, exclusive branches, clamp)
//! - `heuristics`: Random Forest / XGBoost analog rule sets
//! - `ensemble`: chạy cả hai -> ScorePair

pub mod rules;
pub mod heuristics;
pub mod ensemble;

// Re-export common types
pub use rules::{Metric, Rule, RuleOutcome, RuleSet, RuleStep, Threshold};
pub use heuristics::{simulate_boosted, simulate_structural, BOOSTED_MODEL, STRUCTURAL_MODEL};
pub use ensemble::{score_features, ScorePair};
