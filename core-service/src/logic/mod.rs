//! Logic Module - Business Logic & Engines
//!
//! Chứa các engines xử lý: Scoring, Risk, Explain, Orchestrator.
//!
//! ## Architecture
//! - `features/` - Clinical input (record + form coercion)
//! - `model/` - Heuristic models (rule evaluator, RF / XGBoost analogs)
//! - `risk/` - Hybrid combiner + risk tiers
//! - `explain/` - AI explanation (provider seam, Gemini client, fallback)
//! - `orchestrator/` - Prediction state machine

pub mod config;

pub mod features;
pub mod model;
pub mod risk;
pub mod explain;
pub mod orchestrator;
