//! DiaGuard Core
//!
//! Hybrid diabetes risk prediction: two heuristic models -> hybrid score ->
//! risk tier, plus an AI-generated explanation with a static fallback.

pub mod api;
pub mod constants;
pub mod logic;

pub use logic::config::AppConfig;
pub use logic::explain::{ExplanationProvider, ExplanationRequester, GeminiClient, GeminiConfig};
pub use logic::features::{FeatureRecord, RawForm};
pub use logic::orchestrator::{Orchestrator, PredictionResult, PredictionState};
