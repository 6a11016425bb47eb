//! Orchestrator Module
//!
//! Idle -> Pending -> Complete -> (reset) -> Idle.
//! Không có error state từ Pending: explanation luôn resolve (remote hoặc fallback).

pub mod types;
pub mod manager;

pub use types::{EnsembleVote, OrchestratorError, PredictionResult, PredictionState, HYBRID_LABEL};
pub use manager::Orchestrator;
