use serde::{Serialize, Deserialize};

use crate::constants;
use crate::logic::explain::ExplanationProvider;
use crate::logic::orchestrator::{Orchestrator, PredictionState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub app_version: String,
    pub state: String, // idle, pending, complete
    pub is_loading: bool,
    pub has_result: bool,

    pub explanation: ExplanationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationStatus {
    pub provider: String, // "gemini" | fake in tests
    pub enabled: bool,
}

pub fn get_engine_status<P: ExplanationProvider>(orchestrator: &Orchestrator<P>) -> EngineStatus {
    let state = orchestrator.state();
    let requester = orchestrator.requester();

    EngineStatus {
        app_version: constants::APP_VERSION.to_string(),
        state: state.as_str().to_string(),
        is_loading: state.is_pending(),
        has_result: matches!(state, PredictionState::Complete(_)),
        explanation: ExplanationStatus {
            provider: requester.provider().name().to_string(),
            enabled: requester.is_enabled(),
        },
    }
}
