//! Commands - API cho Frontend
//!
//! Form submission -> hybrid prediction -> report. Errors trả về dạng String
//! để front end hiển thị trực tiếp.

use serde::{Deserialize, Serialize};

use crate::logic::explain::ExplanationProvider;
use crate::logic::features::{FeatureRecord, FormField, RawForm, FORM_FIELDS};
use crate::logic::orchestrator::{EnsembleVote, Orchestrator, PredictionResult};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Everything the result screen renders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub result: PredictionResult,
    /// e.g. "95.0%"
    pub hybrid_percent: String,
    pub risk_color: String,
    pub ensemble_votes: Vec<EnsembleVote>,
    /// Set when the generic fallback explanation is shown
    pub analysis_note: Option<String>,
}

impl From<PredictionResult> for AnalysisReport {
    fn from(result: PredictionResult) -> Self {
        Self {
            hybrid_percent: result.hybrid_percent(),
            risk_color: result.risk_category.color().to_string(),
            ensemble_votes: result.ensemble_votes(),
            analysis_note: result.analysis_note().map(str::to_string),
            result,
        }
    }
}

// ============================================================================
// ANALYSIS COMMANDS
// ============================================================================

/// Submit the form and wait for the full report
pub async fn run_analysis<P: ExplanationProvider>(
    orchestrator: &Orchestrator<P>,
    form: &RawForm,
) -> Result<AnalysisReport, String> {
    let features = FeatureRecord::from_form(form).map_err(|e| e.to_string())?;

    orchestrator
        .submit(features)
        .await
        .map(AnalysisReport::from)
        .map_err(|e| e.to_string())
}

/// "Reset Clinical Input"
pub fn reset_analysis<P: ExplanationProvider>(orchestrator: &Orchestrator<P>) -> Result<bool, String> {
    orchestrator.reset().map(|_| true).map_err(|e| e.to_string())
}

/// Report currently on screen, if any
pub fn get_current_report<P: ExplanationProvider>(orchestrator: &Orchestrator<P>) -> Option<AnalysisReport> {
    orchestrator.result().map(AnalysisReport::from)
}

// ============================================================================
// FORM COMMANDS
// ============================================================================

pub fn get_form_fields() -> Vec<FormField> {
    FORM_FIELDS.to_vec()
}

pub fn get_default_form() -> RawForm {
    RawForm::defaults()
}
