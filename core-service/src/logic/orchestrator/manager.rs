use chrono::Utc;
use parking_lot::Mutex;

use super::types::{OrchestratorError, PredictionResult, PredictionState};
use crate::logic::explain::{ExplanationProvider, ExplanationRequester};
use crate::logic::features::FeatureRecord;
use crate::logic::model::score_features;
use crate::logic::risk::combine;

/// Scorer -> Combiner -> Explanation, one prediction at a time.
pub struct Orchestrator<P> {
    requester: ExplanationRequester<P>,
    state: Mutex<PredictionState>,
}

impl<P: ExplanationProvider> Orchestrator<P> {
    pub fn new(requester: ExplanationRequester<P>) -> Self {
        Self {
            requester,
            state: Mutex::new(PredictionState::Idle),
        }
    }

    pub fn requester(&self) -> &ExplanationRequester<P> {
        &self.requester
    }

    pub fn state(&self) -> PredictionState {
        self.state.lock().clone()
    }

    /// Loading flag
    pub fn is_loading(&self) -> bool {
        self.state.lock().is_pending()
    }

    pub fn result(&self) -> Option<PredictionResult> {
        match &*self.state.lock() {
            PredictionState::Complete(result) => Some((**result).clone()),
            _ => None,
        }
    }

    /// Idle -> Pending -> Complete. Never fails once Pending.
    pub async fn submit(&self, features: FeatureRecord) -> Result<PredictionResult, OrchestratorError> {
        features.validate()?;
        self.begin()?;
        let pending = PendingGuard { state: &self.state, armed: true };

        log::info!("Running hybrid prediction...");

        let scores = score_features(&features);
        let hybrid = combine(&scores);
        let explanation = self.requester.request(&features, hybrid.hybrid).await;

        let result = PredictionResult::assemble(&scores, &hybrid, explanation);
        log::info!(
            "Prediction {} complete: {} risk ({}, explanation: {})",
            result.id,
            result.risk_category,
            result.hybrid_percent(),
            result.explanation_source.as_str(),
        );

        pending.complete(result.clone());
        Ok(result)
    }

    /// Complete -> Idle. Discards the result.
    pub fn reset(&self) -> Result<(), OrchestratorError> {
        let mut state = self.state.lock();
        if state.is_pending() {
            return Err(OrchestratorError::ResetWhilePending);
        }
        *state = PredictionState::Idle;
        Ok(())
    }

    fn begin(&self) -> Result<(), OrchestratorError> {
        let mut state = self.state.lock();
        match &*state {
            PredictionState::Idle => {}
            PredictionState::Pending { .. } => return Err(OrchestratorError::Busy),
            PredictionState::Complete(_) => return Err(OrchestratorError::ResultPending),
        }
        *state = PredictionState::Pending { started_at: Utc::now() };
        Ok(())
    }
}

/// Back to Idle if the submit future is dropped mid-flight
struct PendingGuard<'a> {
    state: &'a Mutex<PredictionState>,
    armed: bool,
}

impl PendingGuard<'_> {
    fn complete(mut self, result: PredictionResult) {
        *self.state.lock() = PredictionState::Complete(Box::new(result));
        self.armed = false;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("Prediction abandoned before completion");
            *self.state.lock() = PredictionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::explain::types::{FALLBACK_RECOMMENDATIONS, FALLBACK_TOP_FACTORS};
    use crate::logic::explain::{ExplainError, ExplanationResult, ExplanationSource};
    use crate::logic::risk::RiskCategory;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct StaticProvider(Result<ExplanationResult, ExplainError>);

    #[async_trait]
    impl ExplanationProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn explain(&self, _: &FeatureRecord, _: f64) -> Result<ExplanationResult, ExplainError> {
            self.0.clone()
        }
    }

    /// Blocks until released
    #[derive(Default)]
    struct GatedProvider {
        release: Notify,
    }

    #[async_trait]
    impl ExplanationProvider for GatedProvider {
        fn name(&self) -> &str {
            "gated"
        }

        async fn explain(&self, _: &FeatureRecord, _: f64) -> Result<ExplanationResult, ExplainError> {
            self.release.notified().await;
            Err(ExplainError::Network("timed out".into()))
        }
    }

    fn remote() -> ExplanationResult {
        ExplanationResult {
            analysis: "High glucose dominates. Obesity compounds the risk.".into(),
            recommendations: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            top_factors: vec!["Glucose".into(), "BMI".into(), "Age".into()],
        }
    }

    fn orchestrator(outcome: Result<ExplanationResult, ExplainError>) -> Orchestrator<StaticProvider> {
        Orchestrator::new(ExplanationRequester::new(StaticProvider(outcome)))
    }

    fn scenario_a() -> FeatureRecord {
        FeatureRecord {
            pregnancies: 0,
            glucose: 85.0,
            blood_pressure: 66.0,
            skin_thickness: 29.0,
            insulin: 0.0,
            bmi: 26.6,
            dpf: 0.35,
            age: 31,
        }
    }

    fn scenario_b() -> FeatureRecord {
        FeatureRecord {
            pregnancies: 6,
            glucose: 155.0,
            blood_pressure: 95.0,
            skin_thickness: 45.0,
            insulin: 250.0,
            bmi: 38.0,
            dpf: 0.6,
            age: 55,
        }
    }

    #[tokio::test]
    async fn test_scenario_a_low_risk() {
        let orchestrator = orchestrator(Ok(remote()));
        let result = orchestrator.submit(scenario_a()).await.unwrap();

        assert_eq!(result.rf_prob, 0.05);
        assert_eq!(result.xgb_prob, 0.03);
        assert!((result.hybrid_score - 0.04).abs() < 1e-12);
        assert_eq!(result.risk_category, RiskCategory::Low);
        assert_eq!(result.contributing_factors, remote().top_factors);
        assert_eq!(result.explanation_source, ExplanationSource::Remote);
        assert!(result.analysis_note().is_none());
    }

    #[tokio::test]
    async fn test_scenario_b_high_risk_with_fallback() {
        let orchestrator = orchestrator(Err(ExplainError::Network("unreachable".into())));
        let result = orchestrator.submit(scenario_b()).await.unwrap();

        assert_eq!(result.rf_prob, 0.95);
        assert!((result.xgb_prob - 0.95).abs() < 1e-9);
        assert!((result.hybrid_score - 0.95).abs() < 1e-9);
        assert_eq!(result.risk_category, RiskCategory::High);
        assert_eq!(result.recommendations, FALLBACK_RECOMMENDATIONS.to_vec());
        assert_eq!(result.contributing_factors, FALLBACK_TOP_FACTORS.to_vec());
        assert!(result.analysis_note().is_some());
    }

    #[tokio::test]
    async fn test_state_machine_cycle() {
        let orchestrator = orchestrator(Ok(remote()));
        assert_eq!(orchestrator.state(), PredictionState::Idle);

        let result = orchestrator.submit(scenario_a()).await.unwrap();
        assert_eq!(orchestrator.result(), Some(result));
        assert_eq!(orchestrator.state().as_str(), "complete");

        // Form inactive until reset
        assert_eq!(orchestrator.submit(scenario_b()).await, Err(OrchestratorError::ResultPending));

        orchestrator.reset().unwrap();
        assert_eq!(orchestrator.state(), PredictionState::Idle);
        assert!(orchestrator.result().is_none());

        let second = orchestrator.submit(scenario_b()).await.unwrap();
        assert_eq!(second.risk_category, RiskCategory::High);
    }

    #[tokio::test]
    async fn test_reset_when_idle_is_noop() {
        let orchestrator = orchestrator(Ok(remote()));
        assert!(orchestrator.reset().is_ok());
        assert_eq!(orchestrator.state(), PredictionState::Idle);
    }

    #[tokio::test]
    async fn test_invalid_input_stays_idle() {
        let orchestrator = orchestrator(Ok(remote()));
        let record = FeatureRecord { glucose: -5.0, ..scenario_a() };

        let err = orchestrator.submit(record).await.unwrap_err();
        assert!(matches!(err, OrchestratorError::InvalidInput(_)));
        assert_eq!(orchestrator.state(), PredictionState::Idle);
    }

    #[tokio::test]
    async fn test_second_submission_while_pending_is_refused() {
        let orchestrator = Orchestrator::new(ExplanationRequester::new(GatedProvider::default()));

        let first = orchestrator.submit(scenario_b());
        let contender = async {
            tokio::task::yield_now().await;
            assert!(orchestrator.is_loading());
            assert_eq!(orchestrator.submit(scenario_a()).await, Err(OrchestratorError::Busy));
            assert_eq!(orchestrator.reset(), Err(OrchestratorError::ResetWhilePending));
            orchestrator.requester().provider().release.notify_one();
        };

        let (result, _) = tokio::join!(first, contender);
        let result = result.unwrap();
        assert_eq!(result.explanation_source, ExplanationSource::Fallback);
        assert!(!orchestrator.is_loading());
    }

    #[tokio::test]
    async fn test_dropped_submission_returns_to_idle() {
        let orchestrator = Orchestrator::new(ExplanationRequester::new(GatedProvider::default()));

        let attempt = tokio::time::timeout(Duration::from_millis(20), orchestrator.submit(scenario_a())).await;
        assert!(attempt.is_err());
        assert_eq!(orchestrator.state(), PredictionState::Idle);
    }

    #[test]
    fn test_ensemble_votes_rounded() {
        let result = PredictionResult {
            id: uuid::Uuid::new_v4(),
            created_at: Utc::now(),
            hybrid_score: 0.356,
            rf_prob: 0.4,
            xgb_prob: 0.31,
            risk_category: RiskCategory::Moderate,
            contributing_factors: vec![],
            recommendations: vec![],
            ai_analysis: String::new(),
            explanation_source: ExplanationSource::Remote,
        };
        let votes: Vec<(String, u32)> = result
            .ensemble_votes()
            .into_iter()
            .map(|v| (v.name, v.value))
            .collect();
        assert_eq!(
            votes,
            vec![
                ("Random Forest".to_string(), 40),
                ("XGBoost".to_string(), 31),
                ("Hybrid Ensemble".to_string(), 36),
            ]
        );
    }
}
