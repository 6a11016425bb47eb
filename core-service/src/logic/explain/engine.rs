use super::provider::{ExplainError, ExplanationProvider};
use super::types::{Explanation, EXPECTED_RECOMMENDATIONS, EXPECTED_TOP_FACTORS};
use crate::logic::features::FeatureRecord;

/// The only unreliable boundary: every provider failure becomes the static fallback.
pub struct ExplanationRequester<P> {
    provider: P,
    enabled: bool,
}

impl<P: ExplanationProvider> ExplanationRequester<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, enabled: true }
    }

    /// Kill-switch: disabled requester never calls the provider
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Always resolves. Single attempt, no retry.
    pub async fn request(&self, features: &FeatureRecord, hybrid_score: f64) -> Explanation {
        if !self.enabled {
            log::info!("Remote explanations disabled - using fallback");
            return Explanation::fallback(ExplainError::Disabled);
        }

        match self.provider.explain(features, hybrid_score).await {
            Ok(result) => {
                if !result.has_expected_shape() {
                    log::warn!(
                        "{} returned {} recommendations / {} factors (expected {} / {})",
                        self.provider.name(),
                        result.recommendations.len(),
                        result.top_factors.len(),
                        EXPECTED_RECOMMENDATIONS,
                        EXPECTED_TOP_FACTORS,
                    );
                }
                Explanation::remote(result)
            }
            Err(e) => {
                log::warn!("{} explanation unavailable, using fallback: {}", self.provider.name(), e);
                Explanation::fallback(e)
            }
        }
    }
}
