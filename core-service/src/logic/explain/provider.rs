//! Explanation Provider
//!
//! Seam cho external text-generation capability.
//! Real impl: `GeminiClient`. Tests: fake providers.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::types::ExplanationResult;
use crate::logic::features::FeatureRecord;

/// Every way the remote explanation can fail. Never escapes the requester.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Remote explanations disabled")]
    Disabled,

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Empty response from explanation service")]
    EmptyResponse,

    #[error("Malformed explanation payload: {0}")]
    Malformed(String),
}

/// `(FeatureRecord, hybrid score) -> ExplanationResult`
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    async fn explain(
        &self,
        features: &FeatureRecord,
        hybrid_score: f64,
    ) -> Result<ExplanationResult, ExplainError>;
}

#[async_trait]
impl<T: ExplanationProvider + ?Sized> ExplanationProvider for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn explain(
        &self,
        features: &FeatureRecord,
        hybrid_score: f64,
    ) -> Result<ExplanationResult, ExplainError> {
        (**self).explain(features, hybrid_score).await
    }
}

#[async_trait]
impl<T: ExplanationProvider + ?Sized> ExplanationProvider for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn explain(
        &self,
        features: &FeatureRecord,
        hybrid_score: f64,
    ) -> Result<ExplanationResult, ExplainError> {
        (**self).explain(features, hybrid_score).await
    }
}
