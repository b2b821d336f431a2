//! The opaque predictor boundary.
//!
//! The statistical models are external collaborators: already loaded,
//! read-only, pure functions of their input. The engines only see these two
//! traits, so tests swap in deterministic stubs and production wires in the
//! real model runtime. Readiness is an explicit query — engines must refuse
//! to call `predict` on a model that is not ready rather than letting the
//! call fail somewhere deeper.

use thiserror::Error;

use crate::models::{ConditionPrediction, HealthMetrics, RiskScores, SymptomVector};

/// Failure at the model boundary. Passed through to callers unmodified so
/// "not loaded yet" stays distinguishable from a normal empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("Inference model unavailable: {0}")]
    ModelUnavailable(String),
}

/// Symptom-vector → ranked condition probabilities.
///
/// The returned list is sorted descending by probability; downstream
/// post-processing relies on that ordering and never re-sorts.
pub trait ConditionInferenceService {
    /// Whether the underlying model has finished loading.
    fn is_ready(&self) -> bool;

    /// Run inference. May suspend while the model computes.
    fn predict(
        &self,
        vector: &SymptomVector,
    ) -> impl std::future::Future<Output = Result<Vec<ConditionPrediction>, InferenceError>> + Send;
}

/// Vital-sign measurements → baseline chronic-condition risk scores in [0, 1].
pub trait RiskInferenceService {
    /// Whether the underlying model has finished loading.
    fn is_ready(&self) -> bool;

    /// Run inference. May suspend while the model computes.
    fn predict(
        &self,
        metrics: &HealthMetrics,
    ) -> impl std::future::Future<Output = Result<RiskScores, InferenceError>> + Send;
}

// ─── Deterministic stubs for engine tests ────────────────────────────────────


#[cfg(test)]
mod tests {
    use super::stubs::*;
    use super::*;

    #[tokio::test]
    async fn not_ready_stub_fails_with_model_unavailable() {
        let service = StubConditionService::not_ready();
        assert!(!service.is_ready());
        let err = service
            .predict(&SymptomVector(vec![1, 0]))
            .await
            .unwrap_err();
        assert!(matches!(err, InferenceError::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn ready_stub_returns_fixed_ranking() {
        let service = StubConditionService::ranked(vec![
            ConditionPrediction::new("Influenza", 0.72),
            ConditionPrediction::new("Common cold", 0.41),
        ]);
        let predictions = service.predict(&SymptomVector(vec![1, 1, 0])).await.unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].condition, "Influenza");
    }
}
