use std::time::Instant;

use crate::config::{MAX_CONDITIONS_FULL, MAX_CONDITIONS_QUICK, MIN_CONDITION_PROBABILITY};
use crate::inference::{ConditionInferenceService, InferenceError};
use crate::models::{SymptomSelection, Vocabulary};

use super::encoder::encode;
use super::postprocess::filter_predictions;
use super::recommendations::symptom_recommendations;
use super::severity::classify_severity;
use super::types::{AnalysisError, SymptomAnalysis};

/// Orchestrates the symptom pipeline around one loaded condition model.
///
/// The model is shared and read-only; the engine holds no per-request state,
/// so independent analyses may run against the same instance. Exactly one
/// inference call happens per analysis, and it is the only suspension point.
pub struct SymptomAnalysisEngine<S: ConditionInferenceService> {
    service: S,
}

impl<S: ConditionInferenceService> SymptomAnalysisEngine<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Full analysis: up to four conditions plus severity and advice.
    pub async fn analyze(
        &self,
        selection: &SymptomSelection,
        vocabulary: &Vocabulary,
    ) -> Result<SymptomAnalysis, AnalysisError> {
        self.run(selection, vocabulary, MAX_CONDITIONS_FULL).await
    }

    /// Quick check: same pipeline, but only the single top condition.
    pub async fn quick_check(
        &self,
        selection: &SymptomSelection,
        vocabulary: &Vocabulary,
    ) -> Result<SymptomAnalysis, AnalysisError> {
        self.run(selection, vocabulary, MAX_CONDITIONS_QUICK).await
    }

    async fn run(
        &self,
        selection: &SymptomSelection,
        vocabulary: &Vocabulary,
        max_conditions: usize,
    ) -> Result<SymptomAnalysis, AnalysisError> {
        let start = Instant::now();

        let vector = encode(selection, vocabulary)?;

        // Refuse to call a cold model; the caller sees the same error the
        // service itself would raise.
        if !self.service.is_ready() {
            return Err(InferenceError::ModelUnavailable(
                "condition model not loaded".into(),
            )
            .into());
        }

        let predictions = self.service.predict(&vector).await?;
        let conditions =
            filter_predictions(&predictions, MIN_CONDITION_PROBABILITY, max_conditions);

        let severity = classify_severity(selection);
        let recommendations = symptom_recommendations(severity, selection);

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            symptoms = selection.len(),
            encoded = vector.active_count(),
            conditions = conditions.len(),
            severity = %severity,
            processing_ms = processing_time_ms,
            "Symptom analysis complete"
        );

        Ok(SymptomAnalysis::new(
            conditions,
            severity,
            recommendations,
            processing_time_ms,
        ))
    }
}
