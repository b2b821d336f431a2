use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::inference::InferenceError;
use crate::models::{ConditionPrediction, SeverityLevel};

/// Errors from the symptom pipeline.
///
/// Boundary failures keep their original `InferenceError` inside the
/// `Inference` variant so callers can still tell "model not ready" apart
/// from anything the rule layer raised itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No symptoms selected")]
    EmptyInput,

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Complete result of one symptom analysis. Transient: built per request,
/// rendered, discarded. Either every field is populated consistently or the
/// analysis failed and nothing was returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    pub id: Uuid,
    /// Ranked conditions that cleared the probability threshold.
    /// Empty is a valid outcome, not a failure.
    pub conditions: Vec<ConditionPrediction>,
    pub severity: SeverityLevel,
    /// Ordered, de-duplicated advice strings.
    pub recommendations: Vec<String>,
    pub analyzed_at: NaiveDateTime,
    pub processing_time_ms: u64,
}

impl SymptomAnalysis {
    pub(crate) fn new(
        conditions: Vec<ConditionPrediction>,
        severity: SeverityLevel,
        recommendations: Vec<String>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            conditions,
            severity,
            recommendations,
            analyzed_at: Utc::now().naive_utc(),
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_serializes_for_the_ui_boundary() {
        let analysis = SymptomAnalysis::new(
            vec![ConditionPrediction::new("Influenza", 0.62)],
            SeverityLevel::High,
            vec!["Seek immediate medical attention".into()],
            3,
        );

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["severity"], "high");
        assert_eq!(json["conditions"][0]["condition"], "Influenza");
        assert_eq!(json["processing_time_ms"], 3);
    }

    #[test]
    fn inference_error_passes_through_unwrapped() {
        let boundary = InferenceError::ModelUnavailable("still loading".into());
        let err: AnalysisError = boundary.clone().into();
        assert_eq!(err, AnalysisError::Inference(boundary));
        // transparent: the message is the boundary's own
        assert_eq!(err.to_string(), "Inference model unavailable: still loading");
    }
}
