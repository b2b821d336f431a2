use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{RiskLevel, RiskScores};

/// Qualitative band per scored condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevels {
    pub diabetes: RiskLevel,
    pub hypertension: RiskLevel,
    pub heart_disease: RiskLevel,
}

/// Complete result of one risk assessment. Transient, per request; either
/// fully populated or the assessment failed and nothing was returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub bmi: f64,
    /// Adjusted scores, each in [0.05, 0.95].
    pub scores: RiskScores,
    pub levels: RiskLevels,
    /// Ordered advice strings; never empty (a healthy profile gets the
    /// maintenance fallback).
    pub recommendations: Vec<String>,
    pub assessed_at: NaiveDateTime,
    pub processing_time_ms: u64,
}

impl RiskAssessment {
    pub(crate) fn new(
        bmi: f64,
        scores: RiskScores,
        levels: RiskLevels,
        recommendations: Vec<String>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bmi,
            scores,
            levels,
            recommendations,
            assessed_at: Utc::now().naive_utc(),
            processing_time_ms,
        }
    }
}
