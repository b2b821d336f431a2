use serde::{Deserialize, Serialize};

use super::enums::RiskCategory;

/// One set of vital-sign measurements for a risk assessment.
///
/// All fields are positive finite numbers. Range validation (e.g. age 18–90)
/// is the capturing surface's job; the engine computes with whatever it is
/// handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub age: f64,
    /// Systolic blood pressure, mmHg.
    pub systolic: f64,
    /// Diastolic blood pressure, mmHg.
    pub diastolic: f64,
    /// Fasting blood sugar, mg/dL.
    pub blood_sugar: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Total cholesterol, mg/dL.
    pub cholesterol: f64,
}

impl HealthMetrics {
    /// Body-mass index: weight(kg) / height(m)².
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

/// Per-condition risk scores. Raw model output is in [0, 1]; after the
/// engine's adjustment pass every field lies in [0.05, 0.95].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub diabetes: f64,
    pub hypertension: f64,
    pub heart_disease: f64,
}

impl RiskScores {
    pub fn get(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::Diabetes => self.diabetes,
            RiskCategory::Hypertension => self.hypertension,
            RiskCategory::HeartDisease => self.heart_disease,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RiskCategory, f64)> {
        [
            (RiskCategory::Diabetes, self.diabetes),
            (RiskCategory::Hypertension, self.hypertension),
            (RiskCategory::HeartDisease, self.heart_disease),
        ]
        .into_iter()
    }
}
