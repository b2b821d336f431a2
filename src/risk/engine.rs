use std::time::Instant;

use crate::config::{
    BLOOD_SUGAR_HIGH, BMI_OBESE, BMI_OVERWEIGHT, CHOLESTEROL_HIGH, RISK_SCORE_CAP,
    RISK_SCORE_FLOOR, SYSTOLIC_HIGH,
};
use crate::inference::{InferenceError, RiskInferenceService};
use crate::models::{HealthMetrics, RiskScores};

use super::classifier::classify_scores;
use super::recommendations::risk_recommendations;
use super::types::RiskAssessment;

/// Orchestrates the risk pipeline around one loaded risk model.
///
/// Baseline scores come from the model; the deterministic adjustment pass is
/// layered on top in a fixed order. Adjusted scores always land in
/// [0.05, 0.95] no matter what the baseline was.
pub struct HealthRiskEngine<S: RiskInferenceService> {
    service: S,
}

impl<S: RiskInferenceService> HealthRiskEngine<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Assess chronic-condition risk for one measurement set.
    pub async fn assess(&self, metrics: &HealthMetrics) -> Result<RiskAssessment, InferenceError> {
        let start = Instant::now();

        let bmi = metrics.bmi();

        if !self.service.is_ready() {
            return Err(InferenceError::ModelUnavailable(
                "risk model not loaded".into(),
            ));
        }

        let baseline = self.service.predict(metrics).await?;
        let scores = adjust_scores(baseline, bmi, metrics);

        let levels = classify_scores(&scores);
        let recommendations = risk_recommendations(&scores, bmi);

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            bmi,
            diabetes = scores.diabetes,
            hypertension = scores.hypertension,
            heart_disease = scores.heart_disease,
            processing_ms = processing_time_ms,
            "Risk assessment complete"
        );

        Ok(RiskAssessment::new(
            bmi,
            scores,
            levels,
            recommendations,
            processing_time_ms,
        ))
    }
}

/// Apply the deterministic adjustment pass to baseline model scores.
///
/// The BMI branch is mutually exclusive (obese OR overweight, never both);
/// the vital-sign threshold rules are all evaluated independently. Every
/// addition caps at 0.95 as it lands, and a final clamp into [0.05, 0.95]
/// goes on last: the model may emit anything in [0, 1], including a
/// saturated score no adjustment rule ever touches.
fn adjust_scores(baseline: RiskScores, bmi: f64, metrics: &HealthMetrics) -> RiskScores {
    let mut scores = baseline;

    if bmi > BMI_OBESE {
        scores.diabetes = boost(scores.diabetes, 0.20);
        scores.hypertension = boost(scores.hypertension, 0.15);
        scores.heart_disease = boost(scores.heart_disease, 0.15);
    } else if bmi > BMI_OVERWEIGHT {
        scores.diabetes = boost(scores.diabetes, 0.10);
        scores.hypertension = boost(scores.hypertension, 0.05);
        scores.heart_disease = boost(scores.heart_disease, 0.05);
    }

    if metrics.systolic > SYSTOLIC_HIGH {
        scores.hypertension = boost(scores.hypertension, 0.25);
    }
    if metrics.blood_sugar > BLOOD_SUGAR_HIGH {
        scores.diabetes = boost(scores.diabetes, 0.30);
    }
    if metrics.cholesterol > CHOLESTEROL_HIGH {
        scores.heart_disease = boost(scores.heart_disease, 0.25);
    }

    scores.diabetes = scores.diabetes.clamp(RISK_SCORE_FLOOR, RISK_SCORE_CAP);
    scores.hypertension = scores.hypertension.clamp(RISK_SCORE_FLOOR, RISK_SCORE_CAP);
    scores.heart_disease = scores.heart_disease.clamp(RISK_SCORE_FLOOR, RISK_SCORE_CAP);

    scores
}

/// One additive adjustment, capped as it is applied.
fn boost(score: f64, delta: f64) -> f64 {
    (score + delta).min(RISK_SCORE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::stubs::StubRiskService;
    use crate::models::RiskLevel;

    fn metrics() -> HealthMetrics {
        HealthMetrics {
            age: 40.0,
            systolic: 120.0,
            diastolic: 80.0,
            blood_sugar: 95.0,
            weight_kg: 70.0,
            height_cm: 175.0,
            cholesterol: 180.0,
        }
    }

    fn baseline(diabetes: f64, hypertension: f64, heart_disease: f64) -> RiskScores {
        RiskScores {
            diabetes,
            hypertension,
            heart_disease,
        }
    }

    #[tokio::test]
    async fn healthy_profile_passes_through_with_floor() {
        let engine = HealthRiskEngine::new(StubRiskService::baseline(baseline(0.0, 0.1, 0.02)));
        let result = engine.assess(&metrics()).await.unwrap();

        // Zero baseline floors at 0.05; nothing boosted
        assert_eq!(result.scores.diabetes, 0.05);
        assert_eq!(result.scores.hypertension, 0.1);
        assert_eq!(result.scores.heart_disease, 0.05);
        assert_eq!(result.levels.diabetes, RiskLevel::Low);
        assert_eq!(
            result.recommendations,
            ["Continue maintaining your healthy lifestyle"]
        );
    }

    #[tokio::test]
    async fn obese_bmi_applies_only_the_obese_boost() {
        // 95kg at 172cm → bmi ≈ 32.1
        let mut m = metrics();
        m.weight_kg = 95.0;
        m.height_cm = 172.0;

        let engine = HealthRiskEngine::new(StubRiskService::baseline(baseline(0.4, 0.2, 0.2)));
        let result = engine.assess(&m).await.unwrap();

        assert!(result.bmi > 30.0);
        // 0.4 + 0.20, not 0.4 + 0.20 + 0.10
        assert!((result.scores.diabetes - 0.60).abs() < 1e-9);
        assert!((result.scores.hypertension - 0.35).abs() < 1e-9);
        assert!((result.scores.heart_disease - 0.35).abs() < 1e-9);
    }

    #[tokio::test]
    async fn overweight_bmi_applies_smaller_boost() {
        // 80kg at 175cm → bmi ≈ 26.1
        let mut m = metrics();
        m.weight_kg = 80.0;

        let engine = HealthRiskEngine::new(StubRiskService::baseline(baseline(0.2, 0.2, 0.2)));
        let result = engine.assess(&m).await.unwrap();

        assert!(result.bmi > 25.0 && result.bmi < 30.0);
        assert!((result.scores.diabetes - 0.30).abs() < 1e-9);
        assert!((result.scores.hypertension - 0.25).abs() < 1e-9);
        assert!((result.scores.heart_disease - 0.25).abs() < 1e-9);
    }

    #[tokio::test]
    async fn threshold_rules_fire_independently() {
        let mut m = metrics();
        m.systolic = 150.0;
        m.blood_sugar = 130.0;

        let engine = HealthRiskEngine::new(StubRiskService::baseline(baseline(0.1, 0.1, 0.1)));
        let result = engine.assess(&m).await.unwrap();

        assert!((result.scores.diabetes - 0.40).abs() < 1e-9);
        assert!((result.scores.hypertension - 0.35).abs() < 1e-9);
        // cholesterol rule did not fire
        assert!((result.scores.heart_disease - 0.10).abs() < 1e-9);
    }

    #[tokio::test]
    async fn everything_firing_clamps_to_cap() {
        // bmi ≈ 31.1 plus all three vital thresholds exceeded
        let m = HealthMetrics {
            age: 40.0,
            systolic: 150.0,
            diastolic: 85.0,
            blood_sugar: 130.0,
            weight_kg: 90.0,
            height_cm: 170.0,
            cholesterol: 250.0,
        };

        let engine = HealthRiskEngine::new(StubRiskService::baseline(baseline(0.8, 0.9, 0.7)));
        let result = engine.assess(&m).await.unwrap();

        assert_eq!(result.scores.diabetes, 0.95);
        assert_eq!(result.scores.hypertension, 0.95);
        assert_eq!(result.scores.heart_disease, 0.95);
        assert_eq!(result.levels.diabetes, RiskLevel::High);
        assert_eq!(result.levels.hypertension, RiskLevel::High);
        assert_eq!(result.levels.heart_disease, RiskLevel::High);
    }

    #[tokio::test]
    async fn saturated_baseline_with_no_rules_still_caps() {
        // Healthy vitals fire no adjustment rule, so the cap must come from
        // the final clamp, not from the per-addition boosts.
        let engine = HealthRiskEngine::new(StubRiskService::baseline(baseline(1.0, 1.0, 1.0)));
        let result = engine.assess(&metrics()).await.unwrap();

        assert_eq!(result.scores.diabetes, 0.95);
        assert_eq!(result.scores.hypertension, 0.95);
        assert_eq!(result.scores.heart_disease, 0.95);
    }

    #[tokio::test]
    async fn scores_always_inside_clamp_bounds() {
        let cases = [
            (baseline(0.0, 0.0, 0.0), metrics()),
            (baseline(1.0, 1.0, 1.0), metrics()),
            (baseline(0.5, 0.5, 0.5), {
                let mut m = metrics();
                m.weight_kg = 110.0;
                m.systolic = 180.0;
                m.blood_sugar = 200.0;
                m.cholesterol = 300.0;
                m
            }),
        ];

        for (base, m) in cases {
            let engine = HealthRiskEngine::new(StubRiskService::baseline(base));
            let result = engine.assess(&m).await.unwrap();
            for (_, score) in result.scores.iter() {
                assert!((0.05..=0.95).contains(&score), "score out of range: {score}");
            }
        }
    }

    #[tokio::test]
    async fn unready_model_fails_fast() {
        let engine = HealthRiskEngine::new(StubRiskService::not_ready());
        let err = engine.assess(&metrics()).await.unwrap_err();
        assert!(matches!(err, InferenceError::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn reference_scenario_low_baseline_still_clamps() {
        // Same vitals as everything_firing_clamps_to_cap but a low baseline:
        // 0.2 + 0.20 + 0.30 = 0.70 diabetes, 0.2 + 0.15 + 0.25 = 0.60
        // hypertension, 0.2 + 0.15 + 0.25 = 0.60 heart disease
        let m = HealthMetrics {
            age: 40.0,
            systolic: 150.0,
            diastolic: 85.0,
            blood_sugar: 130.0,
            weight_kg: 90.0,
            height_cm: 170.0,
            cholesterol: 250.0,
        };

        let engine = HealthRiskEngine::new(StubRiskService::baseline(baseline(0.2, 0.2, 0.2)));
        let result = engine.assess(&m).await.unwrap();

        assert!((result.scores.diabetes - 0.70).abs() < 1e-9);
        assert!((result.scores.hypertension - 0.60).abs() < 1e-9);
        assert!((result.scores.heart_disease - 0.60).abs() < 1e-9);
        assert_eq!(result.levels.hypertension, RiskLevel::High);
    }
}
