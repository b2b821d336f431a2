use crate::config::BMI_OVERWEIGHT;
use crate::models::RiskScores;

/// Build advice from adjusted risk scores and BMI.
///
/// Rules evaluate in a fixed order; triggers are disjoint by construction so
/// no dedup pass is needed. A profile that fires nothing gets the single
/// maintenance fallback, so the list is never empty.
pub fn risk_recommendations(scores: &RiskScores, bmi: f64) -> Vec<String> {
    let mut advice: Vec<&str> = Vec::new();

    if scores.diabetes > 0.3 {
        advice.push("Monitor blood sugar levels regularly");
        if scores.diabetes > 0.6 {
            advice.push("Consider consulting with a healthcare provider about diabetes risk");
        }
    }

    if scores.hypertension > 0.3 {
        advice.push("Monitor blood pressure regularly");
        if scores.hypertension > 0.6 {
            advice.push("Consider lifestyle changes to lower blood pressure");
        }
    }

    if scores.heart_disease > 0.3 {
        advice.push("Consider having your cholesterol checked regularly");
    }

    if bmi > BMI_OVERWEIGHT {
        advice.push("Consider physical activity and dietary changes to achieve a healthier weight");
    }

    if advice.is_empty() {
        advice.push("Continue maintaining your healthy lifestyle");
    }

    advice.into_iter().map(String::from).collect()
}
