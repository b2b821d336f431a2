use crate::config::{RISK_LOW_BELOW, RISK_MODERATE_BELOW};
use crate::models::{RiskLevel, RiskScores};

use super::types::RiskLevels;

/// Band one risk score: < 0.3 Low, < 0.6 Moderate, else High.
pub fn risk_level(score: f64) -> RiskLevel {
    if score < RISK_LOW_BELOW {
        RiskLevel::Low
    } else if score < RISK_MODERATE_BELOW {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Band each category independently.
pub fn classify_scores(scores: &RiskScores) -> RiskLevels {
    RiskLevels {
        diabetes: risk_level(scores.diabetes),
        hypertension: risk_level(scores.hypertension),
        heart_disease: risk_level(scores.heart_disease),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(risk_level(0.05), RiskLevel::Low);
        assert_eq!(risk_level(0.29), RiskLevel::Low);
        assert_eq!(risk_level(0.3), RiskLevel::Moderate);
        assert_eq!(risk_level(0.59), RiskLevel::Moderate);
        assert_eq!(risk_level(0.6), RiskLevel::High);
        assert_eq!(risk_level(0.95), RiskLevel::High);
    }

    #[test]
    fn categories_band_independently() {
        let levels = classify_scores(&RiskScores {
            diabetes: 0.1,
            hypertension: 0.45,
            heart_disease: 0.9,
        });
        assert_eq!(levels.diabetes, RiskLevel::Low);
        assert_eq!(levels.hypertension, RiskLevel::Moderate);
        assert_eq!(levels.heart_disease, RiskLevel::High);
    }
}
