//! Vital-sign risk pipeline.
//!
//! A measurement set becomes BMI plus baseline risk scores from the opaque
//! risk model, then a deterministic adjustment pass layers clinical
//! threshold rules on top and clamps the result into [0.05, 0.95]. Banding
//! and advice are pure functions of the adjusted scores.

pub mod classifier;
pub mod engine;
pub mod recommendations;
pub mod types;

pub use classifier::{classify_scores, risk_level};
pub use engine::HealthRiskEngine;
pub use recommendations::risk_recommendations;
pub use types::{RiskAssessment, RiskLevels};
