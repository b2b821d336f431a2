//! Engine-level constants. Every tunable the rule layer depends on lives
//! here so the decision tables in `analysis` and `risk` stay literal-free.

pub const ENGINE_NAME: &str = "Triava";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "triava=info"
}

// ─── Condition prediction post-processing ────────────────────────────────────

/// Predictions at or below this probability are discarded (strict `>`).
pub const MIN_CONDITION_PROBABILITY: f64 = 0.15;

/// Maximum conditions surfaced by a full analysis.
pub const MAX_CONDITIONS_FULL: usize = 4;

/// Maximum conditions surfaced by a quick check.
pub const MAX_CONDITIONS_QUICK: usize = 1;

// ─── Risk adjustment thresholds ──────────────────────────────────────────────

/// BMI above which the obese-range additive boost applies.
pub const BMI_OBESE: f64 = 30.0;

/// BMI above which the overweight-range additive boost applies
/// (only when the obese branch did not fire).
pub const BMI_OVERWEIGHT: f64 = 25.0;

/// Systolic pressure (mmHg) above which the hypertension boost applies.
pub const SYSTOLIC_HIGH: f64 = 140.0;

/// Fasting blood sugar (mg/dL) above which the diabetes boost applies.
pub const BLOOD_SUGAR_HIGH: f64 = 126.0;

/// Total cholesterol (mg/dL) above which the heart-disease boost applies.
pub const CHOLESTEROL_HIGH: f64 = 240.0;

/// Ceiling applied after every additive adjustment.
pub const RISK_SCORE_CAP: f64 = 0.95;

/// Floor applied once all adjustments are in.
pub const RISK_SCORE_FLOOR: f64 = 0.05;

// ─── Risk level bands ────────────────────────────────────────────────────────

/// Scores below this band as Low.
pub const RISK_LOW_BELOW: f64 = 0.3;

/// Scores below this (and not Low) band as Moderate; the rest are High.
pub const RISK_MODERATE_BELOW: f64 = 0.6;
