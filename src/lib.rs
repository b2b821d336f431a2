pub mod analysis; // Symptom pipeline: encode, infer, filter, classify, advise
pub mod config;
pub mod inference; // Opaque predictor boundary (condition + risk models)
pub mod models;
pub mod risk; // Vital-sign pipeline: BMI, baseline risk, adjustment rules

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and integration harnesses embedding the
/// engine. Library consumers that already install a subscriber skip this.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Triava engine v{}", config::ENGINE_VERSION);
}
