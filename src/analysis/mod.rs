//! Symptom analysis pipeline.
//!
//! UI hands over a symptom selection plus the vocabulary its model was
//! trained against; the pipeline encodes, runs the condition model, filters
//! the ranking, classifies severity with a deterministic rule table, and
//! produces ordered advice strings. Everything except the single model call
//! is synchronous and pure.

pub mod encoder;
pub mod engine;
pub mod postprocess;
pub mod recommendations;
pub mod severity;
pub mod types;

pub use encoder::encode;
pub use engine::SymptomAnalysisEngine;
pub use postprocess::filter_predictions;
pub use recommendations::symptom_recommendations;
pub use severity::classify_severity;
pub use types::{AnalysisError, SymptomAnalysis};
