pub mod enums;
pub mod metrics;
pub mod prediction;
pub mod selection;
pub mod vocabulary;

pub use enums::{ParseSeverityError, RiskCategory, RiskLevel, SeverityLevel};
pub use metrics::{HealthMetrics, RiskScores};
pub use prediction::{ConditionPrediction, SymptomVector};
pub use selection::SymptomSelection;
pub use vocabulary::Vocabulary;
