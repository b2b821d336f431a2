use serde::{Deserialize, Serialize};

/// Fixed-length {0,1} encoding of a symptom selection against a vocabulary.
/// Element i is 1 iff vocabulary label i was selected. Length always equals
/// the vocabulary length the vector was encoded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomVector(pub Vec<u8>);

impl SymptomVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of set bits (selected in-vocabulary symptoms).
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// One ranked entry from the condition model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionPrediction {
    pub condition: String,
    /// Model-assigned probability in [0, 1].
    pub probability: f64,
}

impl ConditionPrediction {
    pub fn new<S: Into<String>>(condition: S, probability: f64) -> Self {
        Self {
            condition: condition.into(),
            probability,
        }
    }
}
