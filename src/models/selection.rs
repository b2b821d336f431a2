use serde::{Deserialize, Serialize};

/// The set of symptom labels a user picked for one analysis.
///
/// Labels outside the model vocabulary ("custom symptoms") are legal here:
/// the encoder drops them from the feature vector, but severity and
/// recommendation rules still see them as raw strings. De-duplicated,
/// insertion-ordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomSelection {
    labels: Vec<String>,
}

impl SymptomSelection {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for label in labels {
            selection.add(label);
        }
        selection
    }

    /// Add a label; duplicates are ignored.
    pub fn add<S: Into<String>>(&mut self, label: S) {
        let label = label.into();
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
