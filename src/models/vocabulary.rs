use serde::{Deserialize, Serialize};

/// Ordered list of symptom labels a condition model was trained against.
///
/// Order is significant: position i in the vocabulary is position i in every
/// feature vector handed to the model, so a vocabulary must stay stable for
/// the lifetime of the model it belongs to. Construction de-duplicates while
/// preserving first occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let labels = labels
            .into_iter()
            .map(Into::into)
            .filter(|l| seen.insert(l.clone()))
            .collect();
        Self { labels }
    }

    /// The symptom checklist the bundled condition model ships with.
    /// Callers with a differently-trained model supply their own vocabulary.
    pub fn standard() -> Self {
        Self::new([
            "Fever",
            "Cough",
            "Fatigue",
            "Headache",
            "Sore throat",
            "Shortness of breath",
            "Chest pain",
            "Nausea",
            "Vomiting",
            "Diarrhea",
            "Muscle aches",
            "Runny nose",
            "Dizziness",
            "Loss of taste or smell",
            "Rash",
        ])
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_dedups_preserving_order() {
        let vocab = Vocabulary::new(["Fever", "Cough", "Fever", "Headache"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.labels(), ["Fever", "Cough", "Headache"]);
    }

    #[test]
    fn index_follows_declaration_order() {
        let vocab = Vocabulary::new(["Fever", "Cough", "Headache"]);
        assert_eq!(vocab.index_of("Fever"), Some(0));
        assert_eq!(vocab.index_of("Headache"), Some(2));
        assert_eq!(vocab.index_of("Rash"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let vocab = Vocabulary::new(["Fever"]);
        assert!(vocab.contains("Fever"));
        assert!(!vocab.contains("fever"));
    }

    #[test]
    fn standard_vocabulary_has_no_duplicates() {
        let vocab = Vocabulary::standard();
        let mut seen = std::collections::HashSet::new();
        for label in vocab.iter() {
            assert!(seen.insert(label), "duplicate label: {label}");
        }
        assert!(vocab.contains("Chest pain"));
        assert!(vocab.contains("Shortness of breath"));
    }
}
