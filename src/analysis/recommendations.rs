use crate::models::{SeverityLevel, SymptomSelection};

/// Build ordered advice strings from severity and the raw selection.
///
/// Rules append in a fixed order, then the list is de-duplicated keeping
/// each string's first occurrence. Symptom matching is exact, the same
/// asymmetry the encoder has: a custom label never triggers advice for a
/// label it merely resembles.
pub fn symptom_recommendations(
    severity: SeverityLevel,
    selection: &SymptomSelection,
) -> Vec<String> {
    let mut advice: Vec<&str> = Vec::new();

    if severity == SeverityLevel::High {
        advice.push("Seek immediate medical attention");
    }

    if selection.contains("Fever") {
        advice.push("Rest and stay hydrated");
        advice.push("Take acetaminophen or ibuprofen for fever");
    }

    if selection.contains("Headache") {
        advice.push("Rest in a quiet, dark room");
        advice.push("Consider over-the-counter pain relievers");
    }

    if severity == SeverityLevel::Medium {
        advice.push("Monitor symptoms for 48 hours");
        advice.push("Consider seeing a healthcare provider if symptoms worsen");
    } else if severity == SeverityLevel::Low {
        advice.push("Monitor your symptoms");
        advice.push("Rest as needed");
    }

    advice.push("Contact healthcare provider if symptoms persist or worsen");

    dedup_first_occurrence(advice)
}

/// Keep the first occurrence of each string, preserving order.
fn dedup_first_occurrence(advice: Vec<&str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    advice
        .into_iter()
        .filter(|a| seen.insert(*a))
        .map(String::from)
        .collect()
}
