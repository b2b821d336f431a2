use crate::models::{SeverityLevel, SymptomSelection};

/// Labels that make a selection high severity on their own.
const HIGH_SEVERITY_SYMPTOMS: [&str; 2] = ["Shortness of breath", "Chest pain"];

/// Classify triage severity from symptom presence alone.
///
/// First-match-wins over an ordered rule table; total over any non-empty
/// selection. Matching is exact string equality, so custom labels never
/// trigger a rule they merely resemble.
///
/// 1. High: "Shortness of breath" or "Chest pain" present.
/// 2. Medium: "Fever" together with "Cough" or "Fatigue".
/// 3. Low: everything else.
pub fn classify_severity(selection: &SymptomSelection) -> SeverityLevel {
    if HIGH_SEVERITY_SYMPTOMS.iter().any(|s| selection.contains(s)) {
        return SeverityLevel::High;
    }

    if selection.contains("Fever") && (selection.contains("Cough") || selection.contains("Fatigue"))
    {
        return SeverityLevel::Medium;
    }

    SeverityLevel::Low
}
