use crate::models::{SymptomSelection, SymptomVector, Vocabulary};

use super::types::AnalysisError;

/// Encode a symptom selection into the fixed-length {0,1} vector the
/// condition model expects.
///
/// Bit i is set iff vocabulary label i appears in the selection (exact,
/// case-sensitive match). Labels the vocabulary does not know produce no
/// bit: they are invisible to the model but still reach the severity and
/// recommendation rules as raw strings.
pub fn encode(
    selection: &SymptomSelection,
    vocabulary: &Vocabulary,
) -> Result<SymptomVector, AnalysisError> {
    if selection.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let bits = vocabulary
        .iter()
        .map(|label| u8::from(selection.contains(label)))
        .collect();

    Ok(SymptomVector(bits))
}
