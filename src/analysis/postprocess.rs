use crate::models::ConditionPrediction;

/// Filter a ranked prediction list down to what the caller should see.
///
/// Keeps entries with probability strictly above `min_probability`, then
/// truncates to the first `max_count`. The input arrives sorted descending
/// from the model and is never re-sorted here. An empty result means no
/// condition cleared the threshold, which callers render as its own state,
/// not as a failure.
pub fn filter_predictions(
    predictions: &[ConditionPrediction],
    min_probability: f64,
    max_count: usize,
) -> Vec<ConditionPrediction> {
    predictions
        .iter()
        .filter(|p| p.probability > min_probability)
        .take(max_count)
        .cloned()
        .collect()
}
