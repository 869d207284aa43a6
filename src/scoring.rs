use crate::domain::{FieldSchema, ScoreBand, ScorePreview};
use crate::session::ResponseStore;

/// Aggregate the answered, positively-weighted scorable fields into a single
/// normalized score.
///
/// Per field: a missing or non-finite numeric answer skips the field entirely
/// (it contributes to neither numerator nor denominator — an unanswered
/// optional field must not depress the average as a zero). Kinds without a
/// normalization rule are skipped even when weighted. When no field
/// contributes any weight the score is indeterminate, never zero.
pub fn score(fields: &[FieldSchema], responses: &ResponseStore) -> ScorePreview {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for field in fields {
        if field.weight <= 0.0 {
            continue;
        }

        let entry = responses.get(&field.id);
        let Some(raw) = entry.numeric_value else {
            continue;
        };
        if !raw.is_finite() {
            continue;
        }

        let Some(normalized) = field.kind.normalize(raw) else {
            continue;
        };

        weighted_sum += normalized * field.weight;
        total_weight += field.weight;
    }

    if total_weight == 0.0 {
        return ScorePreview::indeterminate();
    }

    let score = round_to_tenths(weighted_sum / total_weight);
    ScorePreview {
        score: Some(score),
        band: Some(ScoreBand::for_score(score)),
    }
}

/// Round half-up on the tenths digit.
fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
