use std::collections::BTreeMap;

use crate::domain::{FieldId, FieldSchema};
use crate::session::ResponseStore;

/// Determine which required fields are still unanswered.
///
/// Every failure is collected, never short-circuited, so the respondent sees
/// all outstanding requirements simultaneously. The answered predicate is
/// type-specific: ratings and yes/no require a present `numeric_value` (zero
/// is an answer), text-likes and selects require a non-empty display value.
/// Optional fields never produce errors, whatever their state.
pub fn validate(fields: &[FieldSchema], responses: &ResponseStore) -> BTreeMap<FieldId, String> {
    let mut errors = BTreeMap::new();

    for field in fields {
        if !field.required {
            continue;
        }

        let entry = responses.get(&field.id);
        if !field.kind.is_answered(&entry) {
            errors.insert(field.id.clone(), required_message(field));
        }
    }

    errors
}

fn required_message(field: &FieldSchema) -> String {
    format!("{} is required.", field.label)
}
