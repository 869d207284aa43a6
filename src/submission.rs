use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Commentary, FieldId, FieldSchema, TeacherId, TemplateId};
use crate::session::ResponseStore;

/// One answered (or deliberately blank) field in the outbound payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub field_id: FieldId,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
}

/// Full payload handed to the persistence collaborator at commit time.
///
/// Immutable once assembled. Commentary fields are omitted from the
/// serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSubmission {
    pub teacher_id: TeacherId,
    pub template_id: TemplateId,
    pub responses: Vec<SubmissionRecord>,
    #[serde(flatten)]
    pub commentary: Commentary,
    pub submitted_at: DateTime<Utc>,
}

/// Flatten the response store into one record per schema field, in schema
/// order.
///
/// Fields the respondent never touched are still emitted, with an empty value
/// and no numeric value, so the persisted row set always mirrors the template
/// shape. No validation happens here; callers gate on an empty error map
/// first.
pub fn assemble(fields: &[FieldSchema], responses: &ResponseStore) -> Vec<SubmissionRecord> {
    fields
        .iter()
        .map(|field| {
            let entry = responses.get(&field.id);
            SubmissionRecord {
                field_id: field.id.clone(),
                value: entry.value,
                numeric_value: entry.numeric_value,
            }
        })
        .collect()
}
