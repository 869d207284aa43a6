use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{FieldId, FieldKind, FieldOption, FieldSchema, TemplateId};

/// Untyped field definition as served by the template collaborator.
///
/// `field_type` is still a free string here; ingestion is where the closed
/// vocabulary is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFieldSchema {
    pub id: FieldId,
    pub label: String,
    pub field_type: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

/// A field whose declared type fell outside the closed vocabulary.
///
/// Kept alongside the typed fields so hosts can render it as explicitly
/// unsupported; it is excluded from validation, scoring, and assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedField {
    pub id: FieldId,
    pub label: String,
    pub declared_type: String,
}

/// Ingested, sanitized field set for one evaluation template.
///
/// Field order is preserved from the payload. An empty field list is a valid
/// empty state, not an error; callers surface it as "no evaluable fields".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationTemplate {
    id: TemplateId,
    fields: Vec<FieldSchema>,
    unsupported: Vec<UnsupportedField>,
}

impl EvaluationTemplate {
    /// Ingest a raw template payload, enforcing the field-type vocabulary and
    /// sanitizing weights.
    ///
    /// Unknown field types are a template-author data-quality fault, not a
    /// session-fatal error: the offending fields are set aside and logged,
    /// and the rest of the template stays usable. Weights that are negative
    /// or non-finite are clamped to zero, which keeps the field out of
    /// scoring without disturbing its requiredness.
    pub fn from_raw(id: TemplateId, raw_fields: Vec<RawFieldSchema>) -> Self {
        let mut fields = Vec::with_capacity(raw_fields.len());
        let mut unsupported = Vec::new();

        for raw in raw_fields {
            let Some(kind) = FieldKind::parse(&raw.field_type) else {
                warn!(
                    template = %id.0,
                    field = %raw.id.0,
                    declared_type = %raw.field_type,
                    "template declares unsupported field type; excluding field"
                );
                unsupported.push(UnsupportedField {
                    id: raw.id,
                    label: raw.label,
                    declared_type: raw.field_type,
                });
                continue;
            };

            let weight = if raw.weight.is_finite() && raw.weight > 0.0 {
                raw.weight
            } else {
                if raw.weight != 0.0 {
                    warn!(
                        template = %id.0,
                        field = %raw.id.0,
                        weight = raw.weight,
                        "template declares invalid weight; treating as unweighted"
                    );
                }
                0.0
            };

            fields.push(FieldSchema {
                id: raw.id,
                label: raw.label,
                kind,
                required: raw.is_required,
                weight,
                options: raw.options,
            });
        }

        Self {
            id,
            fields,
            unsupported,
        }
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    /// The evaluable fields, in template order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Fields rejected at ingestion, for empty-state and data-quality display.
    pub fn unsupported(&self) -> &[UnsupportedField] {
        &self.unsupported
    }

    /// True when the template offers no evaluable fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
