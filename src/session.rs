use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Commentary, FieldId, ResponseEntry, ScorePreview, TeacherId};
use crate::scoring;
use crate::submission::{self, EvaluationSubmission};
use crate::template::EvaluationTemplate;
use crate::validation;

/// Per-session mapping from field id to the respondent's current answer.
///
/// Mutated by exactly one respondent; no locking. Entries are replaced
/// wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseStore {
    entries: BTreeMap<FieldId, ResponseEntry>,
}

impl ResponseStore {
    pub fn set(&mut self, field_id: FieldId, entry: ResponseEntry) {
        self.entries.insert(field_id, entry);
    }

    /// Current entry for a field, or the unanswered entry if never set.
    pub fn get(&self, field_id: &FieldId) -> ResponseEntry {
        self.entries.get(field_id).cloned().unwrap_or_default()
    }

    /// Drop all entries; called whenever the active template changes.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One respondent's in-progress evaluation of one teacher.
///
/// Replaces the ambient per-form UI state of the source system with an
/// explicit value object owning the ingested template, the response store,
/// the live per-field error map, and commentary. Created empty when a
/// template is chosen and discarded on submission or cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSession {
    template: EvaluationTemplate,
    responses: ResponseStore,
    errors: BTreeMap<FieldId, String>,
    commentary: Commentary,
}

impl EvaluationSession {
    pub fn new(template: EvaluationTemplate) -> Self {
        Self {
            template,
            responses: ResponseStore::default(),
            errors: BTreeMap::new(),
            commentary: Commentary::default(),
        }
    }

    pub fn template(&self) -> &EvaluationTemplate {
        &self.template
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    /// Replace the active template, discarding all answers and errors.
    pub fn switch_template(&mut self, template: EvaluationTemplate) {
        self.template = template;
        self.responses.reset();
        self.errors.clear();
        self.commentary = Commentary::default();
    }

    /// Record an answer, replacing any previous entry for the field and
    /// clearing its outstanding validation error.
    pub fn record_answer(
        &mut self,
        field_id: FieldId,
        value: impl Into<String>,
        numeric_value: Option<f64>,
    ) {
        self.errors.remove(&field_id);
        self.responses
            .set(field_id, ResponseEntry::new(value, numeric_value));
    }

    pub fn answer(&self, field_id: &FieldId) -> ResponseEntry {
        self.responses.get(field_id)
    }

    /// Run required-field validation, refreshing the stored error map.
    ///
    /// All failures are collected so the respondent sees every outstanding
    /// requirement at once; an empty map means the field set is complete.
    pub fn validate(&mut self) -> &BTreeMap<FieldId, String> {
        self.errors = validation::validate(self.template.fields(), &self.responses);
        &self.errors
    }

    /// Errors recorded by the most recent `validate` call, as since amended
    /// by `record_answer`.
    pub fn errors(&self) -> &BTreeMap<FieldId, String> {
        &self.errors
    }

    /// Live weighted-score projection; pure, recomputable per mutation.
    pub fn preview(&self) -> ScorePreview {
        scoring::score(self.template.fields(), &self.responses)
    }

    pub fn commentary(&self) -> &Commentary {
        &self.commentary
    }

    pub fn set_commentary(&mut self, commentary: Commentary) {
        self.commentary = commentary;
    }

    /// Assemble the outbound submission payload for this session.
    ///
    /// By contract this is only meaningful once `validate` has returned an
    /// empty map; the assembler itself never re-validates.
    pub fn submission(
        &self,
        teacher_id: TeacherId,
        submitted_at: DateTime<Utc>,
    ) -> EvaluationSubmission {
        EvaluationSubmission {
            teacher_id,
            template_id: self.template.id().clone(),
            responses: submission::assemble(self.template.fields(), &self.responses),
            commentary: self.commentary.clone(),
            submitted_at,
        }
    }
}
