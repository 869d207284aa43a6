use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{FieldId, FieldKind, FieldOption, FieldSchema, TemplateId};
use crate::gateway::{SubmissionGateway, TemplateDirectory, TransportError};
use crate::service::EvaluationService;
use crate::session::EvaluationSession;
use crate::submission::EvaluationSubmission;
use crate::template::{EvaluationTemplate, RawFieldSchema};

pub(super) fn field_id(id: &str) -> FieldId {
    FieldId(id.to_string())
}

pub(super) fn template_id(id: &str) -> TemplateId {
    TemplateId(id.to_string())
}

pub(super) fn field(id: &str, kind: FieldKind, required: bool, weight: f64) -> FieldSchema {
    FieldSchema {
        id: field_id(id),
        label: format!("Criterion {id}"),
        kind,
        required,
        weight,
        options: Vec::new(),
    }
}

pub(super) fn select_field(id: &str, required: bool, options: &[(&str, &str)]) -> FieldSchema {
    FieldSchema {
        options: options
            .iter()
            .map(|(value, label)| FieldOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
        ..field(id, FieldKind::Select, required, 0.0)
    }
}

pub(super) fn raw_field(id: &str, field_type: &str, required: bool, weight: f64) -> RawFieldSchema {
    RawFieldSchema {
        id: field_id(id),
        label: format!("Criterion {id}"),
        field_type: field_type.to_string(),
        is_required: required,
        weight,
        options: Vec::new(),
    }
}

/// The classroom-observation rubric used across scoring and workflow tests:
/// a required weighted rating, an optional double-weighted yes/no, and an
/// unweighted reflection field.
pub(super) fn observation_fields() -> Vec<FieldSchema> {
    vec![
        field("subject-mastery", FieldKind::Rating1To5, true, 1.0),
        field("lesson-plan-ready", FieldKind::YesNo, false, 2.0),
        field("observer-notes", FieldKind::TextArea, false, 0.0),
    ]
}

pub(super) fn observation_template() -> EvaluationTemplate {
    EvaluationTemplate::from_raw(
        template_id("tpl-observation"),
        vec![
            raw_field("subject-mastery", "rating_1_5", true, 1.0),
            raw_field("lesson-plan-ready", "yes_no", false, 2.0),
            raw_field("observer-notes", "textarea", false, 0.0),
        ],
    )
}

pub(super) fn observation_session() -> EvaluationSession {
    EvaluationSession::new(observation_template())
}

#[derive(Default)]
pub(super) struct MemoryDirectory {
    templates: Mutex<HashMap<TemplateId, Vec<RawFieldSchema>>>,
}

impl MemoryDirectory {
    pub(super) fn with_template(id: TemplateId, fields: Vec<RawFieldSchema>) -> Self {
        let directory = Self::default();
        directory.insert(id, fields);
        directory
    }

    pub(super) fn insert(&self, id: TemplateId, fields: Vec<RawFieldSchema>) {
        self.templates
            .lock()
            .expect("directory mutex poisoned")
            .insert(id, fields);
    }
}

impl TemplateDirectory for MemoryDirectory {
    fn fetch(&self, id: &TemplateId) -> Result<Vec<RawFieldSchema>, TransportError> {
        self.templates
            .lock()
            .expect("directory mutex poisoned")
            .get(id)
            .cloned()
            .ok_or(TransportError::NotFound)
    }
}

#[derive(Default)]
pub(super) struct MemoryGateway {
    submissions: Mutex<Vec<EvaluationSubmission>>,
}

impl MemoryGateway {
    pub(super) fn submissions(&self) -> Vec<EvaluationSubmission> {
        self.submissions
            .lock()
            .expect("gateway mutex poisoned")
            .clone()
    }
}

impl SubmissionGateway for MemoryGateway {
    fn persist(&self, submission: &EvaluationSubmission) -> Result<(), TransportError> {
        self.submissions
            .lock()
            .expect("gateway mutex poisoned")
            .push(submission.clone());
        Ok(())
    }
}

pub(super) struct OfflineGateway;

impl SubmissionGateway for OfflineGateway {
    fn persist(&self, _submission: &EvaluationSubmission) -> Result<(), TransportError> {
        Err(TransportError::Unavailable("persistence offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    EvaluationService<MemoryDirectory, MemoryGateway>,
    Arc<MemoryGateway>,
) {
    let directory = Arc::new(MemoryDirectory::with_template(
        template_id("tpl-observation"),
        vec![
            raw_field("subject-mastery", "rating_1_5", true, 1.0),
            raw_field("lesson-plan-ready", "yes_no", false, 2.0),
            raw_field("observer-notes", "textarea", false, 0.0),
        ],
    ));
    let gateway = Arc::new(MemoryGateway::default());
    let service = EvaluationService::new(directory, gateway.clone());
    (service, gateway)
}
