use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{FieldId, TeacherId, TemplateId};
use crate::gateway::{SubmissionGateway, TemplateDirectory, TransportError};
use crate::session::EvaluationSession;
use crate::submission::EvaluationSubmission;
use crate::template::EvaluationTemplate;

/// Facade composing the template directory, the session lifecycle, and the
/// submission gateway.
pub struct EvaluationService<T, S> {
    templates: Arc<T>,
    submissions: Arc<S>,
}

impl<T, S> EvaluationService<T, S>
where
    T: TemplateDirectory + 'static,
    S: SubmissionGateway + 'static,
{
    pub fn new(templates: Arc<T>, submissions: Arc<S>) -> Self {
        Self {
            templates,
            submissions,
        }
    }

    /// Fetch and ingest a template, returning a fresh session for it.
    ///
    /// A template with no evaluable fields still yields a session; the host
    /// renders the empty state.
    pub fn begin(
        &self,
        template_id: &TemplateId,
    ) -> Result<EvaluationSession, EvaluationServiceError> {
        let raw_fields = self.templates.fetch(template_id)?;
        let template = EvaluationTemplate::from_raw(template_id.clone(), raw_fields);

        debug!(
            template = %template_id.0,
            fields = template.fields().len(),
            unsupported = template.unsupported().len(),
            "evaluation session started"
        );

        Ok(EvaluationSession::new(template))
    }

    /// Replace the session's active template in place, resetting its answers.
    pub fn switch_template(
        &self,
        session: &mut EvaluationSession,
        template_id: &TemplateId,
    ) -> Result<(), EvaluationServiceError> {
        let raw_fields = self.templates.fetch(template_id)?;
        session.switch_template(EvaluationTemplate::from_raw(template_id.clone(), raw_fields));
        Ok(())
    }

    /// Validate, assemble, and persist the session's answers.
    ///
    /// A non-empty error map blocks submission and is returned verbatim so
    /// the host can surface every outstanding requirement. The session is
    /// borrowed, not consumed: after a transport failure the respondent
    /// retries with the same answers, and on success the caller discards the
    /// session.
    pub fn submit(
        &self,
        session: &mut EvaluationSession,
        teacher_id: TeacherId,
    ) -> Result<EvaluationSubmission, EvaluationServiceError> {
        let errors = session.validate();
        if !errors.is_empty() {
            return Err(EvaluationServiceError::Incomplete(errors.clone()));
        }

        let submission = session.submission(teacher_id, Utc::now());
        self.submissions.persist(&submission)?;

        info!(
            teacher = %submission.teacher_id.0,
            template = %submission.template_id.0,
            responses = submission.responses.len(),
            "evaluation submitted"
        );

        Ok(submission)
    }
}

/// Error raised by the evaluation service facade.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error("submission blocked: {} required field(s) unanswered", .0.len())]
    Incomplete(BTreeMap<FieldId, String>),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
