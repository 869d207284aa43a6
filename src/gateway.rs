use crate::domain::TemplateId;
use crate::submission::EvaluationSubmission;
use crate::template::RawFieldSchema;

/// Source of template field definitions (the schema-fetch collaborator).
///
/// An empty field list is a valid response and surfaces as an empty-state
/// template, not an error.
pub trait TemplateDirectory: Send + Sync {
    fn fetch(&self, id: &TemplateId) -> Result<Vec<RawFieldSchema>, TransportError>;
}

/// Sink for committed evaluations (the persistence collaborator).
pub trait SubmissionGateway: Send + Sync {
    fn persist(&self, submission: &EvaluationSubmission) -> Result<(), TransportError>;
}

/// Failure from an external collaborator.
///
/// The core performs no retry and holds no partial state needing rollback; a
/// failed fetch or persist leaves the session's answers intact so the same
/// operation can simply be retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("template not found")]
    NotFound,
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}
