//! Teacher-evaluation engine for school operations.
//!
//! The engine is schema-driven: a template serves typed field definitions,
//! each with its own validation and scoring semantics, and the submitted
//! answers aggregate into a single weighted, normalized score with a
//! qualitative band. Transport, storage, and the wizard UI are external
//! collaborators reachable only through the gateway traits; this crate owns
//! the data model, validation rules, and scoring algorithm.

pub mod domain;
pub mod gateway;
pub mod scoring;
pub mod service;
pub mod session;
pub mod submission;
pub mod template;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Commentary, FieldId, FieldKind, FieldOption, FieldSchema, ResponseEntry, ScoreBand,
    ScorePreview, TeacherId, TemplateId,
};
pub use gateway::{SubmissionGateway, TemplateDirectory, TransportError};
pub use service::{EvaluationService, EvaluationServiceError};
pub use session::{EvaluationSession, ResponseStore};
pub use submission::{EvaluationSubmission, SubmissionRecord};
pub use template::{EvaluationTemplate, RawFieldSchema, UnsupportedField};
