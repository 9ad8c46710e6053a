use serde::Serialize;

use super::domain::{Applicant, ApplicantId, Program, ProgramId};

/// Storage abstraction so the scoring service can run without a database.
pub trait AdmissionRepository: Send + Sync {
    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError>;
    fn applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    fn program(&self, id: &ProgramId) -> Result<Option<Program>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public listing entry for an applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantSummary {
    pub id: ApplicantId,
    pub program: ProgramSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramSummary {
    pub university: String,
    pub faculty: String,
    pub name: String,
}

impl From<&Program> for ProgramSummary {
    fn from(program: &Program) -> Self {
        Self {
            university: program.university.clone(),
            faculty: program.faculty.clone(),
            name: program.name.clone(),
        }
    }
}
