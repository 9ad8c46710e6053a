//! Applicant intake, requirement resolution, and admission scoring.

pub mod domain;
pub mod error;
pub mod import;
pub mod repository;
pub mod requirements;
pub mod router;
pub mod scoring;
pub mod service;
pub mod values;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantId, BonusPointRecord, ExamLevel, ExamResultRecord,
    LanguageCertificateType, Program, ProgramId, ProgramSubject, RequirementType, SubjectName,
};
pub use error::AdmissionError;
pub use import::{
    parse_applicant_records, parse_applicant_records_from_path, ApplicantRecords, ImportError,
};
pub use repository::{AdmissionRepository, ApplicantSummary, ProgramSummary, RepositoryError};
pub use requirements::{ProgramCatalog, ProgramRegistry, ProgramRequirements, SubjectRequirements};
pub use router::{admission_error_payload, admission_router};
pub use scoring::{AdmissionScorer, BasePointCalculator, BonusPointCalculator};
pub use service::{AdmissionScoringService, ScoringServiceError};
pub use values::{ExamResult, LanguageCertificate, Score, ScoreView};
