use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{Applicant, ApplicantId, Program};
use super::error::AdmissionError;
use super::repository::{AdmissionRepository, ApplicantSummary, RepositoryError};
use super::requirements::SubjectRequirements;
use super::scoring::AdmissionScorer;
use super::values::Score;

/// Service composing the repository and the scoring pipeline.
pub struct AdmissionScoringService<R> {
    repository: Arc<R>,
    scorer: AdmissionScorer,
}

impl<R> AdmissionScoringService<R>
where
    R: AdmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            scorer: AdmissionScorer::new(),
        }
    }

    /// List applicants with the program they applied to.
    pub fn list(&self) -> Result<Vec<ApplicantSummary>, ScoringServiceError> {
        let mut summaries = Vec::new();
        for applicant in self.repository.applicants()? {
            let program = self
                .repository
                .program(&applicant.program_id)?
                .ok_or(RepositoryError::NotFound)?;
            summaries.push(ApplicantSummary {
                id: applicant.id,
                program: (&program).into(),
            });
        }
        Ok(summaries)
    }

    /// Score a stored applicant against its program's requirements.
    pub fn score(&self, applicant_id: &ApplicantId) -> Result<Score, ScoringServiceError> {
        let applicant = self
            .repository
            .applicant(applicant_id)?
            .ok_or(RepositoryError::NotFound)?;
        let program = self.repository.program(&applicant.program_id)?;

        match self.score_loaded(&applicant, program.as_ref()) {
            Ok(score) => {
                info!(
                    applicant = %applicant_id.0,
                    base = score.base_points(),
                    bonus = score.bonus_points(),
                    total = score.total(),
                    "applicant scored"
                );
                Ok(score)
            }
            Err(err) => {
                warn!(applicant = %applicant_id.0, kind = err.kind(), "scoring rejected");
                Err(err.into())
            }
        }
    }

    /// A missing program surfaces as `UnknownProgram` from inside the pipeline, after the
    /// program-independent checks.
    fn score_loaded(
        &self,
        applicant: &Applicant,
        program: Option<&Program>,
    ) -> Result<Score, AdmissionError> {
        let registry = |_: &Applicant| {
            program
                .ok_or(AdmissionError::UnknownProgram)
                .and_then(SubjectRequirements::from_program)
        };
        self.scorer.calculate_for_applicant(applicant, &registry)
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error(transparent)]
    Admission(#[from] AdmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
