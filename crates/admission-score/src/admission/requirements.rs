use std::collections::HashMap;

use super::domain::{
    Applicant, ExamLevel, Program, ProgramId, ProgramSubject, RequirementType, SubjectName,
};
use super::error::AdmissionError;

/// Read-only view of what a program demands from its applicants.
pub trait ProgramRequirements {
    fn mandatory_subject(&self) -> SubjectName;
    /// Present only when the program demands a specific level for the mandatory subject.
    fn mandatory_subject_level(&self) -> Option<ExamLevel>;
    fn elective_subjects(&self) -> &[SubjectName];
}

/// Resolves the requirements that apply to an applicant.
pub trait ProgramRegistry {
    type Requirements: ProgramRequirements;

    fn find_by_applicant(&self, applicant: &Applicant)
        -> Result<Self::Requirements, AdmissionError>;
}

impl<F, R> ProgramRegistry for F
where
    F: Fn(&Applicant) -> Result<R, AdmissionError>,
    R: ProgramRequirements,
{
    type Requirements = R;

    fn find_by_applicant(&self, applicant: &Applicant) -> Result<R, AdmissionError> {
        self(applicant)
    }
}

/// Requirements derived from a program's requirement rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRequirements {
    mandatory_subject: SubjectName,
    mandatory_subject_level: Option<ExamLevel>,
    elective_subjects: Vec<SubjectName>,
}

impl SubjectRequirements {
    pub fn new(
        mandatory_subject: SubjectName,
        mandatory_subject_level: Option<ExamLevel>,
        elective_subjects: Vec<SubjectName>,
    ) -> Self {
        Self {
            mandatory_subject,
            mandatory_subject_level,
            elective_subjects,
        }
    }

    /// The first mandatory row wins; electives keep row order. No mandatory row means the
    /// program data is unusable.
    pub fn from_program_subjects(subjects: &[ProgramSubject]) -> Result<Self, AdmissionError> {
        let mandatory = subjects
            .iter()
            .find(|row| row.requirement_type == RequirementType::Mandatory)
            .ok_or(AdmissionError::UnknownProgram)?;

        let elective_subjects = subjects
            .iter()
            .filter(|row| row.requirement_type == RequirementType::Elective)
            .map(|row| row.subject)
            .collect();

        Ok(Self {
            mandatory_subject: mandatory.subject,
            mandatory_subject_level: mandatory.required_level,
            elective_subjects,
        })
    }

    pub fn from_program(program: &Program) -> Result<Self, AdmissionError> {
        Self::from_program_subjects(&program.subjects)
    }
}

impl ProgramRequirements for SubjectRequirements {
    fn mandatory_subject(&self) -> SubjectName {
        self.mandatory_subject
    }

    fn mandatory_subject_level(&self) -> Option<ExamLevel> {
        self.mandatory_subject_level
    }

    fn elective_subjects(&self) -> &[SubjectName] {
        &self.elective_subjects
    }
}

/// In-memory program lookup keyed by program id.
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    programs: HashMap<ProgramId, Program>,
}

impl ProgramCatalog {
    pub fn new(programs: impl IntoIterator<Item = Program>) -> Self {
        Self {
            programs: programs
                .into_iter()
                .map(|program| (program.id.clone(), program))
                .collect(),
        }
    }

    pub fn get(&self, id: &ProgramId) -> Option<&Program> {
        self.programs.get(id)
    }
}

impl ProgramRegistry for ProgramCatalog {
    type Requirements = SubjectRequirements;

    fn find_by_applicant(&self, applicant: &Applicant) -> Result<SubjectRequirements, AdmissionError> {
        let program = self
            .programs
            .get(&applicant.program_id)
            .ok_or(AdmissionError::UnknownProgram)?;
        SubjectRequirements::from_program(program)
    }
}
