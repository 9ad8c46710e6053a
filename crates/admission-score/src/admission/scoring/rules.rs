use super::super::domain::{Applicant, SubjectName};
use super::super::error::AdmissionError;
use super::super::requirements::ProgramRequirements;
use super::super::values::{ExamResult, LanguageCertificate};

/// Validated inputs of one scoring run, in stored order.
pub(crate) struct ValidatedRecords {
    pub exam_results: Vec<ExamResult>,
    pub certificates: Vec<LanguageCertificate>,
}

/// Builds value objects from the stored rows; the first invalid percentage aborts the run.
pub(crate) fn map_records(applicant: &Applicant) -> Result<ValidatedRecords, AdmissionError> {
    let exam_results = applicant
        .exam_results
        .iter()
        .map(ExamResult::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let certificates = applicant
        .bonus_points
        .iter()
        .map(LanguageCertificate::from)
        .collect();

    Ok(ValidatedRecords {
        exam_results,
        certificates,
    })
}

pub(crate) fn ensure_global_mandatory_subjects(
    exam_results: &[ExamResult],
) -> Result<(), AdmissionError> {
    let all_present = SubjectName::globally_mandatory()
        .iter()
        .all(|required| exam_results.iter().any(|result| result.subject() == *required));

    if all_present {
        Ok(())
    } else {
        Err(AdmissionError::MissingGlobalMandatorySubject)
    }
}

pub(crate) fn find_program_mandatory<'a>(
    exam_results: &'a [ExamResult],
    requirements: &impl ProgramRequirements,
) -> Result<&'a ExamResult, AdmissionError> {
    let subject = requirements.mandatory_subject();
    exam_results
        .iter()
        .find(|result| result.subject() == subject)
        .ok_or(AdmissionError::MissingProgramMandatorySubject { subject })
}

pub(crate) fn ensure_mandatory_level(
    mandatory: &ExamResult,
    requirements: &impl ProgramRequirements,
) -> Result<(), AdmissionError> {
    match requirements.mandatory_subject_level() {
        Some(required_level) if !mandatory.is_advanced_level() => {
            Err(AdmissionError::ProgramMandatorySubjectLevel {
                subject: mandatory.subject(),
                required_level,
            })
        }
        _ => Ok(()),
    }
}

/// Highest-scoring accepted elective. Ties keep the earlier result.
pub(crate) fn find_best_elective<'a>(
    exam_results: &'a [ExamResult],
    requirements: &impl ProgramRequirements,
) -> Result<&'a ExamResult, AdmissionError> {
    let electives = requirements.elective_subjects();
    let mut best: Option<&ExamResult> = None;

    for result in exam_results
        .iter()
        .filter(|result| electives.contains(&result.subject()))
    {
        match best {
            Some(current) if result.points() <= current.points() => {}
            _ => best = Some(result),
        }
    }

    best.ok_or(AdmissionError::MissingElectiveSubject)
}
